//! Data model for the surgical antibiotic-prophylaxis catalog.

pub mod catalog;
pub mod dataset;

pub use catalog::{Catalog, DEFAULT_PAGE_LIMIT, InterventionRef, Page};
pub use dataset::{
    AllergyAlternative, Dataset, GeneralRecommendation, Intervention, Protocol, Specialty,
};
