//! CLI library components for the prophylaxis catalog validator.

pub mod logging;
pub mod report;
