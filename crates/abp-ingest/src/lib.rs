//! Loading of the prophylaxis guideline dataset.
//!
//! - **Path resolution**: `--data` flag, `ABP_DATA_PATH`, then `data/rfe.json`
//! - **Structural decoding**: required fields, primitive types, nesting
//!
//! Semantic invariants are checked by `abp-validate`, never here.

pub mod error;
mod loader;
pub mod paths;

pub use error::{LoadError, Result};
pub use loader::{load_dataset, load_dataset_from_str};
pub use paths::{DATA_PATH_ENV_VAR, DEFAULT_DATA_PATH, resolve_data_path};
