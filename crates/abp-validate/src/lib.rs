//! Consistency validation for the antibiotic-prophylaxis guideline dataset.
//!
//! Checks, evaluated for every intervention in document order:
//!
//! - **Unique ids**: intervention ids are unique across all specialties
//! - **Protocol consistency**: `pas_d_abp` is set exactly when no protocol is given
//! - **Specialty name**: the declared specialty equals the enclosing one
//! - **Recommendation strength**: value belongs to the configured closed set
//! - **Source page**: strictly positive
//!
//! plus specialty-level checks (unique specialty ids, no empty specialty) and
//! an optional version prefix check.
//!
//! # Example
//!
//! ```ignore
//! use abp_validate::{ValidationConfig, validate_dataset};
//!
//! let report = validate_dataset(&dataset, &ValidationConfig::default());
//! for violation in &report.violations {
//!     println!("{violation}");
//! }
//! std::process::exit(report.exit_code());
//! ```

mod checks;
pub mod config;
mod report;
mod violation;

use abp_model::Dataset;

pub use config::{
    CONFIG_ENV_VAR, ConfigError, DEFAULT_ALLOWED_STRENGTHS, DEFAULT_CONFIG_PATH, ValidationConfig,
    load_config, resolve_config_path,
};
pub use report::{DatasetStats, ValidationReport};
pub use violation::{Position, Severity, Violation, ViolationKind};

/// Check every invariant and return all violations in traversal order.
///
/// Never stops early. Pure: the same dataset and config always give the same
/// list.
pub fn check_dataset(dataset: &Dataset, config: &ValidationConfig) -> Vec<Violation> {
    checks::run_all(dataset, config)
}

/// Check the dataset and wrap the result with summary statistics.
pub fn validate_dataset(dataset: &Dataset, config: &ValidationConfig) -> ValidationReport {
    let violations = check_dataset(dataset, config);
    let report = ValidationReport {
        version: dataset.version.clone(),
        stats: DatasetStats::from_dataset(dataset),
        violations,
        deny_warnings: config.deny_warnings,
    };
    tracing::debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "dataset validation finished"
    );
    report
}
