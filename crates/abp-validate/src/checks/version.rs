//! Dataset version prefix (only when a prefix is configured).

use abp_model::Dataset;

use crate::config::ValidationConfig;
use crate::violation::Violation;

pub(crate) fn check(dataset: &Dataset, config: &ValidationConfig) -> Option<Violation> {
    let prefix = config.version_prefix.as_deref()?;
    if dataset.version.starts_with(prefix) {
        return None;
    }
    Some(Violation::VersionPrefixMismatch {
        version: dataset.version.clone(),
        expected_prefix: prefix.to_string(),
    })
}
