//! Dataset path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the dataset location.
pub const DATA_PATH_ENV_VAR: &str = "ABP_DATA_PATH";

/// Dataset location used when nothing else is given, relative to the
/// working directory.
pub const DEFAULT_DATA_PATH: &str = "data/rfe.json";

/// Resolve the dataset path.
///
/// Resolution order:
/// 1. explicit path (the `--data` flag)
/// 2. `ABP_DATA_PATH` environment variable
/// 3. `data/rfe.json`
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(DATA_PATH_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_data_path(Some(Path::new("/tmp/other.json")));
        assert_eq!(path, PathBuf::from("/tmp/other.json"));
    }
}
