//! Reference dataset path resolution.

use std::path::{Path, PathBuf};

use rail_model::{RailError, Result};

/// Environment variable for overriding the dataset location.
pub const DATA_ENV_VAR: &str = "RAIL_DATA";

/// Default locations probed relative to the working directory.
pub const DEFAULT_LOCATIONS: [&str; 2] = ["Rail.csv", "data/Rail.csv"];

/// Locate the reference dataset.
///
/// Resolution order:
/// 1. explicit path, when given
/// 2. `RAIL_DATA` environment variable
/// 3. first existing of [`DEFAULT_LOCATIONS`]
///
/// Fails with [`RailError::NotFound`] listing every location searched.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(RailError::NotFound {
            searched: vec![path.to_path_buf()],
        });
    }
    if let Ok(value) = std::env::var(DATA_ENV_VAR) {
        let path = PathBuf::from(value);
        if path.exists() {
            return Ok(path);
        }
        return Err(RailError::NotFound {
            searched: vec![path],
        });
    }
    let mut searched = Vec::new();
    for location in DEFAULT_LOCATIONS {
        let path = PathBuf::from(location);
        if path.exists() {
            return Ok(path);
        }
        searched.push(path);
    }
    Err(RailError::NotFound { searched })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_when_present() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("Rail.csv");
        std::fs::write(&path, "Curr\n").expect("write fixture");
        let resolved = resolve_dataset_path(Some(&path)).expect("resolve");
        assert_eq!(resolved, path);
    }

    #[test]
    fn missing_explicit_path_reports_what_was_searched() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nowhere.csv");
        let error = resolve_dataset_path(Some(&path)).expect_err("not found");
        match error {
            RailError::NotFound { searched } => assert_eq!(searched, vec![path]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
