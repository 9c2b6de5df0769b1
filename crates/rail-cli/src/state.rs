//! Selection persistence between invocations.
//!
//! The state file holds exactly the shareable reference string; a stale or
//! corrupt file is harmless because restore is lenient by contract.

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable for overriding the state file location.
pub const STATE_ENV_VAR: &str = "RAIL_STATE";

/// Default state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = ".rail-selection";

/// Resolve the state file path: explicit flag, then `RAIL_STATE`, then the
/// default name.
pub fn resolve_state_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(value) = std::env::var(STATE_ENV_VAR) {
        return PathBuf::from(value);
    }
    PathBuf::from(DEFAULT_STATE_FILE)
}

/// Read the persisted share ref, if any. A missing file means defaults.
pub fn read_state(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

/// Persist the share ref for the next invocation.
pub fn write_state(path: &Path, reference: &str) -> io::Result<()> {
    std::fs::write(path, format!("{reference}\n"))
}

/// Drop the persisted selection. Missing file is fine.
pub fn clear_state(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}
