//! Process-wide memoization of loaded datasets.
//!
//! One immutable table instance per source, constructed once and handed by
//! reference to every filter invocation. The only invalidation trigger is
//! process restart.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

use rail_model::{Dataset, RailError, Result};

use crate::loader::load_dataset;

static CACHE: OnceLock<Mutex<BTreeMap<PathBuf, Arc<Dataset>>>> = OnceLock::new();

/// Load the dataset at `path`, memoized by canonicalized path identity.
/// Repeated calls return the same shared instance without re-reading.
pub fn load_dataset_cached(path: &Path) -> Result<Arc<Dataset>> {
    // A missing source is NotFound; anything else (permissions, a file
    // where a directory was expected) keeps its I/O cause.
    let key = path.canonicalize().map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => RailError::NotFound {
            searched: vec![path.to_path_buf()],
        },
        _ => RailError::Io(error),
    })?;
    let cache = CACHE.get_or_init(|| Mutex::new(BTreeMap::new()));
    let mut cache = cache
        .lock()
        .map_err(|_| RailError::Message("dataset cache lock poisoned".to_string()))?;
    if let Some(dataset) = cache.get(&key) {
        debug!(path = %key.display(), "dataset cache hit");
        return Ok(Arc::clone(dataset));
    }
    let dataset = Arc::new(load_dataset(&key)?);
    cache.insert(key, Arc::clone(&dataset));
    Ok(dataset)
}
