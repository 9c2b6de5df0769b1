pub mod cache;
pub mod discovery;
pub mod loader;

pub use cache::load_dataset_cached;
pub use discovery::{DATA_ENV_VAR, DEFAULT_LOCATIONS, resolve_dataset_path};
pub use loader::load_dataset;
