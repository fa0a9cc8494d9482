//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod export;
pub mod import;
pub mod process;
pub mod records;

use radon_core::{RadonConfig, RecordStore};

/// Store handle resolved from configuration.
pub(crate) fn store_handle(config: &RadonConfig) -> RecordStore {
    RecordStore::new(config.store.path.clone())
}
