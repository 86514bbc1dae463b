use std::sync::Arc;

use bistro_storage::DynStorage;

use crate::InMemoryStorage;

/// Options for constructing the in-memory directory.
#[derive(Debug, Clone)]
pub struct StorageOptions {
    /// Start with the seed restaurants instead of an empty directory.
    pub seed: bool,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Builds a shareable storage handle from `options`.
pub fn create_storage(options: &StorageOptions) -> DynStorage {
    let storage = if options.seed {
        InMemoryStorage::seeded()
    } else {
        InMemoryStorage::new()
    };
    tracing::info!(seeded = options.seed, "in-memory restaurant storage created");
    Arc::new(storage)
}
