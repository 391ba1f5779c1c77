use hypercare_storage::store::StateStore;

use crate::locks::KeyedLocks;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Nothing here caches documents: every handler reads the store under the
/// key's lock and writes back against the ETag it read.
#[derive(Clone)]
pub struct AppState {
    pub store: StateStore,
    /// Serializes read-modify-write cycles on Aski rows and Monev snapshots.
    pub locks: KeyedLocks,
}

impl AppState {
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            locks: KeyedLocks::default(),
        }
    }
}
