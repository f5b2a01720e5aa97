//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::Store;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. The store handle is constructed at startup and
/// injected here; nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    store: Arc<Store>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
