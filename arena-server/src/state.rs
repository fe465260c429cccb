//! Shared handler state.

use std::sync::Arc;

use arena_core::{ArenaConfig, ArenaStore, error::Result};

/// State handed to every handler. Cloning shares the same store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single owner of all arena collections.
    pub store: Arc<ArenaStore>,
}

impl AppState {
    /// Build a fresh, empty store from `config.rules`.
    ///
    /// # Errors
    /// `Config` if the rule limits are unusable.
    pub fn new(config: &ArenaConfig) -> Result<Self> {
        Ok(Self::with_store(Arc::new(ArenaStore::new(&config.rules)?)))
    }

    /// Wrap an existing store, e.g. one with a scripted random source.
    pub fn with_store(store: Arc<ArenaStore>) -> Self {
        Self { store }
    }
}
