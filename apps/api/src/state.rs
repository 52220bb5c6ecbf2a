use std::sync::Arc;

use crate::config::Config;
use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub config: Config,
}

impl<S: ContentStore> AppState<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

// Manual impl: `derive(Clone)` would require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
