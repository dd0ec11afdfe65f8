use std::sync::Arc;

use service::{EntityStore, Resource, ResourceService};

/// Shared by every handler. The store is the only cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<EntityStore>) -> Self { Self { store } }

    pub fn service<R: Resource>(&self) -> ResourceService<R> { ResourceService::new(self.store.clone()) }
}
