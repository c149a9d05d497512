//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkRegistry;
use crate::domain::repositories::MappingRepository;

/// Registry type served over HTTP, independent of the storage backend.
pub type SharedRegistry = LinkRegistry<dyn MappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SharedRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<SharedRegistry>) -> Self {
        Self { registry }
    }

    /// Builds state around `repository` with the default key policy.
    pub fn from_repository(repository: Arc<dyn MappingRepository>, base_url: &str) -> Self {
        Self::new(Arc::new(LinkRegistry::new(repository, base_url)))
    }
}
