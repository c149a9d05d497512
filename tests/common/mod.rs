#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use link_registry::LinkRegistry;
use link_registry::domain::repositories::MappingRepository;
use link_registry::infrastructure::persistence::MemoryMappingRepository;
use link_registry::routes::router;
use link_registry::state::AppState;

pub const BASE_URL: &str = "http://sho.rt/";

pub fn create_registry() -> LinkRegistry<MemoryMappingRepository> {
    LinkRegistry::new(Arc::new(MemoryMappingRepository::new()), BASE_URL)
}

pub fn create_test_state() -> AppState {
    let repository: Arc<dyn MappingRepository> = Arc::new(MemoryMappingRepository::new());
    AppState::from_repository(repository, BASE_URL)
}

/// Full application router (redirect, health and `/api`) over fresh in-memory storage.
pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(router(state.clone())).unwrap();
    (server, state)
}
