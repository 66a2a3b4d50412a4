//! Shared setup for the API tests
//!
//! Every test drives the full router through `axum-test` over an
//! [`InMemoryStore`].

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use interface_api::{create_router, AppState};
use test_utils::{seed_sample_data, InMemoryStore};

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
}

/// A server over an empty store
pub fn empty_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let server = TestServer::new(create_router(AppState::shared(store.clone())))
        .expect("Failed to start test server");
    TestApp { server, store }
}

/// A server over the sample data from [`seed_sample_data`]
pub async fn seeded_app() -> TestApp {
    let app = empty_app();
    let store = app.store.as_ref();
    seed_sample_data(store, store, store)
        .await
        .expect("Failed to seed store");
    app
}

/// Asserts the uniform error body
pub fn assert_error(body: &Value, message: &str, status: u16) {
    assert_eq!(body["error"]["message"], message, "body: {body}");
    assert_eq!(body["error"]["status"], status, "body: {body}");
}
