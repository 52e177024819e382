#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::MockServer;

use shortlink_dashboard::infrastructure::http::HttpLinkApi;
use shortlink_dashboard::infrastructure::storage::MemorySessionStore;
use shortlink_dashboard::state::AppState;

pub const TOKEN: &str = "test-token-0123456789";
pub const IDENTITY: &str = "alice";

pub fn link_json(id: &str) -> Value {
    json!({
        "id": id,
        "originalUrl": format!("https://example.com/{id}"),
        "shortUrl": format!("s-{id}"),
        "customName": "",
        "ownerId": "user-1",
        "expiryTimestamp": "2030-01-08T12:00:00Z",
        "createdTimestamp": "2030-01-01T12:00:00Z",
        "resolvedShortUrl": format!("https://sho.rt/s-{id}")
    })
}

pub fn creation_result_json() -> Value {
    json!({
        "message": "URL shortened successfully",
        "shortUrl": "https://sho.rt/s-new",
        "customName": "",
        "validityPeriod": "7days",
        "expiryDate": "2030-01-08T12:00:00Z"
    })
}

pub fn http_api(server: &MockServer) -> HttpLinkApi {
    let base = Url::parse(&server.uri()).unwrap();
    HttpLinkApi::new(base, Duration::from_secs(5)).unwrap()
}

pub fn signed_in_store() -> MemorySessionStore {
    MemorySessionStore::with_entries([
        ("token", TOKEN),
        ("user_name", IDENTITY),
        ("isAuthenticated", "true"),
    ])
}

pub fn create_test_state(server: &MockServer, store: MemorySessionStore) -> (AppState, Arc<MemorySessionStore>) {
    let store = Arc::new(store);
    let state = AppState::new(Arc::new(http_api(server)), store.clone());
    (state, store)
}
