#![allow(dead_code)]

//! Test infrastructure for gm-server API tests

use gm_config::RemoteConfig;
use gm_core::{Gender, User, UserStatus};
use gm_db::UserRepository;
use gm_remote::GoRestClient;
use gm_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

/// Create AppState over an in-memory store, pointing the remote client at
/// `remote_base_url`
pub async fn create_test_app_state(remote_base_url: &str) -> AppState {
    let pool = gm_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let remote = RemoteConfig {
        base_url: remote_base_url.to_string(),
        ..RemoteConfig::default()
    };

    AppState::new(
        Arc::new(UserRepository::new(pool)),
        Arc::new(GoRestClient::new(None)),
        &remote,
    )
}

/// AppState whose remote is unreachable; for tests that must not call it
pub async fn create_offline_app_state() -> AppState {
    create_test_app_state("http://127.0.0.1:9").await
}

pub fn test_user(id: i64) -> User {
    User {
        id,
        name: format!("Local {}", id),
        email: format!("local{}@example.test", id),
        gender: Gender::Female,
        status: UserStatus::Active,
    }
}

pub async fn seed_users(state: &AppState, ids: impl IntoIterator<Item = i64>) {
    let users: Vec<User> = ids.into_iter().map(test_user).collect();
    state
        .store
        .save_all(&users)
        .await
        .expect("Failed to seed users");
}

pub fn remote_user_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Remote {}", id),
        "email": format!("remote{}@example.test", id),
        "gender": "male",
        "status": "inactive"
    })
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Count rows through the store
pub async fn store_count(state: &AppState) -> i64 {
    state.store.count().await.unwrap()
}
