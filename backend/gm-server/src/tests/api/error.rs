use crate::ApiError;

use gm_core::CoreError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("User Not Found With ID: 9")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "User Not Found With ID: 9");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("abc is not a valid ID")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "abc is not a valid ID");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Database connection failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
}

#[test]
fn test_invalid_identifier_converts_to_bad_request() {
    let api_error: ApiError = CoreError::invalid_identifier("x is not a valid ID").into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_core_not_found_converts_to_not_found() {
    let api_error: ApiError = CoreError::not_found("User with ID: 1 not found").into();

    assert!(matches!(api_error, ApiError::NotFound { ref message, .. } if message == "User with ID: 1 not found"));
}

#[test]
fn test_upstream_and_store_convert_to_internal() {
    let upstream: ApiError = CoreError::upstream("Failed to Get first page of users").into();
    let store: ApiError = CoreError::store("disk full").into();

    assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_message_does_not_leak_location() {
    let api_error: ApiError = CoreError::not_found("User with ID: 5 not found").into();

    let (_, json) = body_json(api_error).await;

    assert_eq!(json["message"], "User with ID: 5 not found");
}

#[tokio::test]
async fn test_store_failure_keeps_its_own_message() {
    let api_error: ApiError = CoreError::store("database is locked").into();

    let (status, json) = body_json(api_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "database is locked");
}
