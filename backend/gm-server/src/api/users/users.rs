//! User REST API handlers
//!
//! Local CRUD over the record store plus the two ingestion endpoints that
//! mirror records from the remote API.

use crate::{ApiError, ApiResult, AppState, JsonBody, UserPayload};

use gm_core::{CoreResult, User, UserStore, parse_user_id};

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, Uri},
};
use log::info;

// =============================================================================
// Local records
// =============================================================================

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user_id = parse_user_id(&id)?;

    let user = find_existing(state.store.as_ref(), user_id).await?;

    Ok(Json(user))
}

/// GET /user/all
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.store.find_all().await?;

    Ok(Json(users))
}

/// DELETE /user/{id}
///
/// Responds with the record as it was before deletion.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user_id = parse_user_id(&id)?;

    let user = find_existing(state.store.as_ref(), user_id).await?;
    state.store.delete_by_id(user_id).await?;

    info!("Deleted user {}", user_id);

    Ok(Json(user))
}

/// DELETE /user/deleteall
///
/// The reported count is taken right before the delete.
pub async fn delete_all_users(State(state): State<AppState>) -> ApiResult<String> {
    let count = state.store.count().await?;
    state.store.delete_all().await?;

    info!("Deleted all users ({})", count);

    Ok(format!("Users Delete: {}", count))
}

/// POST /user/
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = persist(state.store.as_ref(), payload).await?;

    info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /user/
///
/// Full replacement; a record that does not exist yet is inserted.
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> ApiResult<Json<User>> {
    let user = persist(state.store.as_ref(), payload).await?;

    info!("Updated user {}", user.id);

    Ok(Json(user))
}

// =============================================================================
// Ingestion
// =============================================================================

/// POST /user/upload/{id}
///
/// Mirrors one remote user. An existing local record with the same id is
/// overwritten.
pub async fn upload_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.ingestor.ingest_one(&id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /user/uploadall
pub async fn upload_all_users(State(state): State<AppState>) -> ApiResult<String> {
    let saved = state.ingestor.ingest_all().await?;

    Ok(format!("Users Created: {}", saved))
}

/// GET/DELETE on `/user/all`, `/user/deleteall` or `/user/uploadall`
///
/// Those paths only exist for one method; with any other the last segment is
/// an id, and never a numeric one.
pub async fn reject_segment_as_id(uri: Uri) -> ApiError {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();

    ApiError::bad_request(format!("{} is not a valid ID", segment))
}

// =============================================================================
// Helpers
// =============================================================================

async fn find_existing(store: &dyn UserStore, user_id: i64) -> ApiResult<User> {
    store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User Not Found With ID: {}", user_id)))
}

async fn persist(store: &dyn UserStore, payload: UserPayload) -> CoreResult<User> {
    match payload.into_parts() {
        (Some(id), draft) => store.save(&User::from_draft(id, draft)).await,
        (None, draft) => store.create(&draft).await,
    }
}
