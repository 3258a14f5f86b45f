use crate::{
    AppState, create_user, delete_all_users, delete_user, get_user, health, list_users,
    reject_segment_as_id, update_user, upload_all_users, upload_user,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Local records
        .route("/user/", post(create_user).put(update_user))
        // Fixed segments shadow `/user/{id}` for every method
        .route("/user/all", get(list_users).delete(reject_segment_as_id))
        .route(
            "/user/deleteall",
            delete(delete_all_users).get(reject_segment_as_id),
        )
        .route("/user/{id}", get(get_user).delete(delete_user))
        // Ingestion from the remote API
        .route("/user/upload/{id}", post(upload_user))
        .route(
            "/user/uploadall",
            post(upload_all_users)
                .get(reject_segment_as_id)
                .delete(reject_segment_as_id),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
