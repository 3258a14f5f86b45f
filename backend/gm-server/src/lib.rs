pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    users::{
        user_payload::UserPayload,
        users::{
            create_user, delete_all_users, delete_user, get_user, list_users,
            reject_segment_as_id, update_user, upload_all_users, upload_user,
        },
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
