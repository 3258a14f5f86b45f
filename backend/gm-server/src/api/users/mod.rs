pub mod user_payload;
pub mod users;
