mod error;
mod user_payload;
