mod gender;
mod user;
mod user_status;
