pub mod error;
pub mod models;
pub mod source;
pub mod store;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::gender::Gender;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_status::UserStatus;
pub use source::{UserPage, UserSource};
pub use store::UserStore;
pub use sync::ingestor::Ingestor;
pub use validation::{is_not_a_number, parse_user_id};
