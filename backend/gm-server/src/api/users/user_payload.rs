use gm_core::{Gender, NewUser, UserStatus};

use serde::Deserialize;

/// Request body for POST and PUT `/user/`
///
/// `id` is optional: when absent the store assigns one.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    #[serde(default)]
    pub status: UserStatus,
}

impl UserPayload {
    /// Split into the optional id and the remaining fields.
    pub fn into_parts(self) -> (Option<i64>, NewUser) {
        (
            self.id,
            NewUser {
                name: self.name,
                email: self.email,
                gender: self.gender,
                status: self.status,
            },
        )
    }
}
