use crate::{Gender, UserStatus};

use serde::{Deserialize, Serialize};

/// User fields without an identifier; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    #[serde(default)]
    pub status: UserStatus,
}
