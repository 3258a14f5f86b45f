use crate::{Gender, NewUser, UserStatus};

use serde::{Deserialize, Serialize};

/// A mirrored user record.
///
/// `id` is the primary key. Records ingested from the remote API keep the
/// remote-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub status: UserStatus,
}

impl User {
    /// Attach a store-assigned id to a draft.
    pub fn from_draft(id: i64, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            gender: draft.gender,
            status: draft.status,
        }
    }
}
