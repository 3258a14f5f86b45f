use crate::{CoreResult, User};

use std::collections::HashMap;

use async_trait::async_trait;

/// One page of users from the remote API together with its response headers.
#[derive(Debug, Clone, Default)]
pub struct UserPage {
    /// `None` when the remote answered without a body
    pub users: Option<Vec<User>>,
    /// Header names are lowercased
    pub headers: HashMap<String, String>,
}

impl UserPage {
    pub fn new(users: Option<Vec<User>>, headers: HashMap<String, String>) -> Self {
        Self {
            users,
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect(),
        }
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Remote source of user records.
///
/// Implemented by `gm_remote::GoRestClient`.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch a single user. `None` when the remote has no such user.
    async fn get_one(&self, url: &str) -> CoreResult<Option<User>>;

    /// Fetch a page of users along with the response headers.
    async fn get_page(&self, url: &str) -> CoreResult<UserPage>;
}
