use crate::{ClientResult, RemoteError};

use gm_core::{CoreResult, User, UserPage, UserSource};

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, StatusCode, header};

/// Raw response: status, headers and body text
struct Fetched {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: String,
}

/// HTTP client for the remote user API
pub struct GoRestClient {
    token: Option<String>,
    client: ReqwestClient,
}

impl GoRestClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `token` - Optional bearer token sent as `Authorization`
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// GET `url` and buffer the whole response
    async fn fetch(&self, url: &str) -> ClientResult<Fetched> {
        let mut req = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json");

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(Fetched {
            status,
            headers,
            body,
        })
    }

    /// Fetch a single user. 404 and empty bodies map to `None`.
    pub async fn get_user(&self, url: &str) -> ClientResult<Option<User>> {
        let fetched = self.fetch(url).await?;

        if fetched.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !fetched.status.is_success() {
            return Err(RemoteError::status(fetched.status.as_u16(), url));
        }
        if fetched.body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&fetched.body)?))
    }

    /// Fetch a page of users with its response headers.
    pub async fn get_users_page(&self, url: &str) -> ClientResult<UserPage> {
        let fetched = self.fetch(url).await?;

        if !fetched.status.is_success() {
            return Err(RemoteError::status(fetched.status.as_u16(), url));
        }

        let users = if fetched.body.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Vec<User>>(&fetched.body)?)
        };

        Ok(UserPage::new(users, fetched.headers))
    }
}

#[async_trait]
impl UserSource for GoRestClient {
    async fn get_one(&self, url: &str) -> CoreResult<Option<User>> {
        Ok(self.get_user(url).await?)
    }

    async fn get_page(&self, url: &str) -> CoreResult<UserPage> {
        Ok(self.get_users_page(url).await?)
    }
}
