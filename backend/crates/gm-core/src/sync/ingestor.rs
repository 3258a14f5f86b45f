//! Remote-to-local ingestion of user records.
//!
//! `ingest_one` mirrors a single remote user. `ingest_all` walks every page
//! of the remote collection, discovering the page count from the first
//! response, and persists the aggregate in one `save_all` call. Pages are
//! fetched strictly in order; a failed page aborts the whole run and nothing
//! is written.

use crate::{CoreError, CoreResult, User, UserSource, UserStore, parse_user_id};

use std::sync::Arc;

use log::{debug, info};

pub struct Ingestor {
    store: Arc<dyn UserStore>,
    source: Arc<dyn UserSource>,
    base_url: String,
    pagination_header: String,
}

impl Ingestor {
    /// # Arguments
    /// * `base_url` - Remote API root (e.g., "https://gorest.co.in/public/v2")
    /// * `pagination_header` - Header carrying the total page count
    pub fn new(
        store: Arc<dyn UserStore>,
        source: Arc<dyn UserSource>,
        base_url: &str,
        pagination_header: &str,
    ) -> Self {
        Self {
            store,
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
            pagination_header: pagination_header.to_string(),
        }
    }

    pub fn user_url(&self, id: i64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    pub fn page_url(&self, page: u32) -> String {
        if page <= 1 {
            format!("{}/users", self.base_url)
        } else {
            format!("{}/users?page={}", self.base_url, page)
        }
    }

    /// Fetch one remote user and upsert it locally.
    ///
    /// The remote id is authoritative: an existing local record with the same
    /// id is overwritten without being read first.
    pub async fn ingest_one(&self, id: &str) -> CoreResult<User> {
        let user_id = parse_user_id(id)?;

        let url = self.user_url(user_id);
        debug!("Fetching remote user from {}", url);

        let found = self
            .source
            .get_one(&url)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("User with ID: {} not found", user_id)))?;

        let saved = self.store.save(&found).await?;
        info!("Mirrored remote user {}", saved.id);

        Ok(saved)
    }

    /// Fetch every remote page and persist the aggregate.
    ///
    /// Returns the number of records handed to the store.
    pub async fn ingest_all(&self) -> CoreResult<usize> {
        let first = self
            .source
            .get_page(&self.page_url(1))
            .await
            .map_err(|e| {
                CoreError::upstream(format!(
                    "Failed to Get first page of users: {}",
                    e.message()
                ))
            })?;

        let pages_header = first.header(&self.pagination_header).map(String::from);
        let Some(mut all_users) = first.users else {
            return Err(CoreError::upstream("Failed to Get first page of users"));
        };
        let total_pages = self.total_pages(pages_header.as_deref())?;

        debug!(
            "First page returned {} users, {} pages in total",
            all_users.len(),
            total_pages
        );

        for page in 2..=total_pages {
            let page_users = self
                .source
                .get_page(&self.page_url(page))
                .await
                .map_err(|e| {
                    CoreError::upstream(format!(
                        "Failed to Get page {} of users: {}",
                        page,
                        e.message()
                    ))
                })?
                .users
                .ok_or_else(|| {
                    CoreError::upstream(format!("Failed to Get page {} of users", page))
                })?;

            debug!("Page {} returned {} users", page, page_users.len());
            all_users.extend(page_users);
        }

        let submitted = self.store.save_all(&all_users).await?;
        info!(
            "Mirrored {} remote users across {} pages",
            submitted, total_pages
        );

        Ok(submitted)
    }

    #[track_caller]
    fn total_pages(&self, header: Option<&str>) -> CoreResult<u32> {
        let value = header.ok_or_else(|| {
            CoreError::upstream(format!(
                "Remote response is missing the {} header",
                self.pagination_header
            ))
        })?;

        value.trim().parse::<u32>().map_err(|_| {
            CoreError::upstream(format!(
                "{} header is not a number: {}",
                self.pagination_header, value
            ))
        })
    }
}
