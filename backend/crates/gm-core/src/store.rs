use crate::{CoreResult, NewUser, User};

use async_trait::async_trait;

/// Persistence seam for user records.
///
/// Implemented by `gm_db::UserRepository`; handlers and the ingestion
/// procedure only ever see this trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>>;

    /// Insert or replace by `user.id`.
    async fn save(&self, user: &User) -> CoreResult<User>;

    /// Insert with a store-assigned id.
    async fn create(&self, user: &NewUser) -> CoreResult<User>;

    /// Upsert every record as one logical write. Returns how many were submitted.
    async fn save_all(&self, users: &[User]) -> CoreResult<usize>;

    async fn find_all(&self) -> CoreResult<Vec<User>>;

    async fn delete_by_id(&self, id: i64) -> CoreResult<()>;

    /// Returns the number of rows removed.
    async fn delete_all(&self) -> CoreResult<u64>;

    async fn count(&self) -> CoreResult<i64>;
}
