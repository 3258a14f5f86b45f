use crate::{DbError, Result};

use gm_core::{CoreResult, Gender, NewUser, User, UserStatus, UserStore};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const UPSERT_USER: &str = r#"
    INSERT INTO users (id, name, email, gender, status)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        email = excluded.email,
        gender = excluded.gender,
        status = excluded.status
"#;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    gender: String,
    status: String,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> Result<Self> {
        let corrupt = |e: gm_core::CoreError| DbError::CorruptRow {
            table: "users",
            message: format!("user {}: {}", r.id, e.message()),
            location: ErrorLocation::from(Location::caller()),
        };

        Ok(User {
            id: r.id,
            gender: Gender::from_str(&r.gender).map_err(corrupt)?,
            status: UserStatus::from_str(&r.status).map_err(corrupt)?,
            name: r.name,
            email: r.email,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, email, gender, status
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, email, gender, status
              FROM users
              ORDER BY id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    /// Insert or replace by id.
    pub async fn save(&self, user: &User) -> Result<User> {
        sqlx::query(UPSERT_USER)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.gender.as_str())
            .bind(user.status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(user.clone())
    }

    /// Insert with an id picked by SQLite.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let result = sqlx::query(
            r#"
              INSERT INTO users (name, email, gender, status)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.gender.as_str())
        .bind(user.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(User::from_draft(result.last_insert_rowid(), user.clone()))
    }

    /// Upsert every record inside one transaction.
    pub async fn save_all(&self, users: &[User]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        for user in users {
            sqlx::query(UPSERT_USER)
                .bind(user.id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.gender.as_str())
                .bind(user.status.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(users.len())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>> {
        Ok(UserRepository::find_by_id(self, id).await?)
    }

    async fn save(&self, user: &User) -> CoreResult<User> {
        Ok(UserRepository::save(self, user).await?)
    }

    async fn create(&self, user: &NewUser) -> CoreResult<User> {
        Ok(UserRepository::create(self, user).await?)
    }

    async fn save_all(&self, users: &[User]) -> CoreResult<usize> {
        Ok(UserRepository::save_all(self, users).await?)
    }

    async fn find_all(&self) -> CoreResult<Vec<User>> {
        Ok(UserRepository::find_all(self).await?)
    }

    async fn delete_by_id(&self, id: i64) -> CoreResult<()> {
        Ok(UserRepository::delete_by_id(self, id).await?)
    }

    async fn delete_all(&self) -> CoreResult<u64> {
        Ok(UserRepository::delete_all(self).await?)
    }

    async fn count(&self) -> CoreResult<i64> {
        Ok(UserRepository::count(self).await?)
    }
}
