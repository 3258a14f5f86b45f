use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    gm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a row without going through the repository
pub async fn insert_raw_user(pool: &SqlitePool, id: i64, gender: &str, status: &str) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (id, name, email, gender, status) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(format!("Raw {}", id))
        .bind(format!("raw{}@example.test", id))
        .bind(gender)
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to insert raw user");
}
