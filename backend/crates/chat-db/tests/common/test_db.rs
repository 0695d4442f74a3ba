use chat_db::MIGRATOR;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Stores a profile row with fixed timestamps, bypassing the repository
pub async fn insert_profile(pool: &SqlitePool, user_id: i64, first_name: &str, at: i64) {
    sqlx::query(
        "INSERT INTO user_profiles (user_id, first_name, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(first_name)
    .bind(at)
    .bind(at)
    .execute(pool)
    .await
    .expect("Failed to insert profile");
}
