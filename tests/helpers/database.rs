use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create an in-memory SQLite database for testing
///
/// Creates a fresh in-memory database with the test schema applied. The pool
/// is pinned to a single connection so every query sees the same in-memory
/// database instance.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to create test database");

    sqlx::query("CREATE TABLE countries (code TEXT PRIMARY KEY, name TEXT NOT NULL)")
        .execute(&pool)
        .await
        .expect("failed to create schema");

    pool
}

/// Insert the standard country fixtures in a fixed order.
pub async fn seed_countries(pool: &SqlitePool) {
    for (code, name) in [
        ("US", "United States"),
        ("FR", "France"),
        ("DE", "Germany"),
    ] {
        sqlx::query("INSERT INTO countries (code, name) VALUES (?, ?)")
            .bind(code)
            .bind(name)
            .execute(pool)
            .await
            .expect("failed to seed countries");
    }
}

/// Teardown test database
///
/// Closes the connection pool and cleans up resources.
pub async fn teardown_test_db(pool: SqlitePool) {
    pool.close().await;
}
