//! Database test fixtures
//!
//! Provides a per-test SQLite database in a temporary directory with the
//! schema migration applied, so tests are isolated from each other and
//! from any local development database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use taskboard::server::config::MIGRATOR;
use tempfile::TempDir;

/// Test database fixture
///
/// The temporary directory (and with it the database file) is removed
/// when the fixture is dropped.
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a fresh database with migrations applied
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("tasks.sqlite3");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .connect(&url)
            .await
            .expect("failed to open test database");

        MIGRATOR
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
