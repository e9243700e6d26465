//! Shared helpers for integration tests.

use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

use criminal_registry::db::{DbPool, MIGRATIONS, establish_connection_pool};

/// A migrated SQLite database living in a temporary directory that is
/// removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 temp path"))
            .expect("build connection pool");
        pool.get()
            .expect("get connection")
            .run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
