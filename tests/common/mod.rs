//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use user_service::infra::{Database, UserRepository, UserStore};
use user_service::User;

/// A migrated SQLite database living in its own temp directory.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// the whole test.
pub struct TestDb {
    pub database: Arc<Database>,
    _dir: TempDir,
}

impl TestDb {
    pub fn store(&self) -> UserStore {
        UserStore::new(self.database.get_connection())
    }
}

pub fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("user.db").display())
}

pub async fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database = Database::connect(&sqlite_url(&dir))
        .await
        .expect("connect and migrate test database");

    TestDb {
        database: Arc::new(database),
        _dir: dir,
    }
}

/// Insert `names` in order, returning the created records oldest first.
pub async fn seed_users(repo: &dyn UserRepository, names: &[&str]) -> Vec<User> {
    let mut users = Vec::with_capacity(names.len());
    for name in names {
        users.push(repo.create(name.to_string()).await.expect("seed user"));
    }
    users
}

/// Expected newest-first order for records returned by `seed_users`.
pub fn newest_first(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    users
}
