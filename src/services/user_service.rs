//! User service - Handles user-related business logic.
//!
//! Derives storage parameters from caller input (page to offset, empty
//! batch short-circuit) and otherwise passes repository results and errors
//! through untouched.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserId};
use crate::errors::AppResult;
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with the given name (empty names are accepted)
    async fn create_user(&self, name: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List users newest-first; `page` is 1-based
    ///
    /// Pages are computed from offset and limit, so records inserted between
    /// two calls can shift page boundaries.
    async fn get_all_users(&self, page: i64, size: i64) -> AppResult<Vec<User>>;

    /// Fetch the users whose IDs are in `ids`
    ///
    /// The result may hold fewer users than requested IDs; callers must not
    /// assume the lengths match.
    async fn get_users_by_ids(&self, ids: Vec<UserId>) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Offset of the first record on a 1-based `page` of `size` records.
///
/// Not clamped: `page <= 0` produces a negative offset which the storage
/// layer treats as zero.
fn page_offset(page: i64, size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(size)
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String) -> AppResult<User> {
        self.repo.create(name).await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await
    }

    async fn get_all_users(&self, page: i64, size: i64) -> AppResult<Vec<User>> {
        let offset = page_offset(page, size);
        tracing::debug!(page, size, offset, "Listing users");

        self.repo.find_page(offset, size).await
    }

    async fn get_users_by_ids(&self, ids: Vec<UserId>) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.repo.find_by_ids(&ids).await
    }
}
