//! User repository - the only code that talks to the users table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::{user, UserActiveModel, UserEntity};
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method is one round trip to the store, except batch lookups large
/// enough to be split. Errors are returned as-is; nothing is retried.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns `id`, timestamps are stamped here
    async fn create(&self, name: String) -> AppResult<User>;

    /// Find user by ID, `AppError::NotFound` when no row matches
    async fn find_by_id(&self, id: UserId) -> AppResult<User>;

    /// Find every user whose ID is in `ids` (partial matches are not errors)
    ///
    /// Large inputs are split across several `IN` queries to stay under the
    /// store's bind-parameter limit.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    /// Newest-first page of users
    ///
    /// A negative `offset` is treated as zero and a `limit` of zero or less
    /// yields an empty page.
    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Bind parameters per `IN (...)` query; SQLite rejects more than 32766.
const MAX_IDS_PER_QUERY: usize = 1000;

/// Current time in microseconds since the Unix epoch
fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String) -> AppResult<User> {
        let now = now_micros();
        let active_model = UserActiveModel {
            id: NotSet,
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(user_id = model.id, "User created");

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let mut users = Vec::new();
        for chunk in ids.chunks(MAX_IDS_PER_QUERY) {
            let models = UserEntity::find()
                .filter(user::Column::Id.is_in(chunk.iter().copied()))
                .all(&self.db)
                .await
                .map_err(AppError::from)?;
            users.extend(models.into_iter().map(User::from));
        }

        tracing::debug!(requested = ids.len(), found = users.len(), "Batch user lookup");

        Ok(users)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let offset = offset.max(0) as u64;

        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
