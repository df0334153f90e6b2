//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier.
pub type UserId = i64;

/// User domain entity
///
/// `id` and both timestamps are assigned by the storage layer on creation.
/// Timestamps are microseconds since the Unix epoch and `created_at` never
/// exceeds `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: UserId,
    /// Display name (may be empty)
    #[schema(example = "Alice")]
    pub name: String,
    /// Creation timestamp in microseconds
    #[schema(example = 1700000000000000_i64)]
    pub created_at: i64,
    /// Last modification timestamp in microseconds
    #[schema(example = 1700000000000000_i64)]
    pub updated_at: i64,
}
