//! Infrastructure layer - External systems integration
//!
//! This module handles all persistence concerns:
//! - Database connection and migrations
//! - Repositories over the users table

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationState, Migrator, SchemaStatus};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
