//! User Service - user-record management over HTTP
//!
//! Creates, fetches, pages through and batch-fetches user records stored
//! through SeaORM (SQLite by default, PostgreSQL via `DATABASE_URL`).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The user record
//! - **services**: Orchestration (page to offset, empty-batch short-circuit)
//! - **infra**: Database bootstrap, migrations and the user store
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared request/response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserId};
pub use errors::{AppError, AppResult};
