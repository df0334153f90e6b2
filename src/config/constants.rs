//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 6001;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file next to the binary)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://user.db?mode=rwc";
