//! Service layer - Application business logic
//!
//! Services sit between the HTTP handlers and the repositories. They shape
//! caller input into storage calls and hand results back unchanged.

mod user_service;

pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
