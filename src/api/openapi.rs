//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;
use crate::types::{UserResponse, UsersResponse};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "Create, fetch, page through and batch-fetch user records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:6001", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::list_users,
        user_handler::batch_fetch_users,
    ),
    components(
        schemas(
            User,
            UserResponse,
            UsersResponse,
            user_handler::CreateUserRequest,
            user_handler::BatchFetchUsersRequest,
        )
    ),
    tags(
        (name = "Users", description = "User record operations")
    )
)]
pub struct ApiDoc;
