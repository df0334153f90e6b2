//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::AppState;
use crate::domain::UserId;
use crate::errors::{AppError, AppResult};
use crate::types::{Created, PaginationParams, UserResponse, UsersResponse};

/// User creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name (required, may be empty)
    #[schema(example = "John Doe")]
    pub name: String,
}

/// Batch lookup request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchFetchUsersRequest {
    /// IDs to look up; unknown IDs are skipped
    #[schema(example = json!([1, 2]))]
    pub user_ids: Vec<u64>,
}

/// Store ids are non-negative `i64`; anything else cannot name a user.
fn to_user_id(raw: u64) -> AppResult<UserId> {
    UserId::try_from(raw).map_err(|_| AppError::bad_request("invalid id"))
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/batch", post(batch_fetch_users))
        .route("/:id", get(get_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or malformed name"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload.name).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(Created(UserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = id
        .parse::<u64>()
        .map_err(|_| AppError::bad_request("invalid id"))
        .and_then(to_user_id)?;

    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List users, newest first
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = UsersResponse),
        (status = 400, description = "Unparsable pagination parameters"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> AppResult<Json<UsersResponse>> {
    let users = state
        .user_service
        .get_all_users(params.page_num, params.page_size)
        .await?;

    Ok(Json(UsersResponse::from(users)))
}

/// Fetch several users by ID
#[utoipa::path(
    post,
    path = "/users/batch",
    tag = "Users",
    request_body = BatchFetchUsersRequest,
    responses(
        (status = 200, description = "Users that exist among the requested IDs", body = UsersResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn batch_fetch_users(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BatchFetchUsersRequest>,
) -> AppResult<Json<UsersResponse>> {
    let ids = payload
        .user_ids
        .into_iter()
        .map(to_user_id)
        .collect::<AppResult<Vec<_>>>()?;

    let users = state.user_service.get_users_by_ids(ids).await?;

    Ok(Json(UsersResponse::from(users)))
}
