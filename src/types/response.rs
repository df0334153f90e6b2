//! Response envelopes shared by the user endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// Single-user response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub result: bool,
    pub user: User,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { result: true, user }
    }
}

/// Multi-user response body (list and batch)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub result: bool,
    pub users: Vec<User>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            result: true,
            users,
        }
    }
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
