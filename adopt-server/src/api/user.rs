//! User API Handlers
//!
//! HTTP endpoints for user management.

use adopt_core::domain::User;
use adopt_core::dto::user::{NewUser, UserFilter, UserPatch};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::error::{ApiError, ApiResult, ErrorBody};
use crate::repository::{Entity, Repositories};
use crate::service::user_service::{self, UserError};

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => {
                tracing::debug!("User {} not found", id);
                ApiError::NotFound(format!("{} not found", User::NAME))
            }
            UserError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

/// GET /users
/// List users, or look one up by email
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(repos): State<Repositories>,
    query: Result<Query<UserFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Query(filter) = query?;
    tracing::debug!("Listing users");

    let users = user_service::list_users(&repos, &filter).await;

    Ok(Json(users))
}

/// GET /users/{id}
/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = path?;
    tracing::debug!("Getting user: {}", id);

    let user = user_service::get_user(&repos, &id).await?;

    Ok(Json(user))
}

/// POST /users
/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request body", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(repos): State<Repositories>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let Json(req) = payload?;
    tracing::info!("Creating user: {}", req.name);

    let user = user_service::create_user(&repos, req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id}
/// Update the given fields of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    tracing::info!("Updating user: {}", id);

    let user = user_service::update_user(&repos, &id, patch).await?;

    Ok(Json(user))
}

/// DELETE /users/{id}
/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    tracing::info!("Deleting user: {}", id);

    user_service::delete_user(&repos, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
