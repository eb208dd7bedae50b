//! User Service
//!
//! Business logic for user management.

use adopt_core::domain::User;
use adopt_core::dto::user::{NewUser, UserFilter, UserPatch};

use super::{validate_email, validate_name, validate_present};
use crate::repository::Repositories;

/// Service error type
#[derive(Debug)]
pub enum UserError {
    NotFound(String),
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, UserError>;

/// List users; an email filter yields at most one user
pub async fn list_users(repos: &Repositories, filter: &UserFilter) -> Vec<User> {
    match filter.email.as_deref().filter(|email| !email.is_empty()) {
        Some(email) => repos.users.find_by_email(email).await.into_iter().collect(),
        None => repos.users.find_all().await,
    }
}

/// Get a user by ID
pub async fn get_user(repos: &Repositories, id: &str) -> Result<User> {
    repos
        .users
        .find_by_id(id)
        .await
        .ok_or_else(|| UserError::NotFound(id.to_string()))
}

/// Create a new user
pub async fn create_user(repos: &Repositories, req: NewUser) -> Result<User> {
    validate_new_user(&req)?;

    let user = repos.users.create(req).await;

    tracing::info!("User created: {} ({})", user.name, user.id);

    Ok(user)
}

/// Apply a partial update to a user
pub async fn update_user(repos: &Repositories, id: &str, patch: UserPatch) -> Result<User> {
    validate_user_patch(&patch)?;

    let user = repos
        .users
        .update(id, patch)
        .await
        .ok_or_else(|| UserError::NotFound(id.to_string()))?;

    tracing::info!("User updated: {}", id);

    Ok(user)
}

/// Delete a user
pub async fn delete_user(repos: &Repositories, id: &str) -> Result<()> {
    if !repos.users.delete(id).await {
        return Err(UserError::NotFound(id.to_string()));
    }

    tracing::info!("User deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_new_user(req: &NewUser) -> Result<()> {
    validate_name(&req.name)
        .and_then(|_| validate_email(&req.email))
        .map_err(UserError::ValidationError)
}

fn validate_user_patch(patch: &UserPatch) -> Result<()> {
    validate_present(patch.name.as_ref(), validate_name)
        .and_then(|_| validate_present(patch.email.as_ref(), validate_email))
        .map_err(UserError::ValidationError)
}
