//! Pet API Handlers
//!
//! HTTP endpoints for pet management.

use adopt_core::domain::Pet;
use adopt_core::dto::pet::{NewPet, PetFilter, PetPatch};
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
use crate::service::pet_service::{self, PetError};

impl From<PetError> for ApiError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::NotFound(id) => {
                tracing::debug!("Pet {} not found", id);
                ApiError::NotFound(format!("{} not found", Pet::NAME))
            }
            PetError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

/// GET /pets
/// List pets, optionally filtered by species, status and shelter
#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    params(PetFilter),
    responses(
        (status = 200, description = "Pets matching every given filter", body = Vec<Pet>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_pets(
    State(repos): State<Repositories>,
    query: Result<Query<PetFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Pet>>> {
    let Query(filter) = query?;
    tracing::debug!("Listing pets: {:?}", filter);

    let pets = pet_service::list_pets(&repos, &filter).await;

    Ok(Json(pets))
}

/// GET /pets/{id}
/// Get pet by ID
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet details", body = Pet),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn get_pet(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Pet>> {
    let Path(id) = path?;
    tracing::debug!("Getting pet: {}", id);

    let pet = pet_service::get_pet(&repos, &id).await?;

    Ok(Json(pet))
}

/// POST /pets
/// Create a new pet
#[utoipa::path(
    post,
    path = "/pets",
    tag = "Pets",
    request_body = NewPet,
    responses(
        (status = 201, description = "Pet created", body = Pet),
        (status = 400, description = "Invalid request body", body = ErrorBody)
    )
)]
pub async fn create_pet(
    State(repos): State<Repositories>,
    payload: Result<Json<NewPet>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Pet>)> {
    let Json(req) = payload?;
    tracing::info!("Creating pet: {}", req.name);

    let pet = pet_service::create_pet(&repos, req).await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

/// PUT /pets/{id}
/// Update the given fields of a pet
#[utoipa::path(
    put,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet id")),
    request_body = PetPatch,
    responses(
        (status = 200, description = "Pet updated", body = Pet),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn update_pet(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<PetPatch>, JsonRejection>,
) -> ApiResult<Json<Pet>> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    tracing::info!("Updating pet: {}", id);

    let pet = pet_service::update_pet(&repos, &id, patch).await?;

    Ok(Json(pet))
}

/// DELETE /pets/{id}
/// Delete a pet
#[utoipa::path(
    delete,
    path = "/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet id")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
pub async fn delete_pet(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    tracing::info!("Deleting pet: {}", id);

    pet_service::delete_pet(&repos, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
