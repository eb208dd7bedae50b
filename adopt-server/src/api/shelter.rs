//! Shelter API Handlers
//!
//! HTTP endpoints for shelter management.

use adopt_core::domain::{Pet, Shelter};
use adopt_core::dto::shelter::{NewShelter, ShelterFilter, ShelterPatch};
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
use crate::service::shelter_service::{self, ShelterError};

impl From<ShelterError> for ApiError {
    fn from(err: ShelterError) -> Self {
        match err {
            ShelterError::NotFound(id) => {
                tracing::debug!("Shelter {} not found", id);
                ApiError::NotFound(format!("{} not found", Shelter::NAME))
            }
            ShelterError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

/// GET /shelters
/// List shelters, optionally by city
#[utoipa::path(
    get,
    path = "/shelters",
    tag = "Shelters",
    params(ShelterFilter),
    responses(
        (status = 200, description = "List of shelters", body = Vec<Shelter>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_shelters(
    State(repos): State<Repositories>,
    query: Result<Query<ShelterFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Shelter>>> {
    let Query(filter) = query?;
    tracing::debug!("Listing shelters: {:?}", filter);

    let shelters = shelter_service::list_shelters(&repos, &filter).await;

    Ok(Json(shelters))
}

/// GET /shelters/{id}
/// Get shelter by ID
#[utoipa::path(
    get,
    path = "/shelters/{id}",
    tag = "Shelters",
    params(("id" = String, Path, description = "Shelter id")),
    responses(
        (status = 200, description = "Shelter details", body = Shelter),
        (status = 404, description = "Shelter not found", body = ErrorBody)
    )
)]
pub async fn get_shelter(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Shelter>> {
    let Path(id) = path?;
    tracing::debug!("Getting shelter: {}", id);

    let shelter = shelter_service::get_shelter(&repos, &id).await?;

    Ok(Json(shelter))
}

/// GET /shelters/{id}/pets
/// List the pets housed by a shelter
#[utoipa::path(
    get,
    path = "/shelters/{id}/pets",
    tag = "Shelters",
    params(("id" = String, Path, description = "Shelter id")),
    responses(
        (status = 200, description = "Pets in this shelter", body = Vec<Pet>),
        (status = 404, description = "Shelter not found", body = ErrorBody)
    )
)]
pub async fn list_shelter_pets(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Pet>>> {
    let Path(id) = path?;
    tracing::debug!("Listing pets for shelter: {}", id);

    let pets = shelter_service::list_pets_for_shelter(&repos, &id).await?;

    Ok(Json(pets))
}

/// POST /shelters
/// Create a new shelter
#[utoipa::path(
    post,
    path = "/shelters",
    tag = "Shelters",
    request_body = NewShelter,
    responses(
        (status = 201, description = "Shelter created", body = Shelter),
        (status = 400, description = "Invalid request body", body = ErrorBody)
    )
)]
pub async fn create_shelter(
    State(repos): State<Repositories>,
    payload: Result<Json<NewShelter>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Shelter>)> {
    let Json(req) = payload?;
    tracing::info!("Creating shelter: {}", req.name);

    let shelter = shelter_service::create_shelter(&repos, req).await?;

    Ok((StatusCode::CREATED, Json(shelter)))
}

/// PUT /shelters/{id}
/// Update the given fields of a shelter
#[utoipa::path(
    put,
    path = "/shelters/{id}",
    tag = "Shelters",
    params(("id" = String, Path, description = "Shelter id")),
    request_body = ShelterPatch,
    responses(
        (status = 200, description = "Shelter updated", body = Shelter),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Shelter not found", body = ErrorBody)
    )
)]
pub async fn update_shelter(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ShelterPatch>, JsonRejection>,
) -> ApiResult<Json<Shelter>> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    tracing::info!("Updating shelter: {}", id);

    let shelter = shelter_service::update_shelter(&repos, &id, patch).await?;

    Ok(Json(shelter))
}

/// DELETE /shelters/{id}
/// Delete a shelter
#[utoipa::path(
    delete,
    path = "/shelters/{id}",
    tag = "Shelters",
    params(("id" = String, Path, description = "Shelter id")),
    responses(
        (status = 204, description = "Shelter deleted"),
        (status = 404, description = "Shelter not found", body = ErrorBody)
    )
)]
pub async fn delete_shelter(
    State(repos): State<Repositories>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    tracing::info!("Deleting shelter: {}", id);

    shelter_service::delete_shelter(&repos, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
