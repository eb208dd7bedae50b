//! API Module
//!
//! HTTP API layer for the adoption service.
//! Each submodule handles endpoints for a specific entity.

pub mod docs;
pub mod error;
pub mod health;
pub mod pet;
pub mod shelter;
pub mod user;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::repository::Repositories;

/// Create the main API router with all endpoints
pub fn create_router(repos: Repositories) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pet endpoints
        .route("/pets", get(pet::list_pets).post(pet::create_pet))
        .route(
            "/pets/{id}",
            get(pet::get_pet).put(pet::update_pet).delete(pet::delete_pet),
        )
        // Shelter endpoints
        .route(
            "/shelters",
            get(shelter::list_shelters).post(shelter::create_shelter),
        )
        .route(
            "/shelters/{id}",
            get(shelter::get_shelter)
                .put(shelter::update_shelter)
                .delete(shelter::delete_shelter),
        )
        .route("/shelters/{id}/pets", get(shelter::list_shelter_pets))
        // User endpoints
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        // OpenAPI document and interactive docs
        .route("/api-spec.yaml", get(docs::openapi_yaml))
        .merge(SwaggerUi::new("/api-docs").url("/api-spec.json", ApiDoc::openapi()))
        // Add state and middleware
        .with_state(repos)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
