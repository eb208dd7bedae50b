//! OpenAPI document endpoints
//!
//! The JSON document and the Swagger UI are served by `utoipa-swagger-ui`;
//! this module adds the YAML rendering.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::error::{ApiError, ApiResult};
use crate::openapi;

/// GET /api-spec.yaml
pub async fn openapi_yaml() -> ApiResult<Response> {
    let yaml = openapi::to_yaml()
        .map_err(|e| ApiError::InternalError(format!("Failed to render OpenAPI YAML: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response())
}
