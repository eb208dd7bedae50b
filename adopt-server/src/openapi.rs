//! OpenAPI document
//!
//! Built from the `#[utoipa::path]` annotations on the handlers. Served over
//! HTTP and optionally written to disk at startup.

use std::path::Path;

use adopt_core::domain::{Pet, Preferences, Shelter, User};
use adopt_core::dto::pet::{NewPet, PetPatch};
use adopt_core::dto::shelter::{NewShelter, ShelterPatch};
use adopt_core::dto::user::{NewUser, UserPatch};
use anyhow::Context;
use utoipa::OpenApi;

use crate::api::{error::ErrorBody, health, pet, shelter, user};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        pet::list_pets,
        pet::get_pet,
        pet::create_pet,
        pet::update_pet,
        pet::delete_pet,
        shelter::list_shelters,
        shelter::get_shelter,
        shelter::list_shelter_pets,
        shelter::create_shelter,
        shelter::update_shelter,
        shelter::delete_shelter,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    components(schemas(
        Pet,
        Shelter,
        User,
        Preferences,
        NewPet,
        PetPatch,
        NewShelter,
        ShelterPatch,
        NewUser,
        UserPatch,
        ErrorBody,
    )),
    tags(
        (name = "Pets", description = "Pets available for adoption"),
        (name = "Shelters", description = "Shelters housing the pets"),
        (name = "Users", description = "Prospective adopters"),
        (name = "Health", description = "Liveness check"),
    ),
    info(
        title = "Pet Adoption API",
        version = "0.1.0",
        description = "CRUD API for pets, shelters and users backed by an in-memory store"
    )
)]
pub struct ApiDoc;

pub const JSON_FILE: &str = "openapi.json";
pub const YAML_FILE: &str = "openapi.yaml";

/// Pretty-printed JSON rendering of the document
pub fn to_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}

/// YAML rendering of the document
pub fn to_yaml() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&ApiDoc::openapi())
}

/// Write `openapi.json` and `openapi.yaml` into `dir`
pub async fn write_spec_files(dir: &Path) -> anyhow::Result<()> {
    let json = to_json().context("Failed to render OpenAPI JSON")?;
    let yaml = to_yaml().context("Failed to render OpenAPI YAML")?;

    tokio::try_join!(
        tokio::fs::write(dir.join(JSON_FILE), json),
        tokio::fs::write(dir.join(YAML_FILE), yaml),
    )
    .with_context(|| format!("Failed to write OpenAPI files to {}", dir.display()))?;

    tracing::info!("OpenAPI specification files written to {}", dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc: serde_json::Value = serde_json::from_str(&to_json().unwrap()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/pets",
            "/pets/{id}",
            "/shelters",
            "/shelters/{id}",
            "/shelters/{id}/pets",
            "/users",
            "/users/{id}",
        ] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }

        assert!(doc["components"]["schemas"]["Pet"].is_object());
    }

    #[test]
    fn test_pet_schema_uses_camel_case() {
        let doc: serde_json::Value = serde_json::from_str(&to_json().unwrap()).unwrap();
        let properties = &doc["components"]["schemas"]["Pet"]["properties"];
        assert!(properties["shelterId"].is_object());
    }

    #[test]
    fn test_yaml_renders() {
        let yaml = to_yaml().unwrap();
        assert!(yaml.contains("Pet Adoption API"));
    }

    #[tokio::test]
    async fn test_write_spec_files() {
        let dir = tempfile::tempdir().unwrap();
        write_spec_files(dir.path()).await.unwrap();

        assert!(dir.path().join(JSON_FILE).exists());
        assert!(dir.path().join(YAML_FILE).exists());
    }

    #[tokio::test]
    async fn test_write_spec_files_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        assert!(write_spec_files(&missing).await.is_err());
    }
}
