//! Shelter Service
//!
//! Business logic for shelter management.

use adopt_core::domain::{Pet, Shelter};
use adopt_core::dto::shelter::{NewShelter, ShelterFilter, ShelterPatch};

use super::{require_text, validate_email, validate_name, validate_present};
use crate::repository::Repositories;

/// Service error type
#[derive(Debug)]
pub enum ShelterError {
    NotFound(String),
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ShelterError>;

/// List shelters, optionally restricted to one city
pub async fn list_shelters(repos: &Repositories, filter: &ShelterFilter) -> Vec<Shelter> {
    match filter.city.as_deref().filter(|city| !city.is_empty()) {
        Some(city) => repos.shelters.find_by_city(city).await,
        None => repos.shelters.find_all().await,
    }
}

/// Get a shelter by ID
pub async fn get_shelter(repos: &Repositories, id: &str) -> Result<Shelter> {
    repos
        .shelters
        .find_by_id(id)
        .await
        .ok_or_else(|| ShelterError::NotFound(id.to_string()))
}

/// Pets housed by an existing shelter
pub async fn list_pets_for_shelter(repos: &Repositories, id: &str) -> Result<Vec<Pet>> {
    let shelter = get_shelter(repos, id).await?;

    Ok(repos.pets.find_by_shelter(&shelter.id).await)
}

/// Create a new shelter
pub async fn create_shelter(repos: &Repositories, req: NewShelter) -> Result<Shelter> {
    validate_new_shelter(&req)?;

    let shelter = repos.shelters.create(req).await;

    tracing::info!("Shelter created: {} ({})", shelter.name, shelter.id);

    Ok(shelter)
}

/// Apply a partial update to a shelter
pub async fn update_shelter(
    repos: &Repositories,
    id: &str,
    patch: ShelterPatch,
) -> Result<Shelter> {
    validate_shelter_patch(&patch)?;

    let shelter = repos
        .shelters
        .update(id, patch)
        .await
        .ok_or_else(|| ShelterError::NotFound(id.to_string()))?;

    tracing::info!("Shelter updated: {}", id);

    Ok(shelter)
}

/// Delete a shelter
///
/// Pets pointing at the shelter are left as they are.
pub async fn delete_shelter(repos: &Repositories, id: &str) -> Result<()> {
    if !repos.shelters.delete(id).await {
        return Err(ShelterError::NotFound(id.to_string()));
    }

    tracing::info!("Shelter deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_new_shelter(req: &NewShelter) -> Result<()> {
    validate_name(&req.name)
        .and_then(|_| require_text("city", &req.city))
        .and_then(|_| validate_email(&req.email))
        .map_err(ShelterError::ValidationError)
}

fn validate_shelter_patch(patch: &ShelterPatch) -> Result<()> {
    validate_present(patch.name.as_ref(), validate_name)
        .and_then(|_| validate_present(patch.city.as_ref(), |v| require_text("city", v)))
        .and_then(|_| validate_present(patch.email.as_ref(), validate_email))
        .map_err(ShelterError::ValidationError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::sync::Arc;

    fn seeded() -> Repositories {
        Repositories::new(Arc::new(Store::seeded()))
    }

    #[tokio::test]
    async fn test_list_without_city_returns_all() {
        let repos = seeded();
        let all = list_shelters(&repos, &ShelterFilter::default()).await;
        assert_eq!(all.len(), 3);

        let blank = ShelterFilter {
            city: Some(String::new()),
        };
        assert_eq!(list_shelters(&repos, &blank).await, all);
    }

    #[tokio::test]
    async fn test_list_by_city() {
        let repos = seeded();
        let filter = ShelterFilter {
            city: Some("portland".to_string()),
        };

        let shelters = list_shelters(&repos, &filter).await;
        assert_eq!(shelters.len(), 1);
        assert_eq!(shelters[0].city, "Portland");
    }

    #[tokio::test]
    async fn test_pets_for_missing_shelter_is_not_found() {
        let repos = seeded();
        assert!(matches!(
            list_pets_for_shelter(&repos, "missing").await,
            Err(ShelterError::NotFound(_))
        ));
        assert_eq!(list_pets_for_shelter(&repos, "1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_keeps_orphaned_pets() {
        let repos = seeded();
        delete_shelter(&repos, "1").await.unwrap();

        assert!(get_shelter(&repos, "1").await.is_err());
        assert_eq!(repos.pets.find_by_shelter("1").await.len(), 2);
    }

    #[test]
    fn test_validate_bad_email() {
        let req = NewShelter {
            name: "Paws".to_string(),
            address: "1 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            phone: "555-0100".to_string(),
            email: "paws.example.org".to_string(),
        };

        assert!(matches!(
            validate_new_shelter(&req),
            Err(ShelterError::ValidationError(_))
        ));
    }
}
