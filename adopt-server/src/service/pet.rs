//! Pet Service
//!
//! Business logic for pet management.

use adopt_core::domain::Pet;
use adopt_core::dto::pet::{NewPet, PetFilter, PetPatch};

use super::{require_text, validate_name, validate_present};
use crate::repository::Repositories;

/// Service error type
#[derive(Debug)]
pub enum PetError {
    NotFound(String),
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, PetError>;

/// List pets, narrowed by `filter`
pub async fn list_pets(repos: &Repositories, filter: &PetFilter) -> Vec<Pet> {
    repos.pets.find_by_filter(filter).await
}

/// Get a pet by ID
pub async fn get_pet(repos: &Repositories, id: &str) -> Result<Pet> {
    repos
        .pets
        .find_by_id(id)
        .await
        .ok_or_else(|| PetError::NotFound(id.to_string()))
}

/// Create a new pet
pub async fn create_pet(repos: &Repositories, req: NewPet) -> Result<Pet> {
    validate_new_pet(&req)?;

    let pet = repos.pets.create(req).await;

    tracing::info!("Pet created: {} ({})", pet.name, pet.id);

    Ok(pet)
}

/// Apply a partial update to a pet
pub async fn update_pet(repos: &Repositories, id: &str, patch: PetPatch) -> Result<Pet> {
    validate_pet_patch(&patch)?;

    let pet = repos
        .pets
        .update(id, patch)
        .await
        .ok_or_else(|| PetError::NotFound(id.to_string()))?;

    tracing::info!("Pet updated: {}", id);

    Ok(pet)
}

/// Delete a pet
pub async fn delete_pet(repos: &Repositories, id: &str) -> Result<()> {
    if !repos.pets.delete(id).await {
        return Err(PetError::NotFound(id.to_string()));
    }

    tracing::info!("Pet deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_new_pet(req: &NewPet) -> Result<()> {
    validate_name(&req.name)
        .and_then(|_| require_text("species", &req.species))
        .and_then(|_| require_text("status", &req.status))
        .and_then(|_| validate_age(req.age))
        .map_err(PetError::ValidationError)
}

fn validate_pet_patch(patch: &PetPatch) -> Result<()> {
    validate_present(patch.name.as_ref(), validate_name)
        .and_then(|_| validate_present(patch.species.as_ref(), |v| require_text("species", v)))
        .and_then(|_| validate_present(patch.status.as_ref(), |v| require_text("status", v)))
        .and_then(|_| patch.age.map_or(Ok(()), validate_age))
        .map_err(PetError::ValidationError)
}

fn validate_age(age: f64) -> std::result::Result<(), String> {
    if !age.is_finite() || age < 0.0 {
        return Err(format!("age must be a non-negative number, got {}", age));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::sync::Arc;

    fn repos() -> Repositories {
        Repositories::new(Arc::new(Store::new()))
    }

    fn rex() -> NewPet {
        NewPet {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            breed: "Lab".to_string(),
            age: 3.0,
            size: "L".to_string(),
            description: "friendly".to_string(),
            status: "available".to_string(),
            shelter_id: "s1".to_string(),
        }
    }

    #[test]
    fn test_validate_empty_name() {
        let req = NewPet {
            name: "".to_string(),
            ..rex()
        };

        let result = validate_new_pet(&req);
        assert!(matches!(result, Err(PetError::ValidationError(_))));
    }

    #[test]
    fn test_validate_blank_species() {
        let req = NewPet {
            species: "  ".to_string(),
            ..rex()
        };

        assert!(matches!(
            validate_new_pet(&req),
            Err(PetError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_negative_age() {
        let req = NewPet { age: -1.0, ..rex() };
        assert!(matches!(
            validate_new_pet(&req),
            Err(PetError::ValidationError(_))
        ));

        let patch = PetPatch {
            age: Some(-0.5),
            ..Default::default()
        };
        assert!(matches!(
            validate_pet_patch(&patch),
            Err(PetError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_fractional_age_round_trips_through_store() {
        let repos = repos();
        let created = create_pet(&repos, NewPet { age: 0.5, ..rex() }).await.unwrap();

        let fetched = get_pet(&repos, &created.id).await.unwrap();
        assert_eq!(fetched.age, 0.5);
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(validate_new_pet(&rex()).is_ok());
        assert!(validate_pet_patch(&PetPatch::default()).is_ok());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_payload_plus_id() {
        let repos = repos();
        let created = create_pet(&repos, rex()).await.unwrap();
        let fetched = get_pet(&repos, &created.id).await.unwrap();

        assert_eq!(fetched, Pet::from_new(created.id.clone(), rex()));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_status() {
        let repos = repos();
        let created = create_pet(&repos, rex()).await.unwrap();

        let result = update_pet(
            &repos,
            &created.id,
            PetPatch {
                status: Some(String::new()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(PetError::ValidationError(_))));
        assert_eq!(get_pet(&repos, &created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_pet_is_not_found() {
        let repos = repos();
        assert!(matches!(
            get_pet(&repos, "nope").await,
            Err(PetError::NotFound(_))
        ));
        assert!(matches!(
            update_pet(&repos, "nope", PetPatch::default()).await,
            Err(PetError::NotFound(_))
        ));
        assert!(matches!(
            delete_pet(&repos, "nope").await,
            Err(PetError::NotFound(_))
        ));
    }
}
