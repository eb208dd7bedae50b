//! Pet DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request to create a new pet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    #[serde(serialize_with = "crate::domain::pet::age::serialize")]
    pub age: f64,
    pub size: String,
    pub description: String,
    pub status: String,
    pub shelter_id: String,
}

/// Partial update of a pet
///
/// Absent fields keep their stored value. An `id` key in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::domain::pet::age::serialize_option"
    )]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelter_id: Option<String>,
}

/// Query filter for listing pets
///
/// Every provided field must match (AND). Absent or empty fields match
/// anything. `species` and `status` compare case-insensitively, `shelterId`
/// compares exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetFilter {
    /// Species to match, e.g. `dog`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// Adoption status to match, e.g. `available`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Owning shelter id
    #[serde(
        rename = "shelterId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shelter_id: Option<String>,
}

impl PetFilter {
    pub fn species(species: impl Into<String>) -> Self {
        Self {
            species: Some(species.into()),
            ..Default::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    pub fn shelter(shelter_id: impl Into<String>) -> Self {
        Self {
            shelter_id: Some(shelter_id.into()),
            ..Default::default()
        }
    }

    /// True when no criterion is set, i.e. the filter matches every pet
    pub fn is_empty(&self) -> bool {
        [&self.species, &self.status, &self.shelter_id]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet_requires_every_field() {
        let result: Result<NewPet, _> = serde_json::from_value(serde_json::json!({
            "name": "Rex",
            "species": "Dog"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_pet_accepts_fractional_age() {
        let pet: NewPet = serde_json::from_value(serde_json::json!({
            "name": "Bean",
            "species": "Dog",
            "breed": "Beagle",
            "age": 0.5,
            "size": "Small",
            "description": "puppy",
            "status": "available",
            "shelterId": "1"
        }))
        .unwrap();
        assert_eq!(pet.age, 0.5);
    }

    #[test]
    fn test_patch_ignores_id_and_unknown_keys() {
        let patch: PetPatch = serde_json::from_value(serde_json::json!({
            "id": "other",
            "status": "adopted",
            "color": "brown"
        }))
        .unwrap();

        assert_eq!(patch.status.as_deref(), Some("adopted"));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_filter_reads_camel_case_shelter_id() {
        let filter: PetFilter =
            serde_json::from_value(serde_json::json!({ "shelterId": "s1" })).unwrap();
        assert_eq!(filter.shelter_id.as_deref(), Some("s1"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_with_blank_fields_is_empty() {
        let filter = PetFilter {
            species: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert!(PetFilter::default().is_empty());
    }
}
