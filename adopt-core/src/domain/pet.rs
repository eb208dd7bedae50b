//! Pet domain types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::pet::{NewPet, PetPatch};

/// A pet listed for adoption
///
/// `shelter_id` is a plain reference; nothing guarantees the shelter exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Age in years; fractions allowed for young animals
    #[serde(serialize_with = "age::serialize")]
    pub age: f64,
    pub size: String,
    pub description: String,
    pub status: String,
    pub shelter_id: String,
}

impl Pet {
    /// Build a stored pet from a creation payload and an assigned id
    pub fn from_new(id: String, new: NewPet) -> Self {
        Self {
            id,
            name: new.name,
            species: new.species,
            breed: new.breed,
            age: new.age,
            size: new.size,
            description: new.description,
            status: new.status,
            shelter_id: new.shelter_id,
        }
    }

    /// Overwrite only the fields present in `patch`
    pub fn apply(&mut self, patch: PetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(shelter_id) = patch.shelter_id {
            self.shelter_id = shelter_id;
        }
    }
}

/// Serialization of ages that keeps whole numbers whole (`3`, not `3.0`)
pub(crate) mod age {
    use serde::Serializer;

    /// Largest integer an f64 holds exactly
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(age: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if age.fract() == 0.0 && age.abs() <= MAX_EXACT {
            serializer.serialize_i64(*age as i64)
        } else {
            serializer.serialize_f64(*age)
        }
    }

    pub fn serialize_option<S: Serializer>(
        age: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match age {
            Some(age) => serialize(age, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> Pet {
        Pet::from_new(
            "p1".to_string(),
            NewPet {
                name: "Rex".to_string(),
                species: "Dog".to_string(),
                breed: "Lab".to_string(),
                age: 3.0,
                size: "L".to_string(),
                description: "friendly".to_string(),
                status: "available".to_string(),
                shelter_id: "s1".to_string(),
            },
        )
    }

    #[test]
    fn test_serializes_shelter_id_in_camel_case() {
        let value = serde_json::to_value(rex()).unwrap();
        assert_eq!(value["shelterId"], "s1");
        assert!(value.get("shelter_id").is_none());
    }

    #[test]
    fn test_whole_age_serializes_as_integer() {
        let value = serde_json::to_value(rex()).unwrap();
        assert_eq!(value["age"], serde_json::json!(3));
    }

    #[test]
    fn test_fractional_age_round_trips() {
        let pet = Pet {
            age: 0.5,
            ..rex()
        };
        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(value["age"], serde_json::json!(0.5));

        let back: Pet = serde_json::from_value(value).unwrap();
        assert_eq!(back, pet);
    }

    #[test]
    fn test_apply_overwrites_only_provided_fields() {
        let mut pet = rex();
        pet.apply(PetPatch {
            status: Some("adopted".to_string()),
            age: Some(4.5),
            ..Default::default()
        });

        assert_eq!(pet.status, "adopted");
        assert_eq!(pet.age, 4.5);
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.id, "p1");
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut pet = rex();
        pet.apply(PetPatch::default());
        assert_eq!(pet, rex());
    }
}
