//! Pet Repository
//!
//! Pet-specific lookups over the generic repository.

use adopt_core::domain::Pet;
use adopt_core::dto::pet::{NewPet, PetFilter, PetPatch};
use tokio::sync::RwLock;

use super::{Entity, Repository, eq_ignore_case};
use crate::store::Store;

impl Entity for Pet {
    type New = NewPet;
    type Patch = PetPatch;

    const NAME: &'static str = "Pet";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewPet) -> Self {
        Pet::from_new(id, new)
    }

    fn apply(&mut self, patch: PetPatch) {
        Pet::apply(self, patch)
    }

    fn collection(store: &Store) -> &RwLock<Vec<Self>> {
        &store.pets
    }
}

impl Repository<Pet> {
    /// Pets matching every criterion set in `filter`
    pub async fn find_by_filter(&self, filter: &PetFilter) -> Vec<Pet> {
        if filter.is_empty() {
            return self.find_all().await;
        }

        self.find_where(|pet| matches_filter(pet, filter)).await
    }

    pub async fn find_by_shelter(&self, shelter_id: &str) -> Vec<Pet> {
        self.find_by_filter(&PetFilter::shelter(shelter_id)).await
    }

    pub async fn find_by_status(&self, status: &str) -> Vec<Pet> {
        self.find_by_filter(&PetFilter::status(status)).await
    }

    pub async fn find_by_species(&self, species: &str) -> Vec<Pet> {
        self.find_by_filter(&PetFilter::species(species)).await
    }
}

fn matches_filter(pet: &Pet, filter: &PetFilter) -> bool {
    wanted(&filter.species).is_none_or(|species| eq_ignore_case(&pet.species, species))
        && wanted(&filter.status).is_none_or(|status| eq_ignore_case(&pet.status, status))
        && wanted(&filter.shelter_id).is_none_or(|shelter_id| pet.shelter_id == shelter_id)
}

/// A set, non-blank filter value
fn wanted(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
