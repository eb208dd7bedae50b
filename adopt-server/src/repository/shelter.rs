//! Shelter Repository

use adopt_core::domain::Shelter;
use adopt_core::dto::shelter::{NewShelter, ShelterPatch};
use tokio::sync::RwLock;

use super::{Entity, Repository, eq_ignore_case};
use crate::store::Store;

impl Entity for Shelter {
    type New = NewShelter;
    type Patch = ShelterPatch;

    const NAME: &'static str = "Shelter";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewShelter) -> Self {
        Shelter::from_new(id, new)
    }

    fn apply(&mut self, patch: ShelterPatch) {
        Shelter::apply(self, patch)
    }

    fn collection(store: &Store) -> &RwLock<Vec<Self>> {
        &store.shelters
    }
}

impl Repository<Shelter> {
    /// Shelters in `city`, compared case-insensitively
    pub async fn find_by_city(&self, city: &str) -> Vec<Shelter> {
        self.find_where(|shelter| eq_ignore_case(&shelter.city, city))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_find_by_city_ignores_case() {
        let repo: Repository<Shelter> = Repository::new(Arc::new(Store::seeded()));

        let austin = repo.find_by_city("AUSTIN").await;
        let ids: Vec<&str> = austin.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert!(repo.find_by_city("Boston").await.is_empty());
    }
}
