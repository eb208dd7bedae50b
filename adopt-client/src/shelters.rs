//! Shelter endpoints

use crate::AdoptClient;
use crate::error::Result;
use adopt_core::domain::{Pet, Shelter};
use adopt_core::dto::shelter::{NewShelter, ShelterFilter, ShelterPatch};

impl AdoptClient {
    /// List shelters, optionally in one city
    pub async fn list_shelters(&self, filter: &ShelterFilter) -> Result<Vec<Shelter>> {
        let response = self
            .client
            .get(self.url(&["shelters"])?)
            .query(filter)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a shelter by ID
    pub async fn get_shelter(&self, id: &str) -> Result<Shelter> {
        let response = self
            .client
            .get(self.url(&["shelters", id])?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List the pets housed by a shelter
    pub async fn list_shelter_pets(&self, id: &str) -> Result<Vec<Pet>> {
        let response = self
            .client
            .get(self.url(&["shelters", id, "pets"])?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create a shelter
    pub async fn create_shelter(&self, req: &NewShelter) -> Result<Shelter> {
        let response = self
            .client
            .post(self.url(&["shelters"])?)
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Overwrite the fields set in `patch`
    pub async fn update_shelter(&self, id: &str, patch: &ShelterPatch) -> Result<Shelter> {
        let response = self
            .client
            .put(self.url(&["shelters", id])?)
            .json(patch)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a shelter
    pub async fn delete_shelter(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&["shelters", id])?)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
