//! Pet endpoints

use crate::AdoptClient;
use crate::error::Result;
use adopt_core::domain::Pet;
use adopt_core::dto::pet::{NewPet, PetFilter, PetPatch};

impl AdoptClient {
    /// List pets matching `filter` (an empty filter lists every pet)
    pub async fn list_pets(&self, filter: &PetFilter) -> Result<Vec<Pet>> {
        let response = self
            .client
            .get(self.url(&["pets"])?)
            .query(filter)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a pet by ID
    pub async fn get_pet(&self, id: &str) -> Result<Pet> {
        let response = self.client.get(self.url(&["pets", id])?).send().await?;

        self.handle_response(response).await
    }

    /// Create a pet; the server assigns its id
    pub async fn create_pet(&self, req: &NewPet) -> Result<Pet> {
        let response = self.client.post(self.url(&["pets"])?).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Overwrite the fields set in `patch`
    pub async fn update_pet(&self, id: &str, patch: &PetPatch) -> Result<Pet> {
        let response = self
            .client
            .put(self.url(&["pets", id])?)
            .json(patch)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a pet
    pub async fn delete_pet(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&["pets", id])?)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
