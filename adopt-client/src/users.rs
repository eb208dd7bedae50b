//! User endpoints

use crate::AdoptClient;
use crate::error::Result;
use adopt_core::domain::User;
use adopt_core::dto::user::{NewUser, UserFilter, UserPatch};

impl AdoptClient {
    /// List users, or look one up by exact email
    pub async fn list_users(&self, filter: &UserFilter) -> Result<Vec<User>> {
        let response = self
            .client
            .get(self.url(&["users"])?)
            .query(filter)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let response = self
            .client
            .get(self.url(&["users", id])?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create a user
    pub async fn create_user(&self, req: &NewUser) -> Result<User> {
        let response = self.client.post(self.url(&["users"])?).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Overwrite the fields set in `patch`
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User> {
        let response = self
            .client
            .put(self.url(&["users", id])?)
            .json(patch)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&["users", id])?)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
