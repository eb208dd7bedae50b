//! User Repository

use adopt_core::domain::User;
use adopt_core::dto::user::{NewUser, UserPatch};
use tokio::sync::RwLock;

use super::{Entity, Repository};
use crate::store::Store;

impl Entity for User {
    type New = NewUser;
    type Patch = UserPatch;

    const NAME: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewUser) -> Self {
        User::from_new(id, new)
    }

    fn apply(&mut self, patch: UserPatch) {
        User::apply(self, patch)
    }

    fn collection(store: &Store) -> &RwLock<Vec<Self>> {
        &store.users
    }
}

impl Repository<User> {
    /// First user whose email matches exactly (case-sensitive)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.find_where(|user| user.email == email)
            .await
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let repo: Repository<User> = Repository::new(Arc::new(Store::seeded()));

        let user = repo.find_by_email("sam@example.com").await.unwrap();
        assert_eq!(user.id, "2");

        assert!(repo.find_by_email("SAM@example.com").await.is_none());
        assert!(repo.find_by_email("nobody@example.com").await.is_none());
    }
}
