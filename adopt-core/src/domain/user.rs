//! User domain types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::{NewUser, UserPatch};

/// A prospective adopter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferences: Preferences,
}

/// What kind of pet a user is looking for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Preferences {
    pub species: Vec<String>,
    pub size: Vec<String>,
}

impl User {
    pub fn from_new(id: String, new: NewUser) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            preferences: new.preferences,
        }
    }

    /// Shallow merge: a provided `preferences` replaces the whole object
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(preferences) = patch.preferences {
            self.preferences = preferences;
        }
    }
}
