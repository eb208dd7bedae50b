//! Shelter domain types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::shelter::{NewShelter, ShelterPatch};

/// An animal shelter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: String,
}

impl Shelter {
    pub fn from_new(id: String, new: NewShelter) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            city: new.city,
            state: new.state,
            phone: new.phone,
            email: new.email,
        }
    }

    pub fn apply(&mut self, patch: ShelterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
