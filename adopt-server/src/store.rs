//! In-memory data store
//!
//! Holds one ordered sequence per entity. Sequences live for the lifetime of
//! the process; nothing is persisted.

use adopt_core::domain::{Pet, Preferences, Shelter, User};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct Store {
    pub(crate) pets: RwLock<Vec<Pet>>,
    pub(crate) shelters: RwLock<Vec<Shelter>>,
    pub(crate) users: RwLock<Vec<User>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with sample shelters, pets and users
    pub fn seeded() -> Self {
        let store = Self {
            pets: RwLock::new(seed_pets()),
            shelters: RwLock::new(seed_shelters()),
            users: RwLock::new(seed_users()),
        };

        tracing::info!(
            "Seeded store with {} shelters, {} pets, {} users",
            SEED_SHELTERS,
            SEED_PETS,
            SEED_USERS
        );

        store
    }
}

// =============================================================================
// Seed Data
// =============================================================================

const SEED_SHELTERS: usize = 3;
const SEED_PETS: usize = 5;
const SEED_USERS: usize = 2;

fn seed_shelters() -> Vec<Shelter> {
    vec![
        shelter(
            "1",
            "Happy Paws Rescue",
            "123 Oak Street",
            "Austin",
            "TX",
            "512-555-0101",
            "hello@happypaws.org",
        ),
        shelter(
            "2",
            "Second Chance Animal Shelter",
            "456 Elm Avenue",
            "Portland",
            "OR",
            "503-555-0142",
            "info@secondchance.org",
        ),
        shelter(
            "3",
            "Lakeside Humane Society",
            "789 Shore Drive",
            "Austin",
            "TX",
            "512-555-0199",
            "adopt@lakesidehumane.org",
        ),
    ]
}

fn seed_pets() -> Vec<Pet> {
    vec![
        pet(
            "1",
            "Buddy",
            "Dog",
            "Golden Retriever",
            3.0,
            "Large",
            "Loves fetch and long walks",
            "available",
            "1",
        ),
        pet(
            "2",
            "Whiskers",
            "Cat",
            "Siamese",
            2.0,
            "Small",
            "Quiet and affectionate",
            "available",
            "1",
        ),
        pet(
            "3",
            "Max",
            "Dog",
            "German Shepherd",
            5.0,
            "Large",
            "Well trained and protective",
            "pending",
            "2",
        ),
        pet(
            "4",
            "Luna",
            "Cat",
            "Maine Coon",
            4.0,
            "Medium",
            "Fluffy and curious",
            "adopted",
            "3",
        ),
        pet(
            "5",
            "Pip",
            "Rabbit",
            "Holland Lop",
            1.0,
            "Small",
            "Gentle and easy going",
            "available",
            "2",
        ),
    ]
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "512-555-0150".to_string(),
            preferences: Preferences {
                species: vec!["Dog".to_string()],
                size: vec!["Medium".to_string(), "Large".to_string()],
            },
        },
        User {
            id: "2".to_string(),
            name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
            phone: "503-555-0177".to_string(),
            preferences: Preferences {
                species: vec!["Cat".to_string(), "Rabbit".to_string()],
                size: vec!["Small".to_string()],
            },
        },
    ]
}

fn shelter(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    phone: &str,
    email: &str,
) -> Shelter {
    Shelter {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn pet(
    id: &str,
    name: &str,
    species: &str,
    breed: &str,
    age: f64,
    size: &str,
    description: &str,
    status: &str,
    shelter_id: &str,
) -> Pet {
    Pet {
        id: id.to_string(),
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age,
        size: size.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        shelter_id: shelter_id.to_string(),
    }
}
