//! Core domain types
//!
//! These are the records held by the server's data store and returned by
//! every read endpoint. Each record carries a store-assigned `id`.

pub mod pet;
pub mod shelter;
pub mod user;

pub use pet::Pet;
pub use shelter::Shelter;
pub use user::{Preferences, User};
