//! Data Transfer Objects
//!
//! Request payloads and query filters exchanged between the API server and
//! its clients. Creation payloads carry every field except `id`; patches carry
//! only the fields to overwrite; filters carry optional match criteria.

pub mod pet;
pub mod shelter;
pub mod user;
