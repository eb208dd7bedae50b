//! Adopt Core
//!
//! Core types for the Adopt pet adoption API.
//!
//! This crate contains:
//! - Domain types: the stored records (Pet, Shelter, User)
//! - DTOs: request payloads and query filters shared by server and client

pub mod domain;
pub mod dto;
