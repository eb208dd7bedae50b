//! Adopt Server
//!
//! HTTP API over pets, shelters and users held in an in-memory store.
//!
//! Layers, outermost first:
//! - API: axum handlers, error mapping, OpenAPI document
//! - Services: validation and not-found handling
//! - Repositories: generic CRUD plus entity lookups
//! - Store: the in-memory sequences

pub mod api;
pub mod config;
pub mod openapi;
pub mod repository;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::Router;

pub use api::create_router;
pub use config::Config;
pub use repository::Repositories;
pub use store::Store;

/// Build the full application router over `store`
pub fn build_router(store: Arc<Store>) -> Router {
    create_router(Repositories::new(store))
}
