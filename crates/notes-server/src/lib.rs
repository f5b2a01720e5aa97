//! notes-server: HTTP API for the notes service
//!
//! This crate provides:
//! - REST endpoints for note CRUD, organized by category
//! - Request body validation for mutating operations
//! - Uniform JSON error translation (`{ "message": ... }` bodies)
//!
//! # Architecture
//!
//! The server is built on Axum with a tower-http layer stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Panic recovery (forced to a generic 500)
//!
//! Persistence lives in the `notes-store` crate; handlers hold a shared
//! `Store` handle through [`AppState`] and convert every failure into an
//! [`ApiError`] before it leaves the handler boundary.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod validation;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export the storage crate for downstream users and tests
pub use notes_store;
