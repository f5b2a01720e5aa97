//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
///
/// The route table is fixed at startup; there is no dynamic
/// registration.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .with_state(state)
}
