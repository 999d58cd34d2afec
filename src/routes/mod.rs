//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two HTML screens (`/` form, `/registros` list),
//! the JSON API under `/api`, and the health check under a single Axum
//! router with request tracing.

pub mod api;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::form_page))
        .route("/registros", get(pages::list_page).post(pages::submit_registro))
        .route("/registros/{id}/fichajes", post(pages::submit_fichaje))
        .route("/api/registros", get(api::list_registros).post(api::create_registro))
        .route("/api/registros/{id}/fichajes", post(api::create_fichaje))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
