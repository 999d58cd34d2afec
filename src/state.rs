//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the backend handle, page presentation settings, and the
//! per-registro in-flight guard for fichaje requests.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config::PageConfig;
use crate::inflight::InFlight;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub page: Arc<PageConfig>,
    pub fichajes_in_flight: InFlight,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, page: PageConfig) -> Self {
        Self { backend, page: Arc::new(page), fichajes_in_flight: InFlight::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
