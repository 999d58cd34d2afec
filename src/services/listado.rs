//! List service — fetch registros for the attendance view.

use tracing::error;

use crate::backend::Backend;
use crate::backend::types::{BackendError, Registro};

pub const MSG_LIST_UNKNOWN_ERROR: &str = "Error desconocido al cargar datos";

/// Text shown in the list view when the fetch fails.
#[must_use]
pub fn list_error_message(err: &BackendError) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() { MSG_LIST_UNKNOWN_ERROR.to_owned() } else { msg }
}

/// Fetch every registro, newest first.
///
/// # Errors
///
/// Returns the backend error unchanged; callers render it with
/// [`list_error_message`].
pub async fn fetch_registros(backend: &dyn Backend) -> Result<Vec<Registro>, BackendError> {
    backend.list_registros().await.map_err(|e| {
        error!(error = %e, "registros fetch failed");
        e
    })
}

#[cfg(test)]
#[path = "listado_test.rs"]
mod tests;
