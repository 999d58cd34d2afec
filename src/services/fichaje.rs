//! Fichaje service — log an entry or exit for a registro.

use tracing::{error, info};

use crate::backend::Backend;
use crate::backend::types::{BackendError, NewFichaje, TipoFichaje};
use crate::inflight::InFlight;

pub const MSG_INVALID_TIPO: &str = "Tipo de fichaje no válido.";

#[derive(Debug, thiserror::Error)]
pub enum FichajeError {
    /// Another fichaje for the same registro has not finished yet.
    #[error("ya hay un fichaje en curso para este usuario")]
    Busy,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Notice shown after a successful fichaje.
#[must_use]
pub fn success_message(tipo: TipoFichaje, nombre: &str) -> String {
    format!("✅ {} registrada correctamente para {nombre}", tipo.label())
}

/// Notice shown after a failed fichaje.
#[must_use]
pub fn failure_message(tipo: TipoFichaje, err: &FichajeError) -> String {
    format!("❌ Error al registrar {}: {err}", tipo.as_str().to_lowercase())
}

/// Insert a fichaje stamped with the current time.
///
/// # Errors
///
/// Returns [`FichajeError::Busy`] while another fichaje for `usuario_id` is
/// in flight, or the backend error if the insert is rejected.
pub async fn record(
    backend: &dyn Backend,
    in_flight: &InFlight,
    usuario_id: i64,
    tipo: TipoFichaje,
) -> Result<NewFichaje, FichajeError> {
    let Some(_permit) = in_flight.try_acquire(usuario_id) else {
        return Err(FichajeError::Busy);
    };

    let fichaje = NewFichaje { usuario_id, tipo, fecha_evento: super::now_rfc3339() };
    if let Err(e) = backend.insert_fichaje(&fichaje).await {
        error!(error = %e, registro_id = usuario_id, tipo = tipo.as_str(), "fichaje insert failed");
        return Err(e.into());
    }

    info!(registro_id = usuario_id, tipo = tipo.as_str(), "fichaje recorded");
    Ok(fichaje)
}

#[cfg(test)]
#[path = "fichaje_test.rs"]
mod tests;
