//! Registration service — insert a registro plus a best-effort audit log.

use tracing::{error, info, warn};

use crate::backend::Backend;
use crate::backend::types::{BackendError, LogEntry, NewRegistro, Registro};

pub const LOG_ACTION_NEW_USER: &str = "Registro de nuevo usuario";
pub const MSG_SAVED: &str = "¡Contacto registrado correctamente!";
pub const MSG_SAVE_FAILED: &str = "Ocurrió un error al guardar los datos.";
pub const MSG_MISSING_TABLES: &str =
    "Error: Falta crear las tablas en Supabase. Ejecuta el script SQL actualizado.";
pub const MSG_NOMBRE_REQUIRED: &str = "El nombre es obligatorio.";
pub const MSG_TELEFONO_REQUIRED: &str = "El teléfono es obligatorio.";

#[derive(Debug, thiserror::Error)]
pub enum RegistroError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl RegistroError {
    /// Text shown in the form's status box.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(msg) => (*msg).to_owned(),
            Self::Backend(e) if e.is_missing_table() => MSG_MISSING_TABLES.to_owned(),
            Self::Backend(e) => {
                let msg = e.to_string();
                if msg.trim().is_empty() { MSG_SAVE_FAILED.to_owned() } else { msg }
            }
        }
    }
}

/// Trim both fields and reject blanks before any network call.
///
/// # Errors
///
/// Returns [`RegistroError::Invalid`] naming the first empty field.
pub fn validate(nombre: &str, telefono: &str) -> Result<NewRegistro, RegistroError> {
    let nombre = nombre.trim();
    if nombre.is_empty() {
        return Err(RegistroError::Invalid(MSG_NOMBRE_REQUIRED));
    }
    let telefono = telefono.trim();
    if telefono.is_empty() {
        return Err(RegistroError::Invalid(MSG_TELEFONO_REQUIRED));
    }
    Ok(NewRegistro { nombre: nombre.to_owned(), telefono: telefono.to_owned() })
}

/// Persist a new registro. The audit log insert that follows never fails
/// the registration; its error is only logged.
///
/// Returns the stored row when the backend echoes it back, `None` when the
/// insert was accepted without a readable representation.
///
/// # Errors
///
/// Returns an error if validation fails or the registro insert is rejected.
pub async fn register(
    backend: &dyn Backend,
    nombre: &str,
    telefono: &str,
) -> Result<Option<Registro>, RegistroError> {
    let new = validate(nombre, telefono)?;

    let created = backend.insert_registro(&new).await.map_err(|e| {
        error!(error = %e, code = e.code().unwrap_or_default(), "registro insert failed");
        e
    })?;
    let registro_id = created.as_ref().map(|r| r.id);
    info!(?registro_id, "registro created");

    let entry = LogEntry { accion: LOG_ACTION_NEW_USER.to_owned(), fecha_registro: super::now_rfc3339() };
    if let Err(e) = backend.insert_log(&entry).await {
        warn!(error = %e, ?registro_id, "registro log insert failed");
    }

    Ok(created)
}

#[cfg(test)]
#[path = "registro_test.rs"]
mod tests;
