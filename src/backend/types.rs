//! Backend types — table rows, insert payloads, and errors.

use serde::{Deserialize, Serialize};

/// Postgres `undefined_table`: the schema has not been created yet.
pub const UNDEFINED_TABLE_CODE: &str = "42P01";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend client operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request never produced a response.
    #[error("{0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, code: Option<String>, message: String },

    /// The response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),
}

impl BackendError {
    /// Backend error code (Postgres SQLSTATE or `PGRST*`), when one was returned.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_missing_table(&self) -> bool {
        self.code() == Some(UNDEFINED_TABLE_CODE)
    }
}

// =============================================================================
// REGISTRO
// =============================================================================

/// A registered person's contact record. Mirrors the `registros` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registro {
    pub id: i64,
    pub created_at: String,
    pub nombre: String,
    pub telefono: String,
}

/// Insert payload for `registros`; `id` and `created_at` are backend-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistro {
    pub nombre: String,
    pub telefono: String,
}

// =============================================================================
// FICHAJE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoFichaje {
    #[serde(rename = "INGRESO")]
    Ingreso,
    #[serde(rename = "SALIDA")]
    Salida,
}

impl TipoFichaje {
    /// Wire value stored in `fichajes.tipo`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ingreso => "INGRESO",
            Self::Salida => "SALIDA",
        }
    }

    /// Button label shown in the list view.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ingreso => "Entrada",
            Self::Salida => "Salida",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INGRESO" => Some(Self::Ingreso),
            "SALIDA" => Some(Self::Salida),
            _ => None,
        }
    }
}

/// Clock-in/clock-out event. Mirrors the `fichajes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFichaje {
    pub usuario_id: i64,
    pub tipo: TipoFichaje,
    pub fecha_evento: String,
}

// =============================================================================
// LOG
// =============================================================================

/// Audit row written to `logs_registro`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub accion: String,
    pub fecha_registro: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
