//! Backend — hosted database access behind an async trait.
//!
//! DESIGN
//! ======
//! All persistence is delegated to a hosted PostgREST service (Supabase).
//! Handlers only see the `Backend` trait so tests can swap in a mock; the
//! production implementation lives in `supabase`.

pub mod supabase;
pub mod types;

pub use supabase::SupabaseClient;
use types::{BackendError, LogEntry, NewFichaje, NewRegistro, Registro};

/// Table operations the application needs. Object safe for `Arc<dyn Backend>`.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Insert a row into `registros` and return it as stored.
    ///
    /// `Ok(None)` means the insert was accepted but the row was not echoed
    /// back (for example when row-level security hides it from the caller).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the backend rejects it.
    async fn insert_registro(&self, registro: &NewRegistro) -> Result<Option<Registro>, BackendError>;

    /// Select every row of `registros`, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the body is malformed.
    async fn list_registros(&self) -> Result<Vec<Registro>, BackendError>;

    /// Insert a row into `fichajes`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the backend rejects it.
    async fn insert_fichaje(&self, fichaje: &NewFichaje) -> Result<(), BackendError>;

    /// Insert a row into `logs_registro`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the backend rejects it.
    async fn insert_log(&self, entry: &LogEntry) -> Result<(), BackendError>;
}
