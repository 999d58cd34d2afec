//! JSON API routes mirroring the HTML screens.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::backend::types::{BackendError, NewFichaje, Registro, TipoFichaje};
use crate::services::fichaje::{self, FichajeError};
use crate::services::listado;
use crate::services::registro::{self, RegistroError};
use crate::state::AppState;

/// Missing fields default to empty so validation, not the extractor, rejects them.
#[derive(Deserialize)]
pub struct CreateRegistroBody {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub telefono: String,
}

#[derive(Deserialize)]
pub struct CreateFichajeBody {
    #[serde(default)]
    pub tipo: String,
}

/// Error response body: `{"error": "..."}` with the user-facing message.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

pub(crate) fn backend_error_to_status(err: &BackendError) -> StatusCode {
    if err.is_missing_table() {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    match err {
        BackendError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        BackendError::Request(_) | BackendError::Api { .. } | BackendError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn registro_error_to_status(err: &RegistroError) -> StatusCode {
    match err {
        RegistroError::Invalid(_) => StatusCode::BAD_REQUEST,
        RegistroError::Backend(e) => backend_error_to_status(e),
    }
}

pub(crate) fn fichaje_error_to_status(err: &FichajeError) -> StatusCode {
    match err {
        FichajeError::Busy => StatusCode::CONFLICT,
        FichajeError::Backend(e) => backend_error_to_status(e),
    }
}

/// `GET /api/registros` — every registro, newest first.
pub async fn list_registros(State(state): State<AppState>) -> Result<Json<Vec<Registro>>, ApiError> {
    listado::fetch_registros(state.backend.as_ref())
        .await
        .map(Json)
        .map_err(|e| ApiError { status: backend_error_to_status(&e), message: listado::list_error_message(&e) })
}

/// `POST /api/registros` — create a registro. The body is `null` when the
/// backend accepted the row without echoing it back.
pub async fn create_registro(
    State(state): State<AppState>,
    payload: Result<Json<CreateRegistroBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Option<Registro>>), ApiError> {
    let Json(body) = payload?;
    let created = registro::register(state.backend.as_ref(), &body.nombre, &body.telefono)
        .await
        .map_err(|e| ApiError { status: registro_error_to_status(&e), message: e.user_message() })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /api/registros/:id/fichajes` — log an entry or exit.
pub async fn create_fichaje(
    State(state): State<AppState>,
    Path(registro_id): Path<i64>,
    payload: Result<Json<CreateFichajeBody>, JsonRejection>,
) -> Result<(StatusCode, Json<NewFichaje>), ApiError> {
    let Json(body) = payload?;
    let Some(tipo) = TipoFichaje::from_str(&body.tipo) else {
        return Err(ApiError { status: StatusCode::BAD_REQUEST, message: fichaje::MSG_INVALID_TIPO.to_owned() });
    };
    let row = fichaje::record(state.backend.as_ref(), &state.fichajes_in_flight, registro_id, tipo)
        .await
        .map_err(|e| ApiError {
            status: fichaje_error_to_status(&e),
            message: fichaje::failure_message(tipo, &e),
        })?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
