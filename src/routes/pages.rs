//! HTML page routes — the form and list screens.

use axum::extract::{Form, Path, State};
use axum::response::Html;
use serde::Deserialize;

use crate::backend::types::{Registro, TipoFichaje};
use crate::services::{fichaje, listado, registro};
use crate::state::AppState;
use crate::views::{self, FormPage, ListPage, Status};

#[derive(Deserialize)]
pub struct RegistroForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub telefono: String,
}

#[derive(Deserialize)]
pub struct FichajeForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub tipo: String,
}

/// `GET /` — empty registration form.
pub async fn form_page(State(state): State<AppState>) -> Html<String> {
    Html(views::render_form(&state.page, &FormPage::default()))
}

/// `POST /registros` — save a registro and re-render the form with its status.
pub async fn submit_registro(State(state): State<AppState>, Form(body): Form<RegistroForm>) -> Html<String> {
    let html = match registro::register(state.backend.as_ref(), &body.nombre, &body.telefono).await {
        Ok(_) => views::render_form(
            &state.page,
            &FormPage { status: Some(Status::success(registro::MSG_SAVED)), ..FormPage::default() },
        ),
        Err(e) => views::render_form(
            &state.page,
            &FormPage { status: Some(Status::error(e.user_message())), nombre: &body.nombre, telefono: &body.telefono },
        ),
    };
    Html(html)
}

/// `GET /registros` — attendance list. Reloading the page refreshes it.
pub async fn list_page(State(state): State<AppState>) -> Html<String> {
    Html(render_list_with_notice(&state, None).await)
}

/// `POST /registros/:id/fichajes` — log an entry or exit, then show the list with a notice.
pub async fn submit_fichaje(
    State(state): State<AppState>,
    Path(registro_id): Path<i64>,
    Form(body): Form<FichajeForm>,
) -> Html<String> {
    let notice = match TipoFichaje::from_str(&body.tipo) {
        None => Status::error(fichaje::MSG_INVALID_TIPO),
        Some(tipo) => match fichaje::record(state.backend.as_ref(), &state.fichajes_in_flight, registro_id, tipo).await {
            Ok(_) => Status::success(fichaje::success_message(tipo, body.nombre.trim())),
            Err(e) => Status::error(fichaje::failure_message(tipo, &e)),
        },
    };
    Html(render_list_with_notice(&state, Some(notice)).await)
}

async fn render_list_with_notice(state: &AppState, notice: Option<Status>) -> String {
    let fetched: Result<Vec<Registro>, String> = listado::fetch_registros(state.backend.as_ref())
        .await
        .map_err(|e| listado::list_error_message(&e));
    let busy = state.fichajes_in_flight.busy_ids();
    let page = ListPage { registros: fetched.as_deref().map_err(Clone::clone), notice, busy: &busy };
    views::render_list(&state.page, &page)
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
