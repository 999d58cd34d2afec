//! Server-rendered HTML for the two screens.
//!
//! DESIGN
//! ======
//! Pages are static templates with `{{NAME}}` slots filled in a single
//! pass, so user text that happens to contain a slot marker is never
//! expanded. Every dynamic value is HTML-escaped before it is slotted in.

use crate::backend::types::{Registro, TipoFichaje};
use crate::config::PageConfig;

const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");
const FORM_TEMPLATE: &str = include_str!("../../templates/form.html");
const LIST_TEMPLATE: &str = include_str!("../../templates/list.html");

/// Which of the two screens is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    List,
}

impl View {
    fn title(self) -> &'static str {
        match self {
            Self::Form => "Registro de Contacto",
            Self::List => "Control de Asistencia",
        }
    }

    fn card_class(self) -> &'static str {
        match self {
            Self::Form => "card-form",
            Self::List => "card-list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Inline feedback box: form status after submit, list notice after a fichaje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

#[derive(Debug, Default)]
pub struct FormPage<'a> {
    pub status: Option<Status>,
    pub nombre: &'a str,
    pub telefono: &'a str,
}

#[derive(Debug)]
pub struct ListPage<'a> {
    /// Fetched rows, or the error text to show instead of them.
    pub registros: Result<&'a [Registro], String>,
    pub notice: Option<Status>,
    /// Registro ids with a fichaje in flight; their buttons render disabled.
    pub busy: &'a [i64],
}

// =============================================================================
// RENDERING
// =============================================================================

#[must_use]
pub fn render_form(page: &PageConfig, form: &FormPage<'_>) -> String {
    let status = form.status.as_ref().map(render_status).unwrap_or_default();
    let nombre = escape_html(form.nombre);
    let telefono = escape_html(form.telefono);
    let body = fill(
        FORM_TEMPLATE,
        &[("STATUS", status.as_str()), ("NOMBRE", nombre.as_str()), ("TELEFONO", telefono.as_str())],
    );
    render_layout(page, View::Form, &body)
}

#[must_use]
pub fn render_list(page: &PageConfig, list: &ListPage<'_>) -> String {
    let notice = list.notice.as_ref().map(render_status).unwrap_or_default();
    let rows = match &list.registros {
        Err(message) => format!(
            "      <div class=\"list-error\"><p><strong>Error al cargar</strong></p><p>{}</p></div>",
            escape_html(message)
        ),
        Ok(rows) if rows.is_empty() => "      <div class=\"empty\"><p><strong>No se encontraron registros</strong></p></div>".to_owned(),
        Ok(rows) => rows
            .iter()
            .map(|r| render_row(r, list.busy.contains(&r.id)))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let map_url = escape_html(&page.map_embed_url);
    let body = fill(
        LIST_TEMPLATE,
        &[("NOTICE", notice.as_str()), ("ROWS", rows.as_str()), ("MAP_URL", map_url.as_str())],
    );
    render_layout(page, View::List, &body)
}

fn render_layout(page: &PageConfig, view: View, body: &str) -> String {
    let background = escape_html(&page.background_image_url);
    fill(
        LAYOUT_TEMPLATE,
        &[
            ("TITLE", view.title()),
            ("BACKGROUND_URL", background.as_str()),
            ("CARD_CLASS", view.card_class()),
            ("BODY", body),
        ],
    )
}

fn render_status(status: &Status) -> String {
    let class = match status.kind {
        StatusKind::Success => "status-success",
        StatusKind::Error => "status-error",
    };
    format!(
        "    <div class=\"status {class}\" role=\"status\">{}</div>",
        escape_html(&status.message)
    )
}

fn render_row(registro: &Registro, busy: bool) -> String {
    let nombre = escape_html(&registro.nombre);
    let disabled = if busy { " disabled" } else { "" };
    let button = |tipo: TipoFichaje, class: &str| {
        format!(
            "<form method=\"post\" action=\"/registros/{id}/fichajes\">\
             <input type=\"hidden\" name=\"nombre\" value=\"{nombre}\">\
             <input type=\"hidden\" name=\"tipo\" value=\"{tipo}\">\
             <button type=\"submit\" class=\"btn {class}\"{disabled}>{label}</button></form>",
            id = registro.id,
            tipo = tipo.as_str(),
            label = tipo.label(),
        )
    };
    format!(
        "      <div class=\"row\" data-id=\"{id}\">\n        <div><h3>{nombre}</h3><div class=\"phone\">{telefono}</div></div>\n        <div class=\"actions\">{entrada}{salida}</div>\n      </div>",
        id = registro.id,
        telefono = escape_html(&registro.telefono),
        entrada = button(TipoFichaje::Ingreso, "btn-in"),
        salida = button(TipoFichaje::Salida, "btn-out"),
    )
}

// =============================================================================
// HELPERS
// =============================================================================

/// Replace `{{KEY}}` slots in one left-to-right pass. Unknown slots are kept verbatim.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match slots.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
