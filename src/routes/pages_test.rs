use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockBackend, registro, test_app_state};

#[tokio::test]
async fn submit_registro_success_clears_fields() {
    let mock = Arc::new(MockBackend::new());
    let state = test_app_state(mock.clone());
    let body = RegistroForm { nombre: "Ana".into(), telefono: "600".into() };

    let Html(html) = submit_registro(State(state), Form(body)).await;
    assert!(html.contains(registro::MSG_SAVED));
    assert!(html.contains("value=\"\""));
    assert!(!html.contains("value=\"Ana\""));
    assert_eq!(mock.registros.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn submit_registro_error_keeps_values_and_shows_hint() {
    let mock = Arc::new(MockBackend::new());
    mock.fail_registro_with(Some("42P01"), "relation \"public.registros\" does not exist");
    let state = test_app_state(mock);
    let body = RegistroForm { nombre: "Ana".into(), telefono: "600".into() };

    let Html(html) = submit_registro(State(state), Form(body)).await;
    assert!(html.contains("status-error"));
    assert!(html.contains(registro::MSG_MISSING_TABLES));
    assert!(html.contains("value=\"Ana\""));
    assert!(html.contains("value=\"600\""));
}

#[tokio::test]
async fn submit_fichaje_rejects_unknown_tipo() {
    let mock = Arc::new(MockBackend::with_registros(vec![registro(1, "Ana", "600")]));
    let state = test_app_state(mock.clone());
    let body = FichajeForm { nombre: "Ana".into(), tipo: "PAUSA".into() };

    let Html(html) = submit_fichaje(State(state), Path(1), Form(body)).await;
    assert!(html.contains(fichaje::MSG_INVALID_TIPO));
    assert!(mock.fichajes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_fichaje_success_shows_notice_and_list() {
    let mock = Arc::new(MockBackend::with_registros(vec![registro(1, "Ana", "600")]));
    let state = test_app_state(mock.clone());
    let body = FichajeForm { nombre: "Ana".into(), tipo: "SALIDA".into() };

    let Html(html) = submit_fichaje(State(state), Path(1), Form(body)).await;
    assert!(html.contains("✅ Salida registrada correctamente para Ana"));
    assert!(html.contains("action=\"/registros/1/fichajes\""));
    assert_eq!(mock.fichajes.lock().unwrap()[0].tipo, TipoFichaje::Salida);
}

#[tokio::test]
async fn submit_fichaje_failure_shows_error_notice() {
    let mock = Arc::new(MockBackend::with_registros(vec![registro(1, "Ana", "600")]));
    mock.fail_fichaje_with("network down");
    let state = test_app_state(mock);
    let body = FichajeForm { nombre: "Ana".into(), tipo: "INGRESO".into() };

    let Html(html) = submit_fichaje(State(state), Path(1), Form(body)).await;
    assert!(html.contains("❌ Error al registrar ingreso: network down"));
}

#[tokio::test]
async fn list_page_shows_fetch_error() {
    let mock = Arc::new(MockBackend::new());
    mock.fail_list_with("JWT expired");
    let state = test_app_state(mock);

    let Html(html) = list_page(State(state)).await;
    assert!(html.contains("Error al cargar"));
    assert!(html.contains("JWT expired"));
}
