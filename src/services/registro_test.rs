use super::*;
use crate::state::test_helpers::MockBackend;

// =========================================================================
// validate
// =========================================================================

#[test]
fn validate_trims_fields() {
    let new = validate("  María García ", " +34 600 000 000\n").unwrap();
    assert_eq!(new.nombre, "María García");
    assert_eq!(new.telefono, "+34 600 000 000");
}

#[test]
fn validate_rejects_blank_nombre_first() {
    let err = validate("   ", "").unwrap_err();
    assert_eq!(err.user_message(), MSG_NOMBRE_REQUIRED);
}

#[test]
fn validate_rejects_blank_telefono() {
    let err = validate("Ana", "  ").unwrap_err();
    assert_eq!(err.user_message(), MSG_TELEFONO_REQUIRED);
}

// =========================================================================
// user_message
// =========================================================================

#[test]
fn missing_table_gets_setup_hint() {
    let err = RegistroError::Backend(BackendError::Api {
        status: 404,
        code: Some("42P01".into()),
        message: "relation \"public.registros\" does not exist".into(),
    });
    assert_eq!(err.user_message(), MSG_MISSING_TABLES);
}

#[test]
fn backend_message_passes_through() {
    let err = RegistroError::Backend(BackendError::Api {
        status: 409,
        code: Some("23505".into()),
        message: "duplicate key value".into(),
    });
    assert_eq!(err.user_message(), "duplicate key value");
}

#[test]
fn empty_backend_message_falls_back_to_generic() {
    let err = RegistroError::Backend(BackendError::Api { status: 500, code: None, message: String::new() });
    assert_eq!(err.user_message(), MSG_SAVE_FAILED);
}

// =========================================================================
// register
// =========================================================================

#[tokio::test]
async fn register_inserts_registro_and_log() {
    let mock = MockBackend::new();
    let created = register(&mock, "Ana", "600").await.unwrap().unwrap();
    assert_eq!(created.nombre, "Ana");
    assert_eq!(mock.registros.lock().unwrap().len(), 1);

    let logs = mock.logs.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].accion, LOG_ACTION_NEW_USER);
    assert!(!logs[0].fecha_registro.is_empty());
}

#[tokio::test]
async fn register_succeeds_when_log_insert_fails() {
    let mock = MockBackend::new();
    mock.fail_log();
    let created = register(&mock, "Ana", "600").await.unwrap().unwrap();
    assert_eq!(created.id, 1);
    assert!(mock.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn register_succeeds_when_insert_echoes_nothing() {
    let mock = MockBackend::new();
    mock.hide_inserted();
    let created = register(&mock, "Ana", "600").await.unwrap();
    assert!(created.is_none());
    assert_eq!(mock.registros.lock().unwrap().len(), 1);
    assert_eq!(mock.logs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn register_skips_backend_on_invalid_input() {
    let mock = MockBackend::new();
    let err = register(&mock, "", "600").await.unwrap_err();
    assert!(matches!(err, RegistroError::Invalid(_)));
    assert!(mock.registros.lock().unwrap().is_empty());
    assert!(mock.logs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn register_failure_does_not_write_log() {
    let mock = MockBackend::new();
    mock.fail_registro_with(Some("42P01"), "relation does not exist");
    let err = register(&mock, "Ana", "600").await.unwrap_err();
    assert!(matches!(err, RegistroError::Backend(_)));
    assert_eq!(err.user_message(), MSG_MISSING_TABLES);
    assert!(mock.logs.lock().unwrap().is_empty());
}
