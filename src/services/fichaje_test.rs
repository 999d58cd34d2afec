use super::*;
use crate::state::test_helpers::MockBackend;

#[test]
fn success_message_uses_label() {
    assert_eq!(success_message(TipoFichaje::Ingreso, "Ana"), "✅ Entrada registrada correctamente para Ana");
    assert_eq!(success_message(TipoFichaje::Salida, "Luis"), "✅ Salida registrada correctamente para Luis");
}

#[test]
fn failure_message_uses_lowercase_tipo() {
    let err = FichajeError::Backend(BackendError::Request("connection refused".into()));
    assert_eq!(failure_message(TipoFichaje::Ingreso, &err), "❌ Error al registrar ingreso: connection refused");
    assert_eq!(failure_message(TipoFichaje::Salida, &err), "❌ Error al registrar salida: connection refused");
}

#[tokio::test]
async fn record_inserts_stamped_row() {
    let mock = MockBackend::new();
    let in_flight = InFlight::new();
    let row = record(&mock, &in_flight, 4, TipoFichaje::Ingreso).await.unwrap();
    assert_eq!(row.usuario_id, 4);
    assert!(row.fecha_evento.ends_with('Z'));

    let stored = mock.fichajes.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].tipo, TipoFichaje::Ingreso);
    assert!(in_flight.busy_ids().is_empty());
}

#[tokio::test]
async fn record_refuses_while_same_registro_in_flight() {
    let mock = MockBackend::new();
    let in_flight = InFlight::new();
    let _held = in_flight.try_acquire(4).unwrap();

    let err = record(&mock, &in_flight, 4, TipoFichaje::Salida).await.unwrap_err();
    assert!(matches!(err, FichajeError::Busy));
    assert!(mock.fichajes.lock().unwrap().is_empty());

    assert!(record(&mock, &in_flight, 5, TipoFichaje::Salida).await.is_ok());
}

#[tokio::test]
async fn record_failure_releases_slot() {
    let mock = MockBackend::new();
    mock.fail_fichaje_with("insert or update on table \"fichajes\" violates foreign key constraint");
    let in_flight = InFlight::new();

    let err = record(&mock, &in_flight, 9, TipoFichaje::Ingreso).await.unwrap_err();
    assert!(matches!(err, FichajeError::Backend(_)));
    assert!(in_flight.busy_ids().is_empty());
}
