use integration_tests::harness::{captured_events, container_event, init_test_tracing, wire_event};
use logtide_core::stream::{Session, SessionSettings, WireError};
use tracing::Level;

#[test]
fn malformed_message_is_dropped_and_logged() {
    // Arrange
    init_test_tracing();
    let mut session = Session::new(SessionSettings::default());
    session
        .receive(&wire_event(container_event(0, "kept")))
        .expect("valid frame");

    // Act
    let result = session.receive(r#"{"type":"telemetry","payload":"diag-marker-7f3a"}"#);

    // Assert
    assert!(matches!(result, Err(WireError::Malformed { .. })));
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.rejected(), 1);

    let events = captured_events();
    let warning = events
        .iter()
        .find(|e| {
            e.level == Level::WARN
                && e.field("frame")
                    .is_some_and(|m| m.contains("diag-marker-7f3a"))
        })
        .expect("malformed message warning");

    assert!(warning.target.starts_with("logtide_core"));
    assert!(warning.field("error").is_some());
}

#[test]
fn pause_buffer_overflow_is_logged() {
    // Arrange
    init_test_tracing();
    let mut session = Session::new(SessionSettings {
        pending_limit: Some(2),
        ..Default::default()
    });

    // Act
    session.pause();
    for i in 0..5 {
        session.push_event(container_event(i, &format!("line {i}")));
    }

    // Assert
    assert_eq!(session.pending_len(), 2);
    assert_eq!(session.dropped(), 3);
    assert!(captured_events().iter().any(|e| {
        e.level == Level::WARN && e.field("limit") == Some("2") && e.field("dropped") == Some("3")
    }));
}
