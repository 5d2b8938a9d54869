use crate::stream::{ConnectionState, ConnectionStatus};

#[test]
fn starts_connecting_and_loading() {
    let status = ConnectionStatus::new();

    assert_eq!(status.state(), ConnectionState::Connecting);
    assert!(status.is_loading());
    assert!(!status.is_connected());
}

#[test]
fn open_then_lost_then_retry() {
    let mut status = ConnectionStatus::new();

    assert_eq!(status.on_open(), Some(ConnectionState::Connecting));
    assert!(status.is_connected());
    assert!(!status.is_loading());

    assert_eq!(status.on_lost(), Some(ConnectionState::Connected));
    assert_eq!(status.state(), ConnectionState::Disconnected);

    assert_eq!(status.on_connecting(), Some(ConnectionState::Disconnected));
    assert_eq!(status.state(), ConnectionState::Reconnecting);
    assert!(!status.is_loading());

    assert_eq!(status.on_open(), Some(ConnectionState::Reconnecting));
    assert_eq!(status.state(), ConnectionState::Connected);
}

#[test]
fn repeated_reports_are_not_transitions() {
    let mut status = ConnectionStatus::new();

    assert_eq!(status.on_connecting(), None);
    status.on_open();
    assert_eq!(status.on_open(), None);
}

#[test]
fn failure_before_first_connection_is_disconnected() {
    let mut status = ConnectionStatus::new();

    status.on_lost();

    assert_eq!(status.state(), ConnectionState::Disconnected);
    assert!(!status.is_loading());
    assert_eq!(status.on_connecting(), Some(ConnectionState::Disconnected));
    assert_eq!(status.state(), ConnectionState::Connecting);
}
