use super::event;
use crate::grouping::group;
use crate::model::Severity;
use crate::stream::{
    Command, ConnectionState, DriverHandle, Session, SessionDriver, SessionSettings,
    TransportEvent, View, WireMessage,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Helper: poll the published view until it satisfies `pred`
async fn wait_for(handle: &DriverHandle, pred: impl Fn(&View) -> bool) {
    for _ in 0..1_000 {
        if pred(&handle.view()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("driver never published the expected view");
}

fn frame(second: u32, text: &str) -> TransportEvent {
    TransportEvent::Message(WireMessage::event(event(second, text)).to_json())
}

#[tokio::test]
async fn driver_applies_transport_events_in_order() {
    // Arrange
    let (driver, handle) = SessionDriver::new(Session::new(SessionSettings {
        grouping_enabled: true,
        ..SessionSettings::default()
    }));
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(driver.run(rx));

    // Act
    tx.send(TransportEvent::Opened).await.unwrap();
    tx.send(frame(0, "[2024-01-01 00:00:00] ERROR boom")).await.unwrap();
    tx.send(frame(1, "    at foo.js:10")).await.unwrap();
    tx.send(TransportEvent::Message("garbage".into())).await.unwrap();
    tx.send(TransportEvent::Closed).await.unwrap();
    drop(tx);
    let session = task.await.unwrap();

    // Assert
    assert_eq!(session.entries().len(), 1);
    assert_eq!(session.entries()[0].continuations.len(), 1);
    assert_eq!(session.rejected(), 1);

    let view = handle.view();
    assert_eq!(view.connection, ConnectionState::Disconnected);
    assert_eq!(view.total, 1);
    assert!(!view.loading);
}

#[tokio::test]
async fn paused_driver_buffers_until_resume() {
    // Arrange
    let (driver, handle) = SessionDriver::new(Session::new(SessionSettings {
        grouping_enabled: true,
        ..SessionSettings::default()
    }));
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(driver.run(rx));

    handle.send(Command::Pause).await.unwrap();
    wait_for(&handle, |v| v.paused).await;

    // Act
    let lines = ["[2024-01-01 00:00:00] ERROR boom", "    at foo.js:10", "next"];
    for (i, line) in lines.iter().enumerate() {
        tx.send(frame(i as u32, line)).await.unwrap();
    }
    wait_for(&handle, |v| v.pending == 3).await;
    assert_eq!(handle.view().total, 0);

    handle.send(Command::Resume).await.unwrap();
    wait_for(&handle, |v| !v.paused).await;

    drop(tx);
    let session = task.await.unwrap();

    // Assert
    let expected: Vec<_> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| event(i as u32, line))
        .collect();
    assert_eq!(session.ledger(), expected.as_slice());
    assert_eq!(session.entries(), group(&expected, true).as_slice());
    assert_eq!(handle.view().pending, 0);
}

#[tokio::test]
async fn driver_commands_update_the_published_view() {
    // Arrange
    let (driver, handle) = SessionDriver::new(Session::default());
    let (tx, rx) = mpsc::channel(16);
    let task = tokio::spawn(driver.run(rx));
    tx.send(frame(0, "ERROR one")).await.unwrap();
    tx.send(frame(1, "INFO two")).await.unwrap();
    wait_for(&handle, |v| v.total == 2).await;

    // Act
    handle
        .send(Command::SetSeverityFilter(Some(Severity::Error)))
        .await
        .unwrap();
    handle.send(Command::SetSearch("one".into())).await.unwrap();
    wait_for(&handle, |v| v.search == "one").await;

    // Assert
    let view = handle.view();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].header, "ERROR one");
    assert_eq!(view.counts.get(Severity::Info), 0);

    handle.send(Command::Clear).await.unwrap();
    wait_for(&handle, |v| v.total == 0 && v.search.is_empty()).await;

    drop(tx);
    task.await.unwrap();
}

#[tokio::test]
async fn send_fails_after_the_driver_stops() {
    let (driver, handle) = SessionDriver::new(Session::default());
    let (tx, rx) = mpsc::channel(1);
    drop(tx);

    driver.run(rx).await;

    assert!(handle.send(Command::Pause).await.is_err());
}

#[tokio::test]
async fn streamed_lines_are_published_in_batches() {
    // Arrange
    let (driver, handle) = SessionDriver::new(Session::default());
    let (tx, rx) = mpsc::channel(512);
    let task = tokio::spawn(driver.run(rx));
    let before = handle.view();

    // Act
    for i in 0..500 {
        tx.send(frame(i % 60, &format!("INFO line {i}"))).await.unwrap();
    }
    wait_for(&handle, |v| v.total == 500).await;
    drop(tx);
    task.await.unwrap();

    // Assert
    let view = handle.view();
    assert!(!Arc::ptr_eq(&before, &view));
    assert_eq!(view.entries.len(), 500);
    assert_eq!(view.counts.get(Severity::Info), 500);
}

#[tokio::test]
async fn published_views_share_entries_with_the_session() {
    // Arrange
    let (driver, handle) = SessionDriver::new(Session::default());
    let (tx, rx) = mpsc::channel(8);
    let task = tokio::spawn(driver.run(rx));

    // Act
    tx.send(frame(0, "ERROR shared")).await.unwrap();
    drop(tx);
    let session = task.await.unwrap();

    // Assert
    let view = handle.view();
    assert!(Arc::ptr_eq(&view.entries[0], &session.entries()[0]));
}
