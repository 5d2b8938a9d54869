mod driver_tests;
mod message_tests;
mod state_tests;

use crate::model::{RawEvent, SourceKind, StreamKind};

/// Helper: docker stdout event with a sequential timestamp
pub(super) fn event(second: u32, text: &str) -> RawEvent {
    RawEvent::new(
        format!("2024-01-01T00:00:{second:02}Z"),
        SourceKind::Container,
        StreamKind::Stdout,
        text,
    )
}

/// Helper: one event per line
pub(super) fn events(lines: &[&str]) -> Vec<RawEvent> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| event(i as u32, line))
        .collect()
}
