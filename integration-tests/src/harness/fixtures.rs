use logtide_core::model::{RawEvent, SourceKind, StreamKind};
use logtide_core::stream::WireMessage;

pub fn container_event(second: u32, text: &str) -> RawEvent {
    RawEvent::new(
        format!("2024-01-01T00:00:{second:02}Z"),
        SourceKind::Container,
        StreamKind::Stdout,
        text,
    )
}

pub fn file_event(second: u32, text: &str) -> RawEvent {
    RawEvent::new(
        format!("2024-01-01T00:00:{second:02}Z"),
        SourceKind::File,
        StreamKind::Unknown,
        text,
    )
}

/// Container events with increasing timestamps, one per line.
pub fn events(lines: &[&str]) -> Vec<RawEvent> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| container_event(i as u32, line))
        .collect()
}

pub fn wire_event(event: RawEvent) -> String {
    WireMessage::event(event).to_json()
}

pub fn wire_snapshot(events: Vec<RawEvent>, source_name: Option<&str>) -> String {
    WireMessage::snapshot(events, source_name.map(str::to_string)).to_json()
}
