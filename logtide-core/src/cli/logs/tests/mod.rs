
use crate::model::{RawEvent, SourceKind, StreamKind};

pub(super) fn event(second: u32, text: &str) -> RawEvent {
    RawEvent::new(
        format!("2024-01-01T00:00:{second:02}Z"),
        SourceKind::File,
        StreamKind::Unknown,
        text,
    )
}
