use crate::model::{RawEvent, SourceKind, StreamKind};
use crate::stream::{TransportEvent, WireMessage};
use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One JSON wire message per line
    #[default]
    Wire,
    /// One raw log line per line
    Lines,
}

/// Wrap a plain line read from a file. The timestamp is taken at read time.
pub fn line_event(text: impl Into<String>) -> RawEvent {
    RawEvent::new(
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        SourceKind::File,
        StreamKind::Unknown,
        text,
    )
}

/// Turn one stdin line into what a transport would deliver.
pub(crate) fn to_transport(line: String, input: InputFormat) -> TransportEvent {
    match input {
        InputFormat::Wire => TransportEvent::Message(line),
        InputFormat::Lines => TransportEvent::Message(WireMessage::event(line_event(line)).to_json()),
    }
}
