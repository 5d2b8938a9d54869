use crate::model::RawEvent;
use crate::stream::WireError;
use serde::{Deserialize, Serialize};

/// Envelope pushed by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireMessage {
    /// Full backlog sent once at connection start. Replaces the ledger.
    Snapshot {
        events: Vec<RawEvent>,
        #[serde(
            rename = "sourceName",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        source_name: Option<String>,
    },
    /// A single new line.
    Event { event: RawEvent },
}

impl WireMessage {
    pub fn snapshot(events: Vec<RawEvent>, source_name: Option<String>) -> Self {
        WireMessage::Snapshot {
            events,
            source_name,
        }
    }

    pub fn event(event: RawEvent) -> Self {
        WireMessage::Event { event }
    }

    pub fn to_json(&self) -> String {
        // Every field is a string, sequence or enum; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Decode one text frame from the transport.
pub fn decode(text: &str) -> Result<WireMessage, WireError> {
    if text.trim().is_empty() {
        return Err(WireError::Empty);
    }
    serde_json::from_str(text).map_err(|source| WireError::Malformed { source })
}
