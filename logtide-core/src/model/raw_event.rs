use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    /// Combined output of a container. Spelled `docker` on the wire.
    #[serde(rename = "docker", alias = "container")]
    Container,
}

/// Output channel a line was read from. Files have no channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamKind {
    #[serde(rename = "stdout")]
    Stdout,
    #[serde(rename = "stderr")]
    Stderr,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
            StreamKind::Unknown => Ok(()),
        }
    }
}

/// One line of output exactly as the transport delivered it.
///
/// Immutable once created. The timestamp is supplied by the source and is
/// kept verbatim; it is never parsed or re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub timestamp: String,
    #[serde(rename = "source")]
    pub source_kind: SourceKind,
    #[serde(default)]
    pub stream: StreamKind,
    #[serde(rename = "message", default)]
    pub text: String,
}

impl RawEvent {
    pub fn new(
        timestamp: impl Into<String>,
        source_kind: SourceKind,
        stream: StreamKind,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            source_kind,
            stream,
            text: text.into(),
        }
    }
}
