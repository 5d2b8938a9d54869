use crate::classify::{StructuredPayload, classify, sniff};
use crate::model::{RawEvent, Severity, SourceKind, StreamKind};
use serde::Serialize;
use std::fmt;

/// Stable identifier of a logical entry.
///
/// Derived from the header timestamp and a per-pass sequence counter, never
/// from content, so identical lines stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(timestamp: &str, seq: u64) -> Self {
        Self(format!("{timestamp}::{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The unit a reader sees: a header line plus any absorbed continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalEntry {
    pub id: EntryId,
    pub timestamp: String,
    pub source_kind: SourceKind,
    pub stream: StreamKind,
    pub header: String,
    pub continuations: Vec<String>,
    // Headers never change after open, so this is classified once.
    severity: Severity,
}

impl LogicalEntry {
    pub(crate) fn open(event: &RawEvent, seq: u64) -> Self {
        Self {
            id: EntryId::new(&event.timestamp, seq),
            timestamp: event.timestamp.clone(),
            source_kind: event.source_kind,
            stream: event.stream,
            header: event.text.clone(),
            continuations: Vec::new(),
            severity: classify(&event.text),
        }
    }

    /// Severity of the header line. Continuations do not participate.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Structured payload carried by the header, if any.
    pub fn payload(&self) -> Option<StructuredPayload> {
        sniff(&self.header)
    }

    pub fn is_grouped(&self) -> bool {
        !self.continuations.is_empty()
    }

    /// Header followed by continuations, in arrival order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.continuations.iter().map(String::as_str))
    }

    /// Text that search runs against: header and continuations joined by newlines.
    pub fn search_text(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len() + 1 + self.continuations.iter().map(|c| c.len() + 1).sum::<usize>(),
        );
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&self.continuations.join("\n"));
        out
    }
}
