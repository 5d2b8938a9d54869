use crate::model::{LogicalEntry, Severity};
use crate::query::SeverityCounts;
use crate::stream::ConnectionState;
use serde::Serialize;
use std::sync::Arc;

/// Immutable render snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Entries passing both the search and severity filters, in order.
    /// Shared with the session, not copied.
    pub entries: Vec<Arc<LogicalEntry>>,
    /// Severity counts over the search-filtered entries.
    pub counts: SeverityCounts,
    /// All grouped entries, before filtering.
    pub total: usize,
    /// Events waiting in the pause buffer.
    pub pending: usize,
    pub paused: bool,
    pub grouping_enabled: bool,
    pub search: String,
    pub severity: Option<Severity>,
    pub connection: ConnectionState,
    pub loading: bool,
    pub source_name: Option<String>,
    pub dropped: u64,
    pub rejected: u64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            counts: SeverityCounts::default(),
            total: 0,
            pending: 0,
            paused: false,
            grouping_enabled: false,
            search: String::new(),
            severity: None,
            connection: ConnectionState::Connecting,
            loading: true,
            source_name: None,
            dropped: 0,
            rejected: 0,
        }
    }
}
