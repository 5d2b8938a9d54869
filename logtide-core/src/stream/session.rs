use crate::grouping::{Grouper, Placement};
use crate::model::{LogicalEntry, RawEvent, Severity};
use crate::query::Filter;
use crate::stream::{ConnectionState, ConnectionStatus, View, WireError, WireMessage, decode};
use std::collections::VecDeque;
use std::sync::Arc;

// Longest slice of a rejected message echoed into the log.
const REJECTED_PREVIEW_CHARS: usize = 120;

/// Initial settings for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSettings {
    pub grouping_enabled: bool,
    pub search: String,
    pub severity: Option<Severity>,
    /// Cap on events buffered while paused. `None` is unbounded.
    pub pending_limit: Option<usize>,
}

/// What happened to an incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    /// Appended to the ledger and grouped.
    Appended(Placement),
    /// Held in the pause buffer.
    Buffered,
    /// The ledger was replaced by a snapshot of this many events.
    Replaced(usize),
}

/// Owns every piece of live state for one stream.
///
/// Inbound messages and user operations are applied one at a time through
/// `&mut self`; nothing here blocks or performs I/O.
#[derive(Debug, Clone)]
pub struct Session {
    ledger: Vec<RawEvent>,
    pending: VecDeque<RawEvent>,
    pending_limit: Option<usize>,
    grouper: Grouper,
    filter: Filter,
    paused: bool,
    connection: ConnectionStatus,
    source_name: Option<String>,
    dropped: u64,
    rejected: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            ledger: Vec::new(),
            pending: VecDeque::new(),
            pending_limit: settings.pending_limit.filter(|limit| *limit > 0),
            grouper: Grouper::new(settings.grouping_enabled),
            filter: Filter::new(settings.search, settings.severity),
            paused: false,
            connection: ConnectionStatus::new(),
            source_name: None,
            dropped: 0,
            rejected: 0,
        }
    }
}

//-----------------------------------------------------------------------------
// Transport input
//-----------------------------------------------------------------------------

impl Session {
    /// Decode and apply one text frame. Malformed frames are counted,
    /// logged and otherwise ignored.
    pub fn receive(&mut self, text: &str) -> Result<Ingested, WireError> {
        let message = self.decode(text)?;
        Ok(self.apply(message))
    }

    /// Decode one text frame without applying it. Failures are counted and
    /// logged as in [`Session::receive`].
    pub fn decode(&mut self, text: &str) -> Result<WireMessage, WireError> {
        match decode(text) {
            Ok(message) => Ok(message),
            Err(err) => {
                self.rejected += 1;
                let preview: String = text.chars().take(REJECTED_PREVIEW_CHARS).collect();
                tracing::warn!(error = %err, frame = %preview, "dropping malformed wire message");
                Err(err)
            }
        }
    }

    pub fn apply(&mut self, message: WireMessage) -> Ingested {
        match message {
            WireMessage::Snapshot {
                events,
                source_name,
            } => {
                if source_name.is_some() {
                    self.source_name = source_name;
                }
                self.load_snapshot(events)
            }
            WireMessage::Event { event } => self.push_event(event),
        }
    }

    /// Replace the ledger wholesale. Events buffered by a pause are kept.
    pub fn load_snapshot(&mut self, events: Vec<RawEvent>) -> Ingested {
        let count = events.len();
        self.ledger = events;
        self.grouper.reset();
        self.grouper.catch_up(&self.ledger);

        tracing::debug!(
            events = count,
            entries = self.grouper.entries().len(),
            "snapshot loaded"
        );
        Ingested::Replaced(count)
    }

    pub fn push_event(&mut self, event: RawEvent) -> Ingested {
        if self.paused {
            self.buffer(event);
            return Ingested::Buffered;
        }

        self.ledger.push(event);
        let start = self.ledger.len() - 1;
        let placement = self.grouper.push(&self.ledger[start]);
        Ingested::Appended(placement)
    }

    fn buffer(&mut self, event: RawEvent) {
        if let Some(limit) = self.pending_limit {
            while self.pending.len() >= limit {
                self.pending.pop_front();
                self.dropped += 1;
                tracing::warn!(limit, dropped = self.dropped, "pause buffer full, dropping oldest event");
            }
        }
        self.pending.push_back(event);
    }

    pub fn on_connecting(&mut self) -> Option<ConnectionState> {
        self.connection.on_connecting()
    }

    pub fn on_connected(&mut self) -> Option<ConnectionState> {
        self.connection.on_open()
    }

    /// Connection closed or errored. State only; buffered data is untouched.
    pub fn on_disconnected(&mut self) -> Option<ConnectionState> {
        self.connection.on_lost()
    }
}

//-----------------------------------------------------------------------------
// User operations
//-----------------------------------------------------------------------------

impl Session {
    /// Stop routing events to the ledger. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        tracing::debug!("stream paused");
        true
    }

    /// Append everything buffered while paused, in arrival order, and group it.
    /// Returns the number of events drained.
    pub fn resume(&mut self) -> usize {
        if !self.paused {
            return 0;
        }
        self.paused = false;

        let drained = self.pending.len();
        self.ledger.extend(self.pending.drain(..));
        self.grouper.catch_up(&self.ledger);

        tracing::debug!(drained, entries = self.grouper.entries().len(), "stream resumed");
        drained
    }

    /// Full reset of data and query state. Pause and grouping mode are kept.
    pub fn clear(&mut self) {
        self.ledger.clear();
        self.pending.clear();
        self.grouper.reset();
        self.filter = Filter::default();
        tracing::debug!("session cleared");
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn set_severity_filter(&mut self, severity: Option<Severity>) {
        self.filter.set_severity(severity);
    }

    /// Switching mode regroups the whole ledger from scratch.
    pub fn set_grouping_enabled(&mut self, enabled: bool) {
        if self.grouper.grouping_enabled() == enabled {
            return;
        }
        self.grouper.regroup(&self.ledger, enabled);
        tracing::debug!(
            grouping = enabled,
            entries = self.grouper.entries().len(),
            "ledger regrouped"
        );
    }
}

//-----------------------------------------------------------------------------
// Read access
//-----------------------------------------------------------------------------

impl Session {
    pub fn ledger(&self) -> &[RawEvent] {
        &self.ledger
    }

    pub fn pending(&self) -> impl ExactSizeIterator<Item = &RawEvent> {
        self.pending.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn entries(&self) -> &[Arc<LogicalEntry>] {
        self.grouper.entries()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        self.filter.query()
    }

    pub fn severity_filter(&self) -> Option<Severity> {
        self.filter.severity()
    }

    pub fn grouping_enabled(&self) -> bool {
        self.grouper.grouping_enabled()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn connection(&self) -> &ConnectionStatus {
        &self.connection
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Last path segment of the source name, e.g. `app.log` for `/var/log/app.log`.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.source_name.as_deref()?;
        match name.rsplit('/').next() {
            Some(last) if !last.is_empty() => Some(last),
            _ => Some(name),
        }
    }

    /// Events discarded because the pause buffer was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Wire messages rejected as malformed.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Everything presentation needs for one render.
    pub fn view(&self) -> View {
        let (entries, counts) = self.filter.apply(self.entries());

        View {
            entries: entries.into_iter().cloned().collect(),
            counts,
            total: self.entries().len(),
            pending: self.pending.len(),
            paused: self.paused,
            grouping_enabled: self.grouping_enabled(),
            search: self.filter.query().to_string(),
            severity: self.filter.severity(),
            connection: self.connection.state(),
            loading: self.connection.is_loading(),
            source_name: self.source_name.clone(),
            dropped: self.dropped,
            rejected: self.rejected,
        }
    }
}
