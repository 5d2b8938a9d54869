use crate::classify::{is_continuation, is_new_entry_start};
use crate::model::{LogicalEntry, RawEvent};
use std::ops::Range;
use std::sync::Arc;

/// Decide whether `line` opens a new entry.
///
/// The only state consulted is whether an entry is currently open.
pub fn starts_new_entry(line: &str, grouping_enabled: bool, has_open_entry: bool) -> bool {
    !grouping_enabled || is_new_entry_start(line) || !has_open_entry || !is_continuation(line)
}

/// Group an ordered slice of raw events in a single pass.
pub fn group(events: &[RawEvent], grouping_enabled: bool) -> Vec<Arc<LogicalEntry>> {
    let mut grouper = Grouper::new(grouping_enabled);
    grouper.extend(events);
    grouper.into_entries()
}

/// Where a raw event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The event opened the entry at this index.
    Opened(usize),
    /// The event was appended to the continuations of the entry at this index.
    Continued(usize),
}

impl Placement {
    pub fn entry_index(self) -> usize {
        match self {
            Placement::Opened(i) | Placement::Continued(i) => i,
        }
    }
}

/// Incremental grouping state over an append-only ledger.
///
/// Entries live in a growable array; the last one is the open entry.
/// Closed entries are shared with published views and never copied again.
/// `consumed` marks how many ledger events have been folded in, so appending
/// `k` events only costs `k` decisions. Changing the grouping mode discards
/// everything and replays from the start.
#[derive(Debug, Clone, Default)]
pub struct Grouper {
    grouping_enabled: bool,
    entries: Vec<Arc<LogicalEntry>>,
    consumed: usize,
    next_seq: u64,
}

impl Grouper {
    pub fn new(grouping_enabled: bool) -> Self {
        Self {
            grouping_enabled,
            ..Self::default()
        }
    }

    pub fn grouping_enabled(&self) -> bool {
        self.grouping_enabled
    }

    pub fn entries(&self) -> &[Arc<LogicalEntry>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Arc<LogicalEntry>> {
        self.entries
    }

    /// Number of raw events folded into the entries so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Fold one event into the entries.
    pub fn push(&mut self, event: &RawEvent) -> Placement {
        self.consumed += 1;

        let has_open_entry = !self.entries.is_empty();
        if starts_new_entry(&event.text, self.grouping_enabled, has_open_entry) {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.entries.push(Arc::new(LogicalEntry::open(event, seq)));
            return Placement::Opened(self.entries.len() - 1);
        }

        let index = self.entries.len() - 1;
        // Copies the open entry only if a published view still holds it.
        Arc::make_mut(&mut self.entries[index])
            .continuations
            .push(event.text.clone());
        Placement::Continued(index)
    }

    pub fn extend<'a>(&mut self, events: impl IntoIterator<Item = &'a RawEvent>) {
        for event in events {
            self.push(event);
        }
    }

    /// Fold the unconsumed suffix of `ledger` and return the indices of
    /// entries that were opened or grew.
    ///
    /// `ledger` must be the same sequence previously folded, extended at the end.
    pub fn catch_up(&mut self, ledger: &[RawEvent]) -> Range<usize> {
        let start = self.consumed.min(ledger.len());
        let mut touched_from = self.entries.len();

        for event in &ledger[start..] {
            let index = self.push(event).entry_index();
            touched_from = touched_from.min(index);
        }

        touched_from..self.entries.len()
    }

    /// Rebuild all entries from `ledger` in the given mode.
    pub fn regroup(&mut self, ledger: &[RawEvent], grouping_enabled: bool) {
        self.grouping_enabled = grouping_enabled;
        self.reset();
        self.extend(ledger);
    }

    /// Drop all entries and the ledger cursor, keeping the mode.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.consumed = 0;
        self.next_seq = 0;
    }
}
