use crate::model::LogicalEntry;
use crate::stream::Session;
use std::sync::Arc;

/// Tracks which entries have already been written in streaming output.
///
/// With grouping on, the last entry may still receive continuations, so it
/// is held back until another entry opens or the input ends.
#[derive(Debug, Default)]
pub struct EntryEmitter {
    emitted: usize,
}

impl EntryEmitter {
    /// Entries that became final since the previous call.
    pub fn closed<'a>(&mut self, session: &'a Session) -> &'a [Arc<LogicalEntry>] {
        let entries = session.entries();
        let end = if session.grouping_enabled() {
            entries.len().saturating_sub(1)
        } else {
            entries.len()
        };
        self.take(entries, end)
    }

    /// Everything not yet written, including the open entry.
    pub fn finish<'a>(&mut self, session: &'a Session) -> &'a [Arc<LogicalEntry>] {
        let entries = session.entries();
        self.take(entries, entries.len())
    }

    /// Start over after the ledger was replaced.
    pub fn reset(&mut self) {
        self.emitted = 0;
    }

    fn take<'a>(
        &mut self,
        entries: &'a [Arc<LogicalEntry>],
        end: usize,
    ) -> &'a [Arc<LogicalEntry>] {
        let start = self.emitted.min(end);
        self.emitted = self.emitted.max(end);
        &entries[start..end]
    }
}
