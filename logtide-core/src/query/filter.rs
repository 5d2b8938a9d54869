use crate::model::{LogicalEntry, Severity};
use crate::query::SeverityCounts;
use std::sync::Arc;

/// Search text plus an optional severity selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    query: String,
    // Lowercased once; matching is case-insensitive.
    needle: String,
    severity: Option<Severity>,
}

impl Filter {
    pub fn new(query: impl Into<String>, severity: Option<Severity>) -> Self {
        let query = query.into();
        Self {
            needle: query.to_lowercase(),
            query,
            severity,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        *self = Self::new(query, self.severity);
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.severity = severity;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.severity.is_some()
    }

    /// Case-insensitive substring match on header and continuations.
    pub fn matches_text(&self, entry: &LogicalEntry) -> bool {
        self.needle.is_empty() || entry.search_text().to_lowercase().contains(&self.needle)
    }

    pub fn matches_severity(&self, severity: Severity) -> bool {
        self.severity.is_none_or(|selected| selected == severity)
    }

    pub fn matches(&self, entry: &LogicalEntry) -> bool {
        self.matches_text(entry) && self.matches_severity(entry.severity())
    }

    /// Visible entries and the severity counts of the text-filtered set.
    ///
    /// Counts are taken before the severity selection is applied, so they
    /// describe what the search found.
    pub fn apply<'a>(
        &self,
        entries: &'a [Arc<LogicalEntry>],
    ) -> (Vec<&'a Arc<LogicalEntry>>, SeverityCounts) {
        let mut counts = SeverityCounts::default();
        let mut shown = Vec::new();

        for entry in entries.iter().filter(|e| self.matches_text(e)) {
            let severity = entry.severity();
            counts.record(severity);
            if self.matches_severity(severity) {
                shown.push(entry);
            }
        }

        (shown, counts)
    }
}

/// Filter `entries` by free text and severity. Recomputed from scratch each call.
pub fn visible<'a>(
    entries: &'a [Arc<LogicalEntry>],
    query: &str,
    severity: Option<Severity>,
) -> (Vec<&'a Arc<LogicalEntry>>, SeverityCounts) {
    Filter::new(query, severity).apply(entries)
}
