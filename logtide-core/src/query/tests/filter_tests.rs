use crate::grouping::group;
use crate::model::{LogicalEntry, RawEvent, Severity, SourceKind, StreamKind};
use crate::query::{Filter, SeverityCounts, visible};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// Helper: scenario entries with grouping on
fn scenario_entries() -> Vec<Arc<LogicalEntry>> {
    let ledger: Vec<RawEvent> = [
        "[2024-01-01 00:00:00] ERROR boom",
        "    at foo.js:10",
        "  }",
        "[2024-01-01 00:00:01] INFO ok",
        "[2024-01-01 00:00:02] WARN slow query",
        "[2024-01-01 00:00:03] ERROR disk",
    ]
    .iter()
    .map(|line| RawEvent::new("t", SourceKind::File, StreamKind::Unknown, *line))
    .collect();

    group(&ledger, true)
}

fn headers(entries: &[&Arc<LogicalEntry>]) -> Vec<String> {
    entries.iter().map(|e| e.header.clone()).collect()
}

#[test]
fn empty_query_matches_everything() {
    let entries = scenario_entries();

    let (shown, counts) = visible(&entries, "", None);

    assert_eq!(shown.len(), entries.len());
    assert_eq!(counts.get(Severity::Error), 2);
    assert_eq!(counts.get(Severity::Info), 1);
    assert_eq!(counts.get(Severity::Warning), 1);
    assert_eq!(counts.total(), entries.len());
}

#[test]
fn search_is_case_insensitive_substring() {
    let entries = scenario_entries();

    let (shown, counts) = visible(&entries, "BoOm", None);

    assert_eq!(headers(&shown), vec!["[2024-01-01 00:00:00] ERROR boom"]);
    assert_eq!(counts.get(Severity::Error), 1);
    assert_eq!(counts.get(Severity::Info), 0);
}

#[test]
fn search_reaches_into_continuations() {
    let entries = scenario_entries();

    let (shown, _) = visible(&entries, "foo.js", None);

    assert_eq!(shown.len(), 1);
    assert!(shown[0].is_grouped());
}

#[test]
fn severity_filter_selects_exact_severity() {
    let entries = scenario_entries();

    let (shown, _) = visible(&entries, "", Some(Severity::Error));

    assert_eq!(
        headers(&shown),
        vec![
            "[2024-01-01 00:00:00] ERROR boom",
            "[2024-01-01 00:00:03] ERROR disk",
        ]
    );
}

#[test]
fn counts_ignore_the_severity_filter() {
    // Arrange
    let entries = scenario_entries();
    let filter = Filter::new("2024", Some(Severity::Warning));

    // Act
    let (shown, counts) = filter.apply(&entries);

    // Assert
    assert_eq!(shown.len(), 1);
    let expected: SeverityCounts = [
        Severity::Error,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ]
    .into_iter()
    .collect();
    assert_eq!(counts, expected);
}

#[test]
fn no_match_yields_zero_counts() {
    let entries = scenario_entries();

    let (shown, counts) = visible(&entries, "nothing like this", Some(Severity::Error));

    assert!(shown.is_empty());
    assert_eq!(counts, SeverityCounts::default());
}

#[test]
fn filter_setters_keep_the_other_half() {
    let mut filter = Filter::new("boom", None);
    assert!(filter.is_active());

    filter.set_severity(Some(Severity::Error));
    filter.set_query("");

    assert_eq!(filter.query(), "");
    assert_eq!(filter.severity(), Some(Severity::Error));
    assert!(filter.is_active());

    filter.set_severity(None);
    assert!(!filter.is_active());
}

#[test]
fn counts_serialize_as_a_map() {
    let counts: SeverityCounts = [Severity::Error, Severity::Error, Severity::Debug]
        .into_iter()
        .collect();

    let json = serde_json::to_value(counts).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "error": 2, "warning": 0, "info": 0,
            "debug": 1, "success": 0, "default": 0
        })
    );
}
