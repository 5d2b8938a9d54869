use crate::model::Severity;

/// A set of case-insensitive substrings that map a line to a severity.
#[derive(Debug, Clone, Copy)]
pub struct SeverityRule {
    pub needles: &'static [&'static str],
    pub severity: Severity,
}

impl SeverityRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle))
    }
}

/// Evaluated in order; the first rule with a matching needle wins.
pub const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        needles: &["error", "fatal", "exception"],
        severity: Severity::Error,
    },
    SeverityRule {
        needles: &["warning", "warn"],
        severity: Severity::Warning,
    },
    SeverityRule {
        needles: &["info", "information"],
        severity: Severity::Info,
    },
    SeverityRule {
        needles: &["debug"],
        severity: Severity::Debug,
    },
    SeverityRule {
        needles: &["success", "ok"],
        severity: Severity::Success,
    },
];

/// Classify a line by substring search. Total over every input.
pub fn classify(text: &str) -> Severity {
    let lowered = text.to_lowercase();

    SEVERITY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.severity)
        .unwrap_or(Severity::Default)
}
