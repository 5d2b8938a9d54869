use once_cell::sync::Lazy;
use regex::Regex;

/// Marker prepended to status lines the collector itself emits.
pub const PRODUCT_PREFIX: &str = "[logtide]";

// Date and time portion shared by the header shapes. ASCII digits only.
const TIMESTAMP: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}:[0-9]{2}(?:[.,][0-9]+)?";

// Optional `Z` or numeric offset after the time.
const ZONE: &str = r"(?:Z|[+-][0-9]{2}:?[0-9]{2})?";

static BRACKETED_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\[{TIMESTAMP}{ZONE}\]")).expect("valid regex"));

static BARE_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{TIMESTAMP}{ZONE}")).expect("valid regex"));

// `}`, `]`, `)`, `"}`, `"]`, `"}"` optionally followed by `,` or `;`
static CLOSING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\s"'\]\)\}]+[,;]?\s*$"#).expect("valid regex"));

static NUMBERED_FRAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9]+\s+").expect("valid regex"));

static AT_FRAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^at\s+\S+").expect("valid regex"));

static STACK_TRACE_BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"\[stacktrace\]\s*$",
        r"|stack\s+trace:?",
        r"|traceback\s+\(most\s+recent\s+call\s+last\):",
        r")",
    ))
    .expect("valid regex")
});

static EXCEPTION_CHAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:caused by:|during handling of the above exception)").expect("valid regex")
});

static RUNTIME_PANIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:goroutine\s+[0-9]+\s+\[.*\]:|panic:\s+)").expect("valid regex")
});

/// Shapes that force a line to open a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    ProductPrefix,
    BracketedTimestamp,
    BareTimestamp,
}

impl HeaderRule {
    pub const ALL: [HeaderRule; 3] = [
        HeaderRule::ProductPrefix,
        HeaderRule::BracketedTimestamp,
        HeaderRule::BareTimestamp,
    ];

    /// Rules are matched against the line with leading whitespace removed.
    pub fn matches(self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self {
            HeaderRule::ProductPrefix => trimmed.starts_with(PRODUCT_PREFIX),
            HeaderRule::BracketedTimestamp => BRACKETED_TIMESTAMP.is_match(trimmed),
            HeaderRule::BareTimestamp => BARE_TIMESTAMP.is_match(trimmed),
        }
    }
}

/// Shapes that mark a line as belonging to the entry before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationRule {
    ClosingPunctuation,
    Indented,
    NumberedFrame,
    AtFrame,
    StackTraceBanner,
    ExceptionChain,
    RuntimePanic,
}

impl ContinuationRule {
    pub const ALL: [ContinuationRule; 7] = [
        ContinuationRule::ClosingPunctuation,
        ContinuationRule::Indented,
        ContinuationRule::NumberedFrame,
        ContinuationRule::AtFrame,
        ContinuationRule::StackTraceBanner,
        ContinuationRule::ExceptionChain,
        ContinuationRule::RuntimePanic,
    ];

    pub fn matches(self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self {
            // Whole line, including its leading whitespace.
            ContinuationRule::ClosingPunctuation => CLOSING_PUNCTUATION.is_match(line),
            ContinuationRule::Indented => line.starts_with(char::is_whitespace),
            ContinuationRule::NumberedFrame => NUMBERED_FRAME.is_match(trimmed),
            ContinuationRule::AtFrame => AT_FRAME.is_match(trimmed),
            ContinuationRule::StackTraceBanner => STACK_TRACE_BANNER.is_match(trimmed),
            ContinuationRule::ExceptionChain => EXCEPTION_CHAIN.is_match(trimmed),
            ContinuationRule::RuntimePanic => RUNTIME_PANIC.is_match(trimmed),
        }
    }
}

/// First header rule matching `line`, if any.
pub fn header_rule(line: &str) -> Option<HeaderRule> {
    HeaderRule::ALL.into_iter().find(|rule| rule.matches(line))
}

/// First continuation rule matching `line`, if any. Empty lines never continue.
pub fn continuation_rule(line: &str) -> Option<ContinuationRule> {
    if line.is_empty() {
        return None;
    }
    ContinuationRule::ALL.into_iter().find(|rule| rule.matches(line))
}

pub fn is_new_entry_start(line: &str) -> bool {
    header_rule(line).is_some()
}

pub fn is_continuation(line: &str) -> bool {
    continuation_rule(line).is_some()
}
