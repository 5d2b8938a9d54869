use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse classification tag derived from the text of a log line.
///
/// Never stored as truth: it is always recomputed from an entry header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
    Success,
    Default,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Success,
        Severity::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Success => "success",
            Severity::Default => "default",
        }
    }

    /// Position in [`Severity::ALL`], used as a dense array index.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{value}' (expected one of: error, warning, info, debug, success, default)")]
pub struct UnknownSeverity {
    pub value: String,
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "success" => Ok(Severity::Success),
            "default" => Ok(Severity::Default),
            _ => Err(UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}
