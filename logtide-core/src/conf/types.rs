use crate::logging::LogFormat;
use crate::stream::SessionSettings;
use serde::{Deserialize, Serialize};

/// Root of `logtide.hcl`. Every block is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogtideConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Merge stack traces and other continuations into their header entry.
    #[serde(default)]
    pub grouping: bool,

    #[serde(default)]
    pub search: String,

    /// Initial severity filter.
    #[serde(default)]
    pub level: Option<String>,

    /// Maximum events held while paused; 0 keeps everything.
    #[serde(default)]
    pub pending_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `pretty`. Picked from the terminal when unset.
    #[serde(default)]
    pub format: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Config after every field has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub session: SessionSettings,
    pub log_level: String,
    pub log_format: Option<LogFormat>,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            log_level: default_log_level(),
            log_format: None,
        }
    }
}
