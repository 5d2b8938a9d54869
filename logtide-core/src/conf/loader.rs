use crate::conf::types::{LogtideConfig, ValidatedConfig};
use crate::conf::ConfigError;
use crate::logging::LogFormat;
use crate::model::Severity;
use crate::stream::SessionSettings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "logtide.hcl";

/// Explicit path if given, otherwise `logtide.hcl` in the working directory
/// when it exists.
pub fn discover_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &text)?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate(path, config)
}

pub fn parse_config(path: &Path, text: &str) -> Result<LogtideConfig, ConfigError> {
    hcl::from_str(text).map_err(|e| ConfigError::parse(path, e))
}

fn validate(path: &Path, config: LogtideConfig) -> Result<ValidatedConfig, ConfigError> {
    let LogtideConfig { viewer, logging } = config;

    let severity = viewer
        .level
        .as_deref()
        .map(str::parse::<Severity>)
        .transpose()
        .map_err(|source| ConfigError::InvalidSeverity {
            path: path.to_path_buf(),
            source,
        })?;

    let log_format = logging
        .format
        .as_deref()
        .map(str::parse::<LogFormat>)
        .transpose()
        .map_err(|value| ConfigError::InvalidLogFormat {
            path: path.to_path_buf(),
            value,
        })?;

    if EnvFilter::try_new(&logging.level).is_err() {
        return Err(ConfigError::InvalidLogLevel {
            path: path.to_path_buf(),
            value: logging.level,
        });
    }

    Ok(ValidatedConfig {
        session: SessionSettings {
            grouping_enabled: viewer.grouping,
            search: viewer.search,
            severity,
            pending_limit: (viewer.pending_limit > 0).then_some(viewer.pending_limit),
        },
        log_level: logging.level,
        log_format,
    })
}
