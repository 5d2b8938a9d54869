use crate::model::UnknownSeverity;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Viewer
    //-------------------------------------------------------------------------
    #[error("invalid viewer.level in {path}: {source}")]
    InvalidSeverity {
        path: PathBuf,
        #[source]
        source: UnknownSeverity,
    },

    //-------------------------------------------------------------------------
    // Logging
    //-------------------------------------------------------------------------
    #[error("invalid logging.format '{value}' in {path}")]
    InvalidLogFormat { path: PathBuf, value: String },

    #[error("invalid logging.level '{value}' in {path}")]
    InvalidLogLevel { path: PathBuf, value: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidSeverity { .. } => Some(
            "viewer.level selects the initial severity filter.\n\
             \n\
             Use one of: error, warning, info, debug, success, default.\n\
             \n\
             viewer {\n  level = \"error\"\n}",
        ),

        ConfigError::InvalidLogFormat { .. } => Some(
            "logging.format controls diagnostic output on stderr.\n\
             \n\
             Use \"pretty\" for terminals or \"json\" for log shippers.",
        ),

        ConfigError::InvalidLogLevel { .. } => Some(
            "logging.level accepts a tracing filter directive.\n\
             \n\
             Examples: \"info\", \"debug\", \"logtide_core=trace,warn\".",
        ),

        ConfigError::Parse { .. } => Some(
            "The config file must be valid HCL.\n\
             \n\
             Example:\n\
             \n\
             viewer {\n  grouping = true\n}\n\
             logging {\n  level = \"info\"\n}",
        ),

        ConfigError::ReadFile { .. } => None,
    }
}
