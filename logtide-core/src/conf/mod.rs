mod error;
mod loader;
pub mod types;


pub use error::{ConfigError, config_error_hint};
pub use loader::{DEFAULT_CONFIG_FILE, discover_config, load_config, parse_config};
pub use types::{LoggingConfig, LogtideConfig, ValidatedConfig, ViewerConfig};
