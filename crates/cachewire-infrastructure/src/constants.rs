//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CACHEWIRE";

/// Environment variable consulted for the log filter
pub const LOG_FILTER_ENV: &str = "CACHEWIRE_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cachewire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cachewire";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
