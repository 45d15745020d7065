//! Application configuration
//!
//! Runtime settings for embedders and the CLI: logging and the location of
//! the topology document. Loaded from defaults, an optional TOML file, and
//! `CACHEWIRE_*` environment variables.

pub mod data;
pub mod loader;

pub use data::{AppConfig, LoggingConfig, TopologyConfig};
pub use loader::{ConfigBuilder, ConfigLoader};
