//! Infrastructure layer for cachewire
//!
//! Cross-cutting technical concerns around the domain model: parsing the
//! topology document, translating it into a wiring plan, loading the
//! application configuration, and structured logging.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`topology`] | TOML topology document parsing with node spans |
//! | [`wiring`] | Topology-to-wiring-plan translation and scope registry |
//! | [`config`] | Application configuration loading and validation |
//! | [`logging`] | Structured logging setup with tracing |
//! | [`error_ext`] | Context extension methods for domain errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod topology;
pub mod wiring;
