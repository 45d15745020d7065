//! # cachewire
//!
//! A declarative cache-topology loader. cachewire reads a TOML document
//! describing named memcached-backed caches - statically addressed,
//! backed by a managed cache cluster, or references to externally wired
//! caches - and translates it into a container-agnostic wiring plan: one
//! directive per cache entry plus a single top-level cache-manager
//! directive assembling them in document order.
//!
//! cachewire does not talk to any cache. The actual client construction
//! and the get/put/evict surface belong to the container and client
//! libraries that interpret the plan.
//!
//! ## Example
//!
//! ```ignore
//! use cachewire::infrastructure::topology::parse_topology;
//! use cachewire::infrastructure::wiring::{CacheManagerTranslator, InMemoryWiringRegistry};
//!
//! let topology = parse_topology(r#"
//!     [[caches]]
//!     kind = "cache"
//!     name = "sessions"
//!     address = "localhost:11211"
//! "#)?;
//!
//! let mut scope = InMemoryWiringRegistry::new();
//! let plan = CacheManagerTranslator::new()
//!     .translate(&topology, &mut scope)
//!     .into_result()?;
//! # Ok::<(), cachewire::Error>(())
//! ```

pub mod cli;

/// Domain layer - topology model, wiring plan, diagnostics, ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cachewire_domain::*;
}

/// Infrastructure layer - parsing, translation, config, logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cachewire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
