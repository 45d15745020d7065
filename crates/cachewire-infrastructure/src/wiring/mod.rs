//! Topology-to-wiring translation
//!
//! Turns a parsed [`CacheTopology`](cachewire_domain::topology::CacheTopology)
//! into a [`WiringPlan`](cachewire_domain::wiring::WiringPlan) for the
//! consuming container. The translator is a single-pass, stateless
//! transform; the scope registry and client resolution policy come in as
//! explicit collaborators.

pub mod registry;
pub mod resolver;
pub mod translator;

pub use registry::{ensure_resource_id_resolver, InMemoryWiringRegistry};
pub use resolver::ConventionalClientRefResolver;
pub use translator::{CacheManagerTranslator, TranslationOutcome};
