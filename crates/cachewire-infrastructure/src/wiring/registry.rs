//! In-memory wiring registry
//!
//! The production registry belongs to the external container; this
//! implementation backs tests, the CLI, and any embedder without a
//! container of its own.

use std::collections::BTreeMap;

use tracing::debug;

use cachewire_domain::constants::{RESOURCE_ID_RESOLVER_BEAN_NAME, RESOURCE_ID_RESOLVER_FACTORY};
use cachewire_domain::ports::WiringRegistry;
use cachewire_domain::wiring::{BeanRef, WiringDirective};

/// Map-backed implementation of [`WiringRegistry`]
#[derive(Debug, Default)]
pub struct InMemoryWiringRegistry {
    directives: BTreeMap<String, WiringDirective>,
}

impl InMemoryWiringRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered directives
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether the registry holds no directives
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl WiringRegistry for InMemoryWiringRegistry {
    fn contains(&self, bean_name: &str) -> bool {
        self.directives.contains_key(bean_name)
    }

    fn register(&mut self, bean_name: &str, directive: WiringDirective) {
        self.directives.insert(bean_name.to_string(), directive);
    }

    fn get(&self, bean_name: &str) -> Option<&WiringDirective> {
        self.directives.get(bean_name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.directives.keys().cloned().collect()
    }
}

/// Ensure the shared resource-id resolver is registered and return its
/// reference
///
/// Registers the default resolver directive under the well-known bean name
/// on first use; later calls return the same reference without touching
/// the scope. Managed-cluster client factories receive this reference as a
/// constructor argument.
pub fn ensure_resource_id_resolver(scope: &mut dyn WiringRegistry) -> BeanRef {
    if !scope.contains(RESOURCE_ID_RESOLVER_BEAN_NAME) {
        scope.register(
            RESOURCE_ID_RESOLVER_BEAN_NAME,
            WiringDirective::new(RESOURCE_ID_RESOLVER_FACTORY),
        );
        debug!(
            bean = RESOURCE_ID_RESOLVER_BEAN_NAME,
            "registered default resource-id resolver"
        );
    }
    BeanRef::new(RESOURCE_ID_RESOLVER_BEAN_NAME)
}
