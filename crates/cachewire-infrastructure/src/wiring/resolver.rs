//! Client reference resolution
//!
//! A cache-cluster entry may name its own control-plane client through the
//! `custom-client-ref` attribute. When it does not, the conventional
//! resolver falls back to a default client bean shared across the
//! configuration namespace, registering its directive on first use.

use tracing::debug;

use cachewire_domain::ports::{ClientRefResolver, WiringRegistry};
use cachewire_domain::wiring::{BeanRef, WiringDirective};

/// Default resolution policy: customization attribute wins, otherwise the
/// conventional default client bean
#[derive(Debug, Default)]
pub struct ConventionalClientRefResolver;

impl ConventionalClientRefResolver {
    /// Create the conventional resolver
    pub fn new() -> Self {
        Self
    }
}

impl ClientRefResolver for ConventionalClientRefResolver {
    fn resolve(
        &self,
        scope: &mut dyn WiringRegistry,
        custom_ref: Option<&str>,
        category: &str,
        default_impl: &str,
    ) -> BeanRef {
        if let Some(custom) = custom_ref {
            if !custom.trim().is_empty() {
                return BeanRef::new(custom);
            }
        }

        let bean_name = conventional_bean_name(default_impl);
        if !scope.contains(&bean_name) {
            scope.register(&bean_name, WiringDirective::new(default_impl));
            debug!(category, bean = %bean_name, "registered default client");
        }
        BeanRef::new(bean_name)
    }
}

/// Conventional bean name for a default implementation identifier: the
/// simple name with its first letter lowercased
fn conventional_bean_name(default_impl: &str) -> String {
    let simple = default_impl.rsplit('.').next().unwrap_or(default_impl);
    let mut chars = simple.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
