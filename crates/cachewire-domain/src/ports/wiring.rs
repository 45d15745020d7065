//! Wiring container ports

use crate::wiring::{BeanRef, WiringDirective};

/// The configuration-scope registry of wiring directives
///
/// Owned by the consuming container and passed to the translator per call.
/// The translator uses it as a write-once guard: it checks for an existing
/// cache-manager registration before adding its own and never overwrites a
/// name that is already present.
pub trait WiringRegistry {
    /// Whether a directive is registered under `bean_name`
    fn contains(&self, bean_name: &str) -> bool;

    /// Register a directive under `bean_name`
    ///
    /// Callers guard with [`WiringRegistry::contains`] where overwriting
    /// would violate an invariant; the registry itself does not police
    /// duplicates.
    fn register(&mut self, bean_name: &str, directive: WiringDirective);

    /// Look up the directive registered under `bean_name`
    fn get(&self, bean_name: &str) -> Option<&WiringDirective>;

    /// All registered bean names, sorted
    fn bean_names(&self) -> Vec<String>;
}

/// Resolution policy for control-plane client references
///
/// Given an optional customization attribute, a category name, and the
/// default implementation identifier, returns the bean reference the
/// generated client factory should receive. Implementations may register
/// the default client in the scope on first use.
pub trait ClientRefResolver {
    /// Resolve the client bean to wire for one cache entry
    fn resolve(
        &self,
        scope: &mut dyn WiringRegistry,
        custom_ref: Option<&str>,
        category: &str,
        default_impl: &str,
    ) -> BeanRef;
}
