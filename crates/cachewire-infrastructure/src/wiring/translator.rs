//! Cache-manager translator
//!
//! Walks the topology document in order and emits one wiring entry per
//! cache element, then assembles the top-level cache-manager directive.
//! Validation failures are recorded as node-anchored diagnostics; the walk
//! continues past a bad node so one pass reports every problem, but any
//! diagnostic is fatal to the overall configuration load.

use tracing::{debug, info};

use cachewire_domain::constants::{
    CACHES_PROPERTY, CACHE_MANAGER_BEAN_NAME, ELASTICACHE_CLIENT_CATEGORY,
    ELASTICACHE_CLIENT_FACTORY, ELASTICACHE_MEMCACHED_CLIENT_FACTORY, EXPIRATION_PROPERTY,
    NAMED_MEMCACHED_CACHE_FACTORY, SIMPLE_CACHE_MANAGER_FACTORY, STATIC_MEMCACHED_CLIENT_FACTORY,
};
use cachewire_domain::diagnostics::{self, Diagnostic, DiagnosticKind};
use cachewire_domain::error::Result;
use cachewire_domain::ports::{ClientRefResolver, WiringRegistry};
use cachewire_domain::topology::{CacheNodeKind, CacheTopology, NodeLocation};
use cachewire_domain::wiring::{BeanRef, WiringDirective, WiringPlan, WiringValue};

use crate::wiring::registry::ensure_resource_id_resolver;
use crate::wiring::resolver::ConventionalClientRefResolver;

/// Result of one translation pass
///
/// The plan is returned even when diagnostics were collected, so tooling
/// can show what would have been wired; the error channel is
/// authoritative. Use [`TranslationOutcome::into_result`] when partial
/// output is of no use.
#[derive(Debug)]
pub struct TranslationOutcome {
    /// The assembled (possibly partial) wiring plan
    pub plan: WiringPlan,
    /// Validation failures collected during the pass
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslationOutcome {
    /// Whether the pass completed without validation failures
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Collapse the outcome into the plan or an aggregated fatal error
    pub fn into_result(self) -> Result<WiringPlan> {
        match diagnostics::aggregate(&self.diagnostics) {
            None => Ok(self.plan),
            Some(error) => Err(error),
        }
    }
}

/// Translator from a cache topology document to a wiring plan
///
/// Stateless across calls; the wiring scope is handed in per invocation
/// and used as a write-once guard for the single cache-manager invariant.
pub struct CacheManagerTranslator {
    client_resolver: Box<dyn ClientRefResolver>,
}

impl CacheManagerTranslator {
    /// Create a translator with the conventional client resolution policy
    pub fn new() -> Self {
        Self {
            client_resolver: Box::new(ConventionalClientRefResolver::new()),
        }
    }

    /// Create a translator with a custom client resolution policy
    pub fn with_client_resolver(client_resolver: Box<dyn ClientRefResolver>) -> Self {
        Self { client_resolver }
    }

    /// Translate the document into a wiring plan
    ///
    /// Processes children in document order, preserving that order in the
    /// emitted cache list. Registers the assembled manager directive in the
    /// scope under the conventional bean name unless one is already
    /// present, in which case a duplicate-manager diagnostic is raised
    /// against the document root and the existing registration is left
    /// untouched.
    pub fn translate(
        &self,
        topology: &CacheTopology,
        scope: &mut dyn WiringRegistry,
    ) -> TranslationOutcome {
        let mut diagnostics = Vec::new();
        let mut caches: Vec<WiringValue> = Vec::with_capacity(topology.len());

        for node in topology.iter() {
            match &node.kind {
                CacheNodeKind::Ref { cache_ref } => {
                    if let Some(name) = required_attribute(
                        cache_ref.as_deref(),
                        "ref",
                        &node.location,
                        &mut diagnostics,
                    ) {
                        debug!(cache = %name, "pass-through cache reference");
                        caches.push(WiringValue::Reference(BeanRef::new(name)));
                    }
                }
                CacheNodeKind::Cluster {
                    name,
                    expiration,
                    client_ref,
                } => {
                    let Some(cluster_id) = required_attribute(
                        name.as_deref(),
                        "name",
                        &node.location,
                        &mut diagnostics,
                    ) else {
                        continue;
                    };
                    let client = self.client_resolver.resolve(
                        scope,
                        client_ref.as_deref(),
                        ELASTICACHE_CLIENT_CATEGORY,
                        ELASTICACHE_CLIENT_FACTORY,
                    );
                    let resolver_ref = ensure_resource_id_resolver(scope);
                    let factory = WiringDirective::new(ELASTICACHE_MEMCACHED_CLIENT_FACTORY)
                        .with_constructor_ref(client)
                        .with_constructor_arg(WiringValue::String(cluster_id.clone()))
                        .with_constructor_ref(resolver_ref);
                    debug!(cache = %cluster_id, "managed-cluster cache entry");
                    caches.push(named_cache_entry(&cluster_id, factory, *expiration));
                }
                CacheNodeKind::Address {
                    name,
                    address,
                    expiration,
                } => {
                    let name = required_attribute(
                        name.as_deref(),
                        "name",
                        &node.location,
                        &mut diagnostics,
                    );
                    let address = required_attribute(
                        address.as_deref(),
                        "address",
                        &node.location,
                        &mut diagnostics,
                    );
                    let (Some(name), Some(address)) = (name, address) else {
                        continue;
                    };
                    let factory = WiringDirective::new(STATIC_MEMCACHED_CLIENT_FACTORY)
                        .with_constructor_arg(WiringValue::String(address));
                    debug!(cache = %name, "direct-address cache entry");
                    caches.push(named_cache_entry(&name, factory, *expiration));
                }
                CacheNodeKind::Unknown { kind } => {
                    diagnostics.push(Diagnostic::at_node(
                        DiagnosticKind::UnknownElementKind { kind: kind.clone() },
                        node.location.clone(),
                    ));
                }
            }
        }

        let manager = WiringDirective::new(SIMPLE_CACHE_MANAGER_FACTORY)
            .with_property(CACHES_PROPERTY, WiringValue::List(caches));

        if scope.contains(CACHE_MANAGER_BEAN_NAME) {
            diagnostics.push(Diagnostic::at_root(DiagnosticKind::DuplicateCacheManager));
        } else {
            scope.register(CACHE_MANAGER_BEAN_NAME, manager.clone());
        }

        let plan = WiringPlan::new(manager);
        info!(
            caches = plan.caches().len(),
            diagnostics = diagnostics.len(),
            "translated cache topology"
        );
        TranslationOutcome { plan, diagnostics }
    }
}

impl Default for CacheManagerTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a required attribute, recording a diagnostic when absent
///
/// A value that is empty or whitespace-only counts as missing. Returns
/// `None` after recording the diagnostic; callers drop the entry rather
/// than building a partially valid directive.
fn required_attribute(
    value: Option<&str>,
    attribute: &str,
    location: &NodeLocation,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        _ => {
            diagnostics.push(Diagnostic::at_node(
                DiagnosticKind::MissingRequiredAttribute {
                    attribute: attribute.to_string(),
                },
                location.clone(),
            ));
            None
        }
    }
}

/// Wrap a client directive in a named composite cache entry
///
/// Constructor args are (client definition, cache name); the expiration
/// property is set iff the attribute was present.
fn named_cache_entry(
    name: &str,
    client: WiringDirective,
    expiration: Option<u64>,
) -> WiringValue {
    let mut directive = WiringDirective::new(NAMED_MEMCACHED_CACHE_FACTORY)
        .with_constructor_arg(WiringValue::Definition(Box::new(client)))
        .with_constructor_arg(WiringValue::String(name.to_string()));
    if let Some(seconds) = expiration {
        directive = directive.with_property(EXPIRATION_PROPERTY, WiringValue::Integer(seconds));
    }
    WiringValue::Definition(Box::new(directive))
}
