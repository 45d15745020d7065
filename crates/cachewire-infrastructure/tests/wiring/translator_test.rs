//! Translator Tests
//!
//! Covers the document-order walk, required-attribute validation, the
//! single-cache-manager guard, and the shape of the emitted directives.

use cachewire_domain::constants::{
    CACHE_MANAGER_BEAN_NAME, DEFAULT_ELASTICACHE_CLIENT_BEAN,
    ELASTICACHE_MEMCACHED_CLIENT_FACTORY, EXPIRATION_PROPERTY, NAMED_MEMCACHED_CACHE_FACTORY,
    RESOURCE_ID_RESOLVER_BEAN_NAME, SIMPLE_CACHE_MANAGER_FACTORY,
    STATIC_MEMCACHED_CLIENT_FACTORY,
};
use cachewire_domain::diagnostics::DiagnosticKind;
use cachewire_domain::ports::WiringRegistry;
use cachewire_domain::topology::{CacheNode, CacheNodeKind, CacheTopology, NodeLocation};
use cachewire_domain::wiring::{BeanRef, WiringDirective, WiringValue};
use cachewire_infrastructure::wiring::{CacheManagerTranslator, InMemoryWiringRegistry};

fn node(index: usize, kind: CacheNodeKind) -> CacheNode {
    CacheNode::new(kind, NodeLocation::at_index(index))
}

fn address_node(index: usize, name: &str, address: &str, expiration: Option<u64>) -> CacheNode {
    node(
        index,
        CacheNodeKind::Address {
            name: Some(name.to_string()),
            address: Some(address.to_string()),
            expiration,
        },
    )
}

fn topology(nodes: Vec<CacheNode>) -> CacheTopology {
    CacheTopology { nodes }
}

#[test]
fn test_direct_address_cache_entry() {
    let topology = topology(vec![address_node(0, "sessions", "localhost:11211", Some(300))]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    let caches = outcome.plan.caches().to_vec();
    assert_eq!(caches.len(), 1);

    let cache = caches[0].as_definition().expect("named cache definition");
    assert_eq!(cache.factory, NAMED_MEMCACHED_CACHE_FACTORY);
    assert_eq!(
        cache.constructor_args[1],
        WiringValue::String("sessions".to_string())
    );
    assert_eq!(
        cache.property(EXPIRATION_PROPERTY),
        Some(&WiringValue::Integer(300))
    );

    let client = cache.constructor_args[0]
        .as_definition()
        .expect("client definition");
    assert_eq!(client.factory, STATIC_MEMCACHED_CLIENT_FACTORY);
    assert_eq!(
        client.constructor_args,
        vec![WiringValue::String("localhost:11211".to_string())]
    );
}

#[test]
fn test_expiration_absent_means_no_property() {
    let topology = topology(vec![address_node(0, "sessions", "localhost:11211", None)]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    let caches = outcome.plan.caches().to_vec();
    let cache = caches[0].as_definition().expect("named cache definition");
    assert!(cache.property(EXPIRATION_PROPERTY).is_none());
}

#[test]
fn test_cluster_cache_entry_wires_shared_collaborators() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Cluster {
            name: Some("session-cluster".to_string()),
            expiration: Some(120),
            client_ref: None,
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    let caches = outcome.plan.caches().to_vec();
    let cache = caches[0].as_definition().expect("named cache definition");
    assert_eq!(cache.factory, NAMED_MEMCACHED_CACHE_FACTORY);
    assert_eq!(
        cache.constructor_args[1],
        WiringValue::String("session-cluster".to_string())
    );
    assert_eq!(
        cache.property(EXPIRATION_PROPERTY),
        Some(&WiringValue::Integer(120))
    );

    let client = cache.constructor_args[0]
        .as_definition()
        .expect("client definition");
    assert_eq!(client.factory, ELASTICACHE_MEMCACHED_CLIENT_FACTORY);
    assert_eq!(
        client.constructor_args[0].as_reference().map(BeanRef::name),
        Some(DEFAULT_ELASTICACHE_CLIENT_BEAN)
    );
    assert_eq!(
        client.constructor_args[1],
        WiringValue::String("session-cluster".to_string())
    );
    assert_eq!(
        client.constructor_args[2].as_reference().map(BeanRef::name),
        Some(RESOURCE_ID_RESOLVER_BEAN_NAME)
    );

    // Shared collaborators land in the scope alongside the manager
    assert!(scope.contains(DEFAULT_ELASTICACHE_CLIENT_BEAN));
    assert!(scope.contains(RESOURCE_ID_RESOLVER_BEAN_NAME));
}

#[test]
fn test_cluster_honors_custom_client_ref() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Cluster {
            name: Some("session-cluster".to_string()),
            expiration: None,
            client_ref: Some("myElastiCacheClient".to_string()),
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    let caches = outcome.plan.caches().to_vec();
    let client = caches[0]
        .as_definition()
        .and_then(|cache| cache.constructor_args[0].as_definition())
        .expect("client definition");
    assert_eq!(
        client.constructor_args[0].as_reference().map(BeanRef::name),
        Some("myElastiCacheClient")
    );
    // No default client bean when the reference was customized
    assert!(!scope.contains(DEFAULT_ELASTICACHE_CLIENT_BEAN));
}

#[test]
fn test_cache_ref_passes_through_without_new_directive() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Ref {
            cache_ref: Some("preconfiguredCache".to_string()),
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    let caches = outcome.plan.caches().to_vec();
    assert_eq!(
        caches[0].as_reference().map(BeanRef::name),
        Some("preconfiguredCache")
    );
    // Only the manager itself was registered
    assert_eq!(scope.bean_names(), vec![CACHE_MANAGER_BEAN_NAME.to_string()]);
}

#[test]
fn test_manager_registered_under_conventional_name() {
    let topology = topology(vec![address_node(0, "sessions", "localhost:11211", None)]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    let manager = scope
        .get(CACHE_MANAGER_BEAN_NAME)
        .expect("manager registered");
    assert_eq!(manager.factory, SIMPLE_CACHE_MANAGER_FACTORY);
    assert_eq!(manager, &outcome.plan.cache_manager);
}

#[test]
fn test_second_manager_in_same_scope_is_rejected() {
    let first = topology(vec![address_node(0, "sessions", "localhost:11211", None)]);
    let second = topology(vec![address_node(0, "tokens", "localhost:11212", None)]);
    let mut scope = InMemoryWiringRegistry::new();
    let translator = CacheManagerTranslator::new();

    let first_outcome = translator.translate(&first, &mut scope);
    assert!(first_outcome.is_valid());

    let second_outcome = translator.translate(&second, &mut scope);
    assert_eq!(second_outcome.diagnostics.len(), 1);
    assert_eq!(
        second_outcome.diagnostics[0].kind,
        DiagnosticKind::DuplicateCacheManager
    );
    assert!(second_outcome.diagnostics[0].location.is_none());

    // The first registration is left untouched, not merged or overwritten
    let registered = scope
        .get(CACHE_MANAGER_BEAN_NAME)
        .expect("manager registered");
    assert_eq!(registered, &first_outcome.plan.cache_manager);
}

#[test]
fn test_missing_address_drops_the_entry() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Address {
            name: Some("sessions".to_string()),
            address: None,
            expiration: None,
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        outcome.diagnostics[0].kind,
        DiagnosticKind::MissingRequiredAttribute {
            attribute: "address".to_string()
        }
    );
    assert!(outcome.plan.caches().is_empty());
}

#[test]
fn test_blank_name_counts_as_missing() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Cluster {
            name: Some("   ".to_string()),
            expiration: None,
            client_ref: None,
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert_eq!(
        outcome.diagnostics[0].kind,
        DiagnosticKind::MissingRequiredAttribute {
            attribute: "name".to_string()
        }
    );
    assert!(outcome.plan.caches().is_empty());
}

#[test]
fn test_unknown_kind_keeps_siblings() {
    let topology = topology(vec![
        node(
            0,
            CacheNodeKind::Unknown {
                kind: "cache-weird".to_string(),
            },
        ),
        address_node(1, "sessions", "localhost:11211", None),
    ]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        outcome.diagnostics[0].kind,
        DiagnosticKind::UnknownElementKind {
            kind: "cache-weird".to_string()
        }
    );
    // The valid sibling is still processed
    assert_eq!(outcome.plan.caches().len(), 1);
}

#[test]
fn test_document_order_is_preserved() {
    let topology = topology(vec![
        address_node(0, "alpha", "localhost:11211", None),
        node(
            1,
            CacheNodeKind::Ref {
                cache_ref: Some("beta".to_string()),
            },
        ),
        node(
            2,
            CacheNodeKind::Cluster {
                name: Some("gamma".to_string()),
                expiration: None,
                client_ref: None,
            },
        ),
        address_node(3, "delta", "localhost:11212", None),
    ]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);
    assert!(outcome.is_valid());

    let names: Vec<String> = outcome
        .plan
        .caches()
        .iter()
        .map(|entry| match entry {
            WiringValue::Reference(bean_ref) => bean_ref.name().to_string(),
            WiringValue::Definition(directive) => match &directive.constructor_args[1] {
                WiringValue::String(name) => name.clone(),
                other => panic!("unexpected cache name value: {:?}", other),
            },
            other => panic!("unexpected cache entry: {:?}", other),
        })
        .collect();

    assert_eq!(names, vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn test_into_result_aggregates_diagnostics() {
    let topology = topology(vec![node(
        0,
        CacheNodeKind::Address {
            name: None,
            address: None,
            expiration: None,
        },
    )]);
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);
    assert_eq!(outcome.diagnostics.len(), 2);

    let error = outcome.into_result().expect_err("diagnostics are fatal");
    let message = error.to_string();
    assert!(message.contains("Attribute 'name' is required"));
    assert!(message.contains("Attribute 'address' is required"));
}

#[test]
fn test_empty_topology_yields_empty_manager() {
    let topology = CacheTopology::new();
    let mut scope = InMemoryWiringRegistry::new();

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    assert!(outcome.plan.caches().is_empty());
    assert!(scope.contains(CACHE_MANAGER_BEAN_NAME));
}

#[test]
fn test_preexisting_directives_do_not_trip_the_guard() {
    let topology = topology(vec![address_node(0, "sessions", "localhost:11211", None)]);
    let mut scope = InMemoryWiringRegistry::new();
    scope.register("somethingElse", WiringDirective::new("factory.Other"));

    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    assert!(outcome.is_valid());
    assert!(scope.contains(CACHE_MANAGER_BEAN_NAME));
}
