//! Well-known bean names and factory identifiers
//!
//! The wiring plan refers to runtime objects through string identifiers
//! interpreted by the consuming container. The names here form the
//! conventional vocabulary shared between the translator and that
//! container.

/// Bean name under which the assembled cache manager is registered.
/// A wiring scope holds at most one definition under this name.
pub const CACHE_MANAGER_BEAN_NAME: &str = "cacheManager";

/// Factory identifier for the composite cache manager holding the ordered
/// cache collection.
pub const SIMPLE_CACHE_MANAGER_FACTORY: &str = "cachewire.SimpleCacheManager";

/// Factory identifier for a named cache wrapping a memcached client.
/// Constructor args: (client definition, cache name).
pub const NAMED_MEMCACHED_CACHE_FACTORY: &str = "cachewire.NamedMemcachedCache";

/// Factory identifier for a memcached client connecting to a fixed
/// host:port address. Constructor args: (address).
pub const STATIC_MEMCACHED_CLIENT_FACTORY: &str = "cachewire.StaticMemcachedClientFactory";

/// Factory identifier for a memcached client that discovers its endpoints
/// through a managed cache cluster. Constructor args:
/// (control-plane client ref, cluster id, resource-id resolver ref).
pub const ELASTICACHE_MEMCACHED_CLIENT_FACTORY: &str =
    "cachewire.ElastiCacheMemcachedClientFactory";

/// Factory identifier for the default managed-cache control-plane client.
pub const ELASTICACHE_CLIENT_FACTORY: &str = "cachewire.ElastiCacheClient";

/// Bean name of the default managed-cache control-plane client, derived
/// from [`ELASTICACHE_CLIENT_FACTORY`] by convention.
pub const DEFAULT_ELASTICACHE_CLIENT_BEAN: &str = "elastiCacheClient";

/// Customization category for the managed-cache control-plane client.
pub const ELASTICACHE_CLIENT_CATEGORY: &str = "elasti-cache";

/// Bean name of the shared resource-id resolver.
pub const RESOURCE_ID_RESOLVER_BEAN_NAME: &str = "resourceIdResolver";

/// Factory identifier for the default resource-id resolver.
pub const RESOURCE_ID_RESOLVER_FACTORY: &str = "cachewire.DefaultResourceIdResolver";

/// Property name carrying the ordered cache entries on the manager
/// directive.
pub const CACHES_PROPERTY: &str = "caches";

/// Property name carrying a cache entry expiration in seconds.
pub const EXPIRATION_PROPERTY: &str = "expiration";
