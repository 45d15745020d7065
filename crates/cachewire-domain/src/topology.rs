//! Cache topology document model
//!
//! The decoded form of a cache-topology configuration document: an ordered
//! sequence of cache elements, each tagged with its kind. The element kind
//! is decoded exactly once at the parsing boundary; required attributes
//! stay optional here so the translator can report their absence against
//! the offending node instead of failing the whole parse.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Element kind names as they appear in the configuration document
pub mod element_names {
    /// Pass-through reference to an externally wired cache
    pub const CACHE_REF: &str = "cache-ref";
    /// Cache backed by a managed cache cluster
    pub const CACHE_CLUSTER: &str = "cache-cluster";
    /// Cache backed by a client with a fixed address
    pub const CACHE: &str = "cache";
}

/// Position of a topology node in its source document
///
/// `index` is the zero-based position in document order. Span and
/// line/column are present when the parser could attribute the node to a
/// region of the source text; diagnostics render them so callers can point
/// at the offending location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLocation {
    /// Zero-based position in document order
    pub index: usize,
    /// Byte range of the node in the source text
    pub span: Option<Range<usize>>,
    /// One-based line of the node start
    pub line: Option<u32>,
    /// One-based column of the node start
    pub column: Option<u32>,
}

impl NodeLocation {
    /// Create a location carrying only the document-order index
    pub fn at_index(index: usize) -> Self {
        Self {
            index,
            span: None,
            line: None,
            column: None,
        }
    }

    /// Attach the byte span of the node in the source text
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the one-based line and column of the node start
    pub fn with_line_column(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl std::fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, "line {}, column {}", line, column),
            _ => write!(f, "entry #{}", self.index + 1),
        }
    }
}

/// Decoded cache element, tagged by the kind that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheNodeKind {
    /// `cache-ref` - reference to an externally wired cache bean
    Ref {
        /// Name of the referenced cache bean (`ref` attribute)
        cache_ref: Option<String>,
    },
    /// `cache-cluster` - cache backed by a managed cache cluster
    Cluster {
        /// Cluster identifier, doubling as the cache name
        name: Option<String>,
        /// Entry expiration in seconds
        expiration: Option<u64>,
        /// Customized control-plane client bean (`custom-client-ref`)
        client_ref: Option<String>,
    },
    /// `cache` - cache backed by a client with a fixed address
    Address {
        /// Cache name
        name: Option<String>,
        /// host:port address of the memcached endpoint
        address: Option<String>,
        /// Entry expiration in seconds
        expiration: Option<u64>,
    },
    /// Element kind the schema does not know about
    Unknown {
        /// The unrecognized kind string
        kind: String,
    },
}

impl CacheNodeKind {
    /// The element kind name as written in the document
    pub fn element_name(&self) -> &str {
        match self {
            Self::Ref { .. } => element_names::CACHE_REF,
            Self::Cluster { .. } => element_names::CACHE_CLUSTER,
            Self::Address { .. } => element_names::CACHE,
            Self::Unknown { kind } => kind,
        }
    }
}

/// One child element of the topology document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheNode {
    /// Decoded element kind and attributes
    pub kind: CacheNodeKind,
    /// Where the element sits in the source document
    pub location: NodeLocation,
}

impl CacheNode {
    /// Create a node from its decoded kind and location
    pub fn new(kind: CacheNodeKind, location: NodeLocation) -> Self {
        Self { kind, location }
    }
}

/// The document root: an ordered sequence of cache elements
///
/// Order is significant. The consuming cache manager looks caches up in
/// collection order, so the translator preserves document order exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheTopology {
    /// Cache elements in document order
    pub nodes: Vec<CacheNode>,
}

impl CacheTopology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, keeping document order
    pub fn push(&mut self, node: CacheNode) {
        self.nodes.push(node);
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document declares no caches
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the elements in document order
    pub fn iter(&self) -> std::slice::Iter<'_, CacheNode> {
        self.nodes.iter()
    }
}
