//! TOML topology parser
//!
//! The document is an ordered array of `[[caches]]` tables, each tagged
//! with a `kind` discriminator:
//!
//! ```toml
//! [[caches]]
//! kind = "cache"
//! name = "sessions"
//! address = "localhost:11211"
//! expiration = 300
//!
//! [[caches]]
//! kind = "cache-cluster"
//! name = "session-cluster"
//!
//! [[caches]]
//! kind = "cache-ref"
//! ref = "preconfiguredCache"
//! ```
//!
//! The kind is decoded into the tagged domain variant here, exactly once;
//! unknown kinds decode to [`CacheNodeKind::Unknown`] and are diagnosed by
//! the translator so sibling entries keep being processed. Malformed TOML
//! is a fatal configuration error.

use std::path::Path;

use serde::Deserialize;
use toml::Spanned;
use tracing::debug;

use cachewire_domain::error::Result;
use cachewire_domain::topology::{
    element_names, CacheNode, CacheNodeKind, CacheTopology, NodeLocation,
};

use crate::error_ext::ErrorContext;

/// Raw document shape as written in TOML
#[derive(Debug, Deserialize)]
struct RawTopologyDocument {
    #[serde(default)]
    caches: Vec<Spanned<RawCacheEntry>>,
}

/// One raw `[[caches]]` entry before kind decoding
///
/// Every attribute except the discriminator stays optional here; the
/// translator enforces required-ness per kind so the failure carries the
/// node location.
#[derive(Debug, Deserialize)]
struct RawCacheEntry {
    kind: String,
    name: Option<String>,
    address: Option<String>,
    #[serde(rename = "ref")]
    cache_ref: Option<String>,
    expiration: Option<u64>,
    #[serde(rename = "custom-client-ref")]
    custom_client_ref: Option<String>,
}

/// Parse a topology document from TOML source text
pub fn parse_topology(source: &str) -> Result<CacheTopology> {
    let raw: RawTopologyDocument =
        toml::from_str(source).config_context("Failed to parse cache topology document")?;

    let mut topology = CacheTopology::new();
    for (index, spanned) in raw.caches.into_iter().enumerate() {
        let span = spanned.span();
        let entry = spanned.into_inner();
        let (line, column) = line_column(source, span.start);
        let location = NodeLocation::at_index(index)
            .with_span(span)
            .with_line_column(line, column);
        topology.push(CacheNode::new(decode_entry(entry), location));
    }

    debug!(entries = topology.len(), "parsed cache topology document");
    Ok(topology)
}

/// Parse a topology document from a file on disk
pub fn parse_topology_file<P: AsRef<Path>>(path: P) -> Result<CacheTopology> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .io_context(format!("Failed to read topology file: {}", path.display()))?;
    parse_topology(&source)
}

/// Decode the kind discriminator into the tagged domain variant
fn decode_entry(entry: RawCacheEntry) -> CacheNodeKind {
    match entry.kind.as_str() {
        element_names::CACHE_REF => CacheNodeKind::Ref {
            cache_ref: entry.cache_ref,
        },
        element_names::CACHE_CLUSTER => CacheNodeKind::Cluster {
            name: entry.name,
            expiration: entry.expiration,
            client_ref: entry.custom_client_ref,
        },
        element_names::CACHE => CacheNodeKind::Address {
            name: entry.name,
            address: entry.address,
            expiration: entry.expiration,
        },
        _ => CacheNodeKind::Unknown { kind: entry.kind },
    }
}

/// One-based line and column of a byte offset in the source text
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let clamped = offset.min(source.len());
    let mut line: u32 = 1;
    let mut column: u32 = 1;
    for ch in source[..clamped].chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
