//! Topology document parsing
//!
//! Decodes a TOML cache-topology document into the domain model, keeping
//! per-entry source spans so validation diagnostics can point at the
//! offending node.

pub mod parser;

pub use parser::{parse_topology, parse_topology_file};
