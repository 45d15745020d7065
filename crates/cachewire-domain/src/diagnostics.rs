//! Validation diagnostics
//!
//! Node-anchored validation failures collected during translation. The
//! translator keeps walking siblings after recording a diagnostic, so one
//! pass can report every problem in the document; any collected diagnostic
//! is fatal to the overall configuration load.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::topology::NodeLocation;

/// The kinds of validation failure a topology document can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A required attribute is absent or blank
    MissingRequiredAttribute {
        /// Name of the missing attribute
        attribute: String,
    },
    /// The element kind is not part of the schema
    UnknownElementKind {
        /// The unrecognized kind string
        kind: String,
    },
    /// A cache manager is already registered in this wiring scope
    DuplicateCacheManager,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredAttribute { attribute } => {
                write!(f, "Attribute '{}' is required", attribute)
            }
            Self::UnknownElementKind { kind } => {
                write!(f, "Unknown element '{}' detected", kind)
            }
            Self::DuplicateCacheManager => {
                write!(f, "Only one cache manager can be defined")
            }
        }
    }
}

/// A validation failure anchored to the node that caused it
///
/// `location` is `None` for diagnostics raised against the document root
/// rather than an individual child element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Where it went wrong, if attributable to a child node
    pub location: Option<NodeLocation>,
}

impl Diagnostic {
    /// Create a diagnostic anchored to a child node
    pub fn at_node(kind: DiagnosticKind, location: NodeLocation) -> Self {
        Self {
            kind,
            location: Some(location),
        }
    }

    /// Create a diagnostic anchored to the document root
    pub fn at_root(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.kind),
            None => write!(f, "document root: {}", self.kind),
        }
    }
}

/// Fold collected diagnostics into a single fatal configuration error
///
/// Returns `None` when the list is empty. The containing process must
/// refuse to initialize when this returns an error; no partial cache
/// manager may stay active.
pub fn aggregate(diagnostics: &[Diagnostic]) -> Option<Error> {
    if diagnostics.is_empty() {
        return None;
    }
    let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    Some(Error::configuration(format!(
        "invalid cache topology: {}",
        rendered.join("; ")
    )))
}
