//! Ports implemented by the surrounding wiring container
//!
//! The translator never owns global state: the configuration-scope
//! registry and the client-reference resolution policy are handed in as
//! explicit collaborators through these traits.

pub mod wiring;

pub use wiring::{ClientRefResolver, WiringRegistry};
