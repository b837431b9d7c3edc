//! Engine - Measurement and item registration.
//!
//! - Geometry: the host's measurement capability
//! - Registry: registration order, measured sizes, host elements
//!
//! Items are measured once, when they are registered. Anything that fails
//! measurement never enters the packing sequence.

mod geometry;
mod registry;

pub use geometry::*;
pub use registry::*;
