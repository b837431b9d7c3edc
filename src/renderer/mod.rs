//! Renderer - Placement sinks.
//!
//! The layout never touches a display. It hands `(element, position)` pairs
//! to a `PlacementSink`:
//!
//! - `RecordingSink` keeps positions in memory (headless hosts, tests)
//! - `CardSink` draws bordered cards into a terminal with crossterm

mod sink;
mod terminal;

pub use sink::{PlacementSink, RecordingSink};
pub use terminal::{snap, Card, CardSink};
