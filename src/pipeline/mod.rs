//! Reactive Pipeline
//!
//! Connects a masonry grid to its resize notifications and drives relayout.
//!
//! # Pipeline Architecture
//!
//! ```text
//! width signal → mount effect → Masonry::on_resize → pack → render → PlacementSink
//! ```
//!
//! ## Data Flow
//!
//! 1. **terminal** - Width/height signals, set from crossterm resize events
//! 2. **mount** - One effect per grid; each run is a "width may have changed" notification
//! 3. **reactor** - Re-measures, repacks only when the column count moves
//!
//! The layout itself stays pure; only the reactor holds state and only the
//! sink has side effects.

pub mod mount;
pub mod reactor;
pub mod terminal;

// Re-exports
pub use mount::{mount, run, tick, MountHandle};
pub use reactor::{Masonry, ReactorState};
pub use terminal::{
    detect_terminal_size, route_event, set_terminal_size, terminal_height, terminal_height_signal,
    terminal_width, terminal_width_signal, TerminalGeometry,
};
