//! # spark-masonry
//!
//! Shortest-column masonry layout with reactive resize handling.
//!
//! Items of a shared width and varying heights are packed, in registration
//! order, into whichever column is currently shortest. When the container
//! width changes, the grid is repacked only if the number of columns that fit
//! actually moves.
//!
//! ## Architecture
//!
//! ```text
//! Geometry → ItemSet → Columns + pack → render → PlacementSink
//!                ▲
//!   width signal ┴─ mount effect → Masonry::on_resize
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Item, Gutter, MasonryConfig, Relayout)
//! - [`engine`] - Geometry provider trait, item registration
//! - [`layout`] - Column model and shortest-column packing
//! - [`pipeline`] - Resize reactor, terminal signals, mount/event loop
//! - [`renderer`] - Placement sinks (recording, terminal cards)
//!
//! ## Example
//!
//! ```ignore
//! use spark_masonry::{Masonry, MasonryConfig, MeasuredGeometry, RecordingSink};
//! use taffy::Size;
//!
//! let items = [50.0, 80.0, 30.0].map(|height| Size { width: 100.0, height });
//! let mut grid = Masonry::initialize(
//!     MasonryConfig::with_gutter(20.0, 10.0),
//!     MeasuredGeometry::new(340.0),
//!     RecordingSink::new(),
//!     items,
//! )?;
//!
//! grid.geometry_mut().set_container_width(220.0);
//! grid.on_resize();  // 3 columns → 2 columns, repacked
//! ```

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{LayoutError, Result};

pub use engine::{Geometry, ItemSet, MeasuredGeometry};

pub use layout::{compute_column_count, content_size, pack, render, Columns, MAX_COLUMNS};

pub use pipeline::{
    detect_terminal_size, mount, route_event, run, set_terminal_size, terminal_height,
    terminal_width, terminal_width_signal, tick, Masonry, MountHandle, ReactorState,
    TerminalGeometry,
};

pub use renderer::{Card, CardSink, PlacementSink, RecordingSink};
