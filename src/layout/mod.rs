//! Masonry Layout
//!
//! Column model and shortest-column packing.
//!
//! # Architecture
//!
//! Everything here is a pure function over explicit state:
//!
//! 1. `compute_column_count` derives the column count from widths and gutter
//! 2. `Columns` holds the accumulated height of each column
//! 3. `pack` writes item positions and grows the columns
//! 4. `render` hands positions to a placement sink
//!
//! # Example
//!
//! ```ignore
//! use spark_masonry::layout::{compute_column_count, pack, Columns};
//!
//! let count = compute_column_count(340.0, 100.0, gutter.horizontal)?;
//! let mut columns = Columns::new(count);
//! pack(&mut items, &mut columns, gutter);
//! ```

mod columns;
mod pack;

pub use columns::*;
pub use pack::*;
