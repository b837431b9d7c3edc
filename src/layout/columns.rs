//! Column Model
//!
//! Column count derivation and per-column accumulated heights.
//!
//! The count adds one horizontal gutter of slack before dividing by the
//! column pitch, so `n` columns separated by `n - 1` gutters fit exactly when
//! the container is `n * w + (n - 1) * g` wide.

use crate::error::{LayoutError, Result};

/// Upper bound on the column count of one layout.
pub const MAX_COLUMNS: usize = u16::MAX as usize;

/// Number of columns that fit `container_width`.
///
/// `floor((container_width + gutter_x) / (item_width + gutter_x))`.
/// Fails when the pitch `item_width + gutter_x` is not positive, or when
/// more than [`MAX_COLUMNS`] would fit.
pub fn compute_column_count(container_width: f32, item_width: f32, gutter_x: f32) -> Result<usize> {
    let pitch = item_width + gutter_x;
    if !pitch.is_finite() || pitch <= 0.0 {
        return Err(LayoutError::NonPositivePitch { item_width, gutter_x });
    }

    let fit = ((container_width + gutter_x) / pitch).floor();
    if fit > MAX_COLUMNS as f32 {
        return Err(LayoutError::ColumnOverflow {
            container_width,
            item_width,
            max: MAX_COLUMNS,
        });
    }
    // Negative or NaN widths fit nothing; the cast saturates at 0
    Ok(if fit > 0.0 { fit as usize } else { 0 })
}

// =============================================================================
// Columns
// =============================================================================

/// Accumulated height of each column.
///
/// `heights().len() == count()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    heights: Vec<f32>,
}

impl Columns {
    /// `count` columns, all at height zero.
    pub fn new(count: usize) -> Self {
        Self {
            heights: vec![0.0; count],
        }
    }

    /// Replace the heights with `count` zeroed columns.
    pub fn reset(&mut self, count: usize) {
        self.heights.clear();
        self.heights.resize(count, 0.0);
    }

    /// Zero every column in place, keeping the count.
    pub fn zero(&mut self) {
        self.heights.fill(0.0);
    }

    pub fn count(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Column with the least height; the lowest index wins ties.
    pub fn shortest(&self) -> Option<usize> {
        let (first, rest) = self.heights.split_first()?;
        let mut index = 0;
        let mut best = *first;
        for (i, height) in rest.iter().enumerate() {
            if *height < best {
                best = *height;
                index = i + 1;
            }
        }
        Some(index)
    }

    /// Height of the tallest column (0 when there are none).
    pub fn tallest(&self) -> f32 {
        self.heights.iter().copied().fold(0.0, f32::max)
    }

    pub fn height(&self, column: usize) -> Option<f32> {
        self.heights.get(column).copied()
    }

    /// Grow one column by `amount`.
    pub(crate) fn grow(&mut self, column: usize, amount: f32) {
        if let Some(height) = self.heights.get_mut(column) {
            *height += amount;
        }
    }
}

impl From<Vec<f32>> for Columns {
    fn from(heights: Vec<f32>) -> Self {
        Self { heights }
    }
}

// =============================================================================
// Tests
// =============================================================================
