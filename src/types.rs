//! Core types for spark-masonry.
//!
//! These flow from registration through packing to the placement sink.

use serde::{Deserialize, Serialize};
use taffy::{Point, Size};

use crate::error::{LayoutError, Result};

// =============================================================================
// Gutter
// =============================================================================

/// Default horizontal and vertical gutter.
pub const DEFAULT_GUTTER: f32 = 10.0;

/// Spacing between columns (horizontal) and between stacked items (vertical).
///
/// Serialized as a two-element array `[horizontal, vertical]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Gutter {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Gutter {
    /// Create a gutter.
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    /// Same spacing on both axes.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }
}

impl Default for Gutter {
    fn default() -> Self {
        Self::uniform(DEFAULT_GUTTER)
    }
}

impl From<[f32; 2]> for Gutter {
    fn from([horizontal, vertical]: [f32; 2]) -> Self {
        Self { horizontal, vertical }
    }
}

impl From<Gutter> for [f32; 2] {
    fn from(gutter: Gutter) -> Self {
        [gutter.horizontal, gutter.vertical]
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Per-instance layout settings, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasonryConfig {
    pub gutter: Gutter,
}

impl MasonryConfig {
    pub fn with_gutter(horizontal: f32, vertical: f32) -> Self {
        Self {
            gutter: Gutter::new(horizontal, vertical),
        }
    }

    /// Check that both gutters are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let Gutter { horizontal, vertical } = self.gutter;
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if ok(horizontal) && ok(vertical) {
            Ok(())
        } else {
            Err(LayoutError::InvalidGutter { horizontal, vertical })
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// One positionable unit.
///
/// Size is measured once at registration. Position is written only by the
/// layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    index: usize,
    size: Size<f32>,
    position: Point<f32>,
}

impl Item {
    /// Build an item from measured dimensions.
    ///
    /// Rejects non-finite or negative measurements so they can never reach
    /// the column heights.
    pub fn measured(index: usize, width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(LayoutError::MeasurementUnavailable { index, width, height });
        }
        Ok(Self {
            index,
            size: Size { width, height },
            position: Point { x: 0.0, y: 0.0 },
        })
    }

    /// Registration order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size<f32> {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Position computed by the last layout pass.
    pub fn position(&self) -> Point<f32> {
        self.position
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point { x, y };
    }
}

// =============================================================================
// Relayout outcome (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// What a resize notification or update actually did.
    ///
    /// Combine with bitwise OR: `Relayout::WIDTH_CHANGED | Relayout::PACKED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Relayout: u8 {
        const NONE = 0;
        /// The measured container width moved.
        const WIDTH_CHANGED = 1 << 0;
        /// The floored column count moved and the heights were reset.
        const COLUMNS_CHANGED = 1 << 1;
        /// A full pack + render pass ran.
        const PACKED = 1 << 2;
    }
}

// =============================================================================
// Tests
// =============================================================================
