//! Resize Reactor - Recompute-on-resize state machine.
//!
//! ```text
//! Uninitialized ──initialize──▶ Stable(width, columns)
//!                                 │
//!        on_resize: same width    ├─▶ no-op
//!        on_resize: same columns  ├─▶ store width only
//!        on_resize: new columns   └─▶ reset columns, pack + render all items
//! ```
//!
//! `Masonry` is the typed command surface: `initialize`, `on_resize`,
//! `update`, `destroy`. All state is owned here and handed to the pure
//! functions in `layout`.

use taffy::Size;
use tracing::{debug, info, trace, warn};

use crate::engine::{Geometry, ItemSet};
use crate::error::{LayoutError, Result};
use crate::layout::{compute_column_count, content_size, pack, render, Columns};
use crate::renderer::PlacementSink;
use crate::types::{Item, MasonryConfig, Relayout};

// =============================================================================
// State
// =============================================================================

/// Lifecycle of a masonry instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReactorState {
    /// Not laid out yet, or destroyed.
    #[default]
    Uninitialized,
    /// Laid out for the cached container width.
    Stable { width: f32, columns: usize },
}

fn usable_width(width: f32) -> bool {
    width.is_finite() && width >= 0.0
}

// =============================================================================
// Masonry
// =============================================================================

/// A masonry layout bound to a geometry provider and a placement sink.
pub struct Masonry<G: Geometry, S> {
    config: MasonryConfig,
    geometry: G,
    sink: S,
    items: ItemSet<G::Element>,
    columns: Columns,
    state: ReactorState,
}

impl<G, S> Masonry<G, S>
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    /// Measure, register, and lay out `elements` in order.
    ///
    /// Elements whose measurements are unusable are skipped (and logged).
    /// Fails when the configuration or container width is invalid, or when
    /// `item width + horizontal gutter` is not positive.
    pub fn initialize<I>(config: MasonryConfig, geometry: G, sink: S, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = G::Element>,
    {
        config.validate()?;

        let width = geometry.container_width();
        if !usable_width(width) {
            return Err(LayoutError::ContainerUnavailable(width));
        }

        let mut items = ItemSet::new();
        items.register_all(&geometry, elements);

        let mut masonry = Self {
            config,
            geometry,
            sink,
            items,
            columns: Columns::default(),
            state: ReactorState::Uninitialized,
        };

        let count = masonry.column_count_for(width)?;
        masonry.columns.reset(count);
        masonry.run_pass();
        masonry.state = ReactorState::Stable { width, columns: count };

        info!(
            items = masonry.items.len(),
            skipped = masonry.items.rejected(),
            columns = count,
            width,
            "masonry initialized"
        );
        Ok(masonry)
    }

    /// Handle a "width may have changed" notification.
    ///
    /// Repacks only when the floored column count moves.
    pub fn on_resize(&mut self) -> Relayout {
        let ReactorState::Stable { width, columns } = self.state else {
            return Relayout::NONE;
        };

        let measured = self.geometry.container_width();
        if !usable_width(measured) {
            warn!(measured, "container width unavailable, ignoring resize");
            return Relayout::NONE;
        }
        if measured == width {
            trace!(width, "resize without width change");
            return Relayout::NONE;
        }

        let count = match self.column_count_for(measured) {
            Ok(count) => count,
            Err(err) => {
                warn!("resize ignored: {}", err);
                return Relayout::NONE;
            }
        };

        self.state = ReactorState::Stable { width: measured, columns: count };
        if count == columns {
            trace!(width = measured, columns, "width changed, column count unchanged");
            return Relayout::WIDTH_CHANGED;
        }

        debug!(from = columns, to = count, width = measured, "column count changed");
        self.columns.reset(count);
        Relayout::WIDTH_CHANGED | Relayout::COLUMNS_CHANGED | self.run_pass()
    }

    /// Force a full repack and render.
    ///
    /// Re-measures the container first; the column heights are rebuilt if the
    /// count moved and zeroed otherwise, so the pass always starts clean.
    /// When no column fits, nothing is packed or rendered.
    pub fn update(&mut self) -> Relayout {
        let ReactorState::Stable { width, columns } = self.state else {
            return Relayout::NONE;
        };

        let mut outcome = Relayout::NONE;
        let measured = self.geometry.container_width();
        let mut count = columns;
        let mut new_width = width;

        if usable_width(measured) && measured != width {
            outcome |= Relayout::WIDTH_CHANGED;
            new_width = measured;
            match self.column_count_for(measured) {
                Ok(c) => count = c,
                Err(err) => warn!("keeping column count: {}", err),
            }
        }

        if count != columns {
            outcome |= Relayout::COLUMNS_CHANGED;
            self.columns.reset(count);
        } else {
            self.columns.zero();
        }
        self.state = ReactorState::Stable { width: new_width, columns: count };

        debug!(items = self.items.len(), columns = count, "forced update");
        outcome | self.run_pass()
    }

    /// Release the items and return to `Uninitialized`.
    ///
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.state == ReactorState::Uninitialized && self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.columns.reset(0);
        self.state = ReactorState::Uninitialized;
        debug!("masonry destroyed");
    }

    /// Column count for a container width, given the shared item width.
    ///
    /// With no items there is no item width, and nothing to lay out.
    fn column_count_for(&self, width: f32) -> Result<usize> {
        match self.items.item_width() {
            Some(item_width) => compute_column_count(width, item_width, self.config.gutter.horizontal),
            None => Ok(0),
        }
    }

    /// Pack every item from the current column heights and render the result.
    ///
    /// With no columns nothing is placed, so the sink keeps its last frame.
    fn run_pass(&mut self) -> Relayout {
        if self.columns.count() == 0 {
            debug!(items = self.items.len(), "no columns fit, skipping pass");
            return Relayout::NONE;
        }
        pack(self.items.items_mut(), &mut self.columns, self.config.gutter);
        render(self.items.iter(), &mut self.sink);
        Relayout::PACKED
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> ReactorState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state != ReactorState::Uninitialized
    }

    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Cached container width, if laid out.
    pub fn container_width(&self) -> Option<f32> {
        match self.state {
            ReactorState::Stable { width, .. } => Some(width),
            ReactorState::Uninitialized => None,
        }
    }

    pub fn item_width(&self) -> Option<f32> {
        self.items.item_width()
    }

    pub fn column_count(&self) -> usize {
        self.columns.count()
    }

    pub fn column_heights(&self) -> &[f32] {
        self.columns.heights()
    }

    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    pub fn item_set(&self) -> &ItemSet<G::Element> {
        &self.items
    }

    /// Bounding box of the current layout.
    pub fn content_size(&self) -> Size<f32> {
        content_size(
            &self.columns,
            self.items.item_width().unwrap_or(0.0),
            self.config.gutter,
        )
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

// =============================================================================
// Tests
// =============================================================================
