//! Placement sinks.
//!
//! A sink applies computed coordinates to whatever displays the items. It
//! receives `place` once per item per pass, in packing order, bracketed by
//! `begin_pass` and `end_pass`. Coordinates arrive unrounded; snapping to
//! pixels or cells is the sink's job.

use taffy::Point;

/// Applies computed positions to host elements.
pub trait PlacementSink<E> {
    /// Called before the first `place` of a pass.
    fn begin_pass(&mut self) {}

    fn place(&mut self, element: &E, position: Point<f32>);

    /// Called after the last `place` of a pass.
    fn end_pass(&mut self) {}
}

impl<E, S: PlacementSink<E> + ?Sized> PlacementSink<E> for Box<S> {
    fn begin_pass(&mut self) {
        (**self).begin_pass();
    }

    fn place(&mut self, element: &E, position: Point<f32>) {
        (**self).place(element, position);
    }

    fn end_pass(&mut self) {
        (**self).end_pass();
    }
}

// =============================================================================
// RecordingSink
// =============================================================================

/// Sink that keeps the positions of the latest pass.
///
/// Useful headless, and for asserting on layout output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    placements: Vec<Point<f32>>,
    passes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions from the most recent pass, in packing order.
    pub fn placements(&self) -> &[Point<f32>] {
        &self.placements
    }

    /// Number of passes started so far.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl<E> PlacementSink<E> for RecordingSink {
    fn begin_pass(&mut self) {
        self.passes += 1;
        self.placements.clear();
    }

    fn place(&mut self, _element: &E, position: Point<f32>) {
        self.placements.push(position);
    }
}
