//! Geometry - Measurement capability supplied by the host.
//!
//! The layout never queries a UI toolkit directly. It asks a `Geometry`
//! implementation for the container width and for each element's size.
//! Measurement is assumed cheap and synchronous.

use taffy::Size;

/// Measures the container and the elements placed inside it.
pub trait Geometry {
    /// Host-side handle for one positionable element.
    type Element;

    /// Current width available to the grid.
    fn container_width(&self) -> f32;

    fn item_width(&self, element: &Self::Element) -> f32;

    fn item_height(&self, element: &Self::Element) -> f32;
}

// =============================================================================
// Headless provider
// =============================================================================

/// Geometry for hosts that already know their element sizes.
///
/// Elements are their own measured `Size`. The container width is whatever
/// was last set, so resize handling can be driven without a UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredGeometry {
    container_width: f32,
}

impl MeasuredGeometry {
    pub fn new(container_width: f32) -> Self {
        Self { container_width }
    }

    /// Change the width reported on the next measurement.
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width;
    }
}

impl Geometry for MeasuredGeometry {
    type Element = Size<f32>;

    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn item_width(&self, element: &Size<f32>) -> f32 {
        element.width
    }

    fn item_height(&self, element: &Size<f32>) -> f32 {
        element.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_geometry() {
        let mut geometry = MeasuredGeometry::new(320.0);
        let element = Size { width: 100.0, height: 45.0 };

        assert_eq!(geometry.container_width(), 320.0);
        assert_eq!(geometry.item_width(&element), 100.0);
        assert_eq!(geometry.item_height(&element), 45.0);

        geometry.set_container_width(200.0);
        assert_eq!(geometry.container_width(), 200.0);
    }
}
