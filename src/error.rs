//! Layout errors.
//!
//! Configuration problems are fatal and surface from `Masonry::initialize`.
//! Measurement problems are local to one item and never abort a pass.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while configuring or measuring a masonry layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// `item_width + gutter_x` is not positive, so no column count exists.
    #[error("column pitch must be positive (item width {item_width} + horizontal gutter {gutter_x})")]
    NonPositivePitch { item_width: f32, gutter_x: f32 },

    /// A gutter is negative or not finite.
    #[error("gutters must be finite and non-negative (got [{horizontal}, {vertical}])")]
    InvalidGutter { horizontal: f32, vertical: f32 },

    /// The container width could not be measured.
    #[error("container width unavailable (measured {0})")]
    ContainerUnavailable(f32),

    /// An item reported a width or height that cannot be packed.
    #[error("item {index} measurement unavailable (width {width}, height {height})")]
    MeasurementUnavailable { index: usize, width: f32, height: f32 },

    /// More columns would fit than a layout can hold.
    #[error("container width {container_width} fits more than {max} columns of width {item_width}")]
    ColumnOverflow { container_width: f32, item_width: f32, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayoutError::NonPositivePitch { item_width: 0.0, gutter_x: 0.0 };
        assert_eq!(
            err.to_string(),
            "column pitch must be positive (item width 0 + horizontal gutter 0)"
        );

        let err = LayoutError::MeasurementUnavailable { index: 3, width: 100.0, height: f32::NAN };
        assert!(err.to_string().starts_with("item 3 measurement unavailable"));
    }

    #[test]
    fn test_column_overflow_message() {
        let err = LayoutError::ColumnOverflow { container_width: 1000.0, item_width: 0.5, max: 4 };
        assert_eq!(
            err.to_string(),
            "container width 1000 fits more than 4 columns of width 0.5"
        );
    }
}
