//! Error type for geometry operations.
//!
//! Every variant describes the same failure: the buffers or parameters do not
//! describe a valid geometry for the requested operation. The permissive
//! entry points in [`crate::facade`] log these and skip the operation; the
//! `try_*` entry points hand them back to the caller.

use thiserror::Error;

use crate::ops::Rect;

/// Invalid geometry for the requested operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Byte length does not match `width * height * 4`.
    #[error("Buffer of {actual} bytes does not match {width}x{height} RGBA (expected {expected})")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// `width * height * 4` does not fit in `usize`.
    #[error("Buffer dimensions {width}x{height} overflow addressable memory")]
    DimensionsOverflow { width: u32, height: u32 },

    /// Destination is not the size the operation produces.
    #[error(
        "Destination is {actual_width}x{actual_height}, operation needs {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Crop rectangle reaches outside the source.
    #[error(
        "Crop region {}x{} at ({}, {}) exceeds source {source_width}x{source_height}",
        .rect.width, .rect.height, .rect.offset_width, .rect.offset_height
    )]
    CropOutOfBounds {
        rect: Rect,
        source_width: u32,
        source_height: u32,
    },

    /// Crop request refused by the legacy bounds comparison.
    #[error(
        "Crop region {}x{} at ({}, {}) rejected for source {source_width}x{source_height}",
        .rect.width, .rect.height, .rect.offset_width, .rect.offset_height
    )]
    CropRejected {
        rect: Rect,
        source_width: u32,
        source_height: u32,
    },

    /// Source holds fewer pixels than the destination needs.
    #[error("Source has {source_pixels} pixels, destination needs {destination_pixels}")]
    SourceTooSmall {
        source_pixels: usize,
        destination_pixels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_mismatch_display() {
        let err = GeometryError::BufferSizeMismatch {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Buffer of 12 bytes does not match 2x2 RGBA (expected 16)"
        );
    }

    #[test]
    fn test_crop_out_of_bounds_display() {
        let err = GeometryError::CropOutOfBounds {
            rect: Rect::new(3, 1, 2, 2),
            source_width: 4,
            source_height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Crop region 2x2 at (3, 1) exceeds source 4x4"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = GeometryError::DimensionMismatch {
            expected_width: 3,
            expected_height: 5,
            actual_width: 5,
            actual_height: 3,
        };
        assert_eq!(
            err.to_string(),
            "Destination is 5x3, operation needs 3x5"
        );
    }
}
