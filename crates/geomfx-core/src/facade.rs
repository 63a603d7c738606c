//! Validation and dispatch for geometry operations.
//!
//! Two flavours of every operation are offered:
//!
//! - **Permissive** (`apply_*`, [`apply`]): the host-facing contract. Invalid
//!   geometry is logged at debug level and the call returns without touching
//!   the destination. Nothing is reported to the caller.
//! - **Strict** (`try_*`, [`try_apply`], [`transformed`]): the same engines
//!   behind a `Result`. A returned error also means nothing was written.
//!
//! The only behavioural difference between the two is crop admission: the
//! permissive path keeps the legacy filter bounds comparison, the strict
//! path checks that the crop rectangle lies inside the source.
//!
//! ```ignore
//! use geomfx_core::{apply_flip, FlipMode};
//!
//! // Mirror left-right; bit 0 = horizontal, bit 1 = vertical
//! apply_flip(&src, 64, 48, &mut dst, 64, 48, 1);
//! ```

use crate::buffer::{PixelBuffer, PixelView, PixelViewMut};
use crate::error::GeometryError;
use crate::ops::{FlipMode, GeometryOp, Rect, RotateCode};
use crate::transform;

/// Which crop admission rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CropBounds {
    Legacy,
    Region,
}

// ============================================================================
// Permissive entry points
// ============================================================================

/// Mirror `source` into `destination`.
///
/// `flip` is a bitmask: bit 0 = horizontal, bit 1 = vertical. Does nothing
/// when the two buffers differ in size.
pub fn apply_flip(
    source: &[u8],
    src_width: u32,
    src_height: u32,
    destination: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    flip: i32,
) {
    let op = GeometryOp::Flip {
        mode: FlipMode::from_bits(flip),
    };
    apply_raw(
        &op,
        source,
        (src_width, src_height),
        destination,
        (dst_width, dst_height),
    );
}

/// Rotate `source` into `destination` by a quarter-turn code.
///
/// `rotate` is 0 (none), 1 (90), 2 (180) or 3 (270), counter-clockwise.
/// Unknown codes and destinations of the wrong size leave `destination`
/// untouched.
pub fn apply_rotate(
    source: &[u8],
    src_width: u32,
    src_height: u32,
    destination: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    rotate: i32,
) {
    let op = GeometryOp::Rotate {
        rotation: RotateCode::from_code(rotate),
    };
    apply_raw(
        &op,
        source,
        (src_width, src_height),
        destination,
        (dst_width, dst_height),
    );
}

/// Copy the `dst_width` x `dst_height` region at
/// `(offset_width, offset_height)` of `source` into `destination`.
///
/// Uses the legacy filter bounds comparison, which refuses any region
/// ending before the source's right or bottom edge.
#[allow(clippy::too_many_arguments)]
pub fn apply_crop(
    source: &[u8],
    src_width: u32,
    src_height: u32,
    destination: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    offset_width: u32,
    offset_height: u32,
) {
    let op = GeometryOp::Crop(Rect::new(offset_width, offset_height, dst_width, dst_height));
    apply_raw(
        &op,
        source,
        (src_width, src_height),
        destination,
        (dst_width, dst_height),
    );
}

/// Fill `destination` with the straighten placeholder pattern.
///
/// `angle` is accepted for interface compatibility and ignored.
pub fn apply_straighten(
    source: &[u8],
    src_width: u32,
    src_height: u32,
    destination: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    angle: f32,
) {
    apply_raw(
        &GeometryOp::Straighten { angle },
        source,
        (src_width, src_height),
        destination,
        (dst_width, dst_height),
    );
}

/// Run `op` with the permissive policy: invalid geometry is a logged no-op.
pub fn apply(op: &GeometryOp, source: &PixelView<'_>, destination: &mut PixelViewMut<'_>) {
    if let Err(err) = dispatch(op, source, destination, CropBounds::Legacy) {
        tracing::debug!(?op, %err, "skipping geometry operation");
    }
}

fn apply_raw(
    op: &GeometryOp,
    source: &[u8],
    (src_width, src_height): (u32, u32),
    destination: &mut [u8],
    (dst_width, dst_height): (u32, u32),
) {
    let source = match PixelView::new(source, src_width, src_height) {
        Ok(view) => view,
        Err(err) => {
            tracing::debug!(?op, %err, "skipping geometry operation: bad source buffer");
            return;
        }
    };
    let mut destination = match PixelViewMut::new(destination, dst_width, dst_height) {
        Ok(view) => view,
        Err(err) => {
            tracing::debug!(?op, %err, "skipping geometry operation: bad destination buffer");
            return;
        }
    };
    apply(op, &source, &mut destination);
}

// ============================================================================
// Strict entry points
// ============================================================================

/// Mirror `source` into a destination of the same size.
pub fn try_flip(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    mode: FlipMode,
) -> Result<(), GeometryError> {
    try_apply(&GeometryOp::Flip { mode }, source, destination)
}

/// Rotate `source` into a destination of `rotation.output_dimensions()`.
pub fn try_rotate(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    rotation: RotateCode,
) -> Result<(), GeometryError> {
    try_apply(&GeometryOp::Rotate { rotation }, source, destination)
}

/// Crop the destination-sized region at `(offset_width, offset_height)`.
///
/// Fails with [`GeometryError::CropOutOfBounds`] unless the region lies
/// inside the source.
pub fn try_crop(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    offset_width: u32,
    offset_height: u32,
) -> Result<(), GeometryError> {
    let rect = Rect::new(
        offset_width,
        offset_height,
        destination.width(),
        destination.height(),
    );
    try_apply(&GeometryOp::Crop(rect), source, destination)
}

/// Straighten placeholder with error reporting.
pub fn try_straighten(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    angle: f32,
) -> Result<(), GeometryError> {
    try_apply(&GeometryOp::Straighten { angle }, source, destination)
}

/// Run `op`, reporting invalid geometry instead of skipping it.
pub fn try_apply(
    op: &GeometryOp,
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
) -> Result<(), GeometryError> {
    dispatch(op, source, destination, CropBounds::Region)
}

/// Apply `op` to an owned buffer, allocating a destination of
/// [`GeometryOp::output_dimensions`].
///
/// Identity operations return a copy of `source`.
pub fn transformed(source: &PixelBuffer, op: &GeometryOp) -> Result<PixelBuffer, GeometryError> {
    if op.is_identity() {
        return Ok(source.clone());
    }

    let (width, height) = op.output_dimensions(source.width(), source.height());
    let mut output = PixelBuffer::blank(width, height)?;
    try_apply(op, &source.view(), &mut output.view_mut())?;
    Ok(output)
}

// ============================================================================
// Validation and dispatch
// ============================================================================

#[tracing::instrument(level = "trace", skip(source, destination))]
fn dispatch(
    op: &GeometryOp,
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    bounds: CropBounds,
) -> Result<(), GeometryError> {
    match *op {
        GeometryOp::Flip { mode } => {
            expect_dimensions(destination, (source.width(), source.height()))?;
            transform::flip(source, destination, mode);
        }
        GeometryOp::Rotate { rotation } => {
            let expected = rotation.output_dimensions(source.width(), source.height());
            expect_dimensions(destination, expected)?;
            transform::rotate(source, destination, rotation);
        }
        GeometryOp::Crop(rect) => {
            expect_dimensions(destination, (rect.width, rect.height))?;
            match bounds {
                CropBounds::Legacy => transform::legacy_crop_check(source, destination, rect)?,
                CropBounds::Region => transform::crop_region_check(source, rect)?,
            }
            transform::crop(source, destination, rect.offset_width, rect.offset_height);
        }
        GeometryOp::Straighten { angle } => {
            if source.pixel_count() < destination.pixel_count() {
                return Err(GeometryError::SourceTooSmall {
                    source_pixels: source.pixel_count(),
                    destination_pixels: destination.pixel_count(),
                });
            }
            transform::straighten(source, destination, angle);
        }
    }
    Ok(())
}

fn expect_dimensions(
    destination: &PixelViewMut<'_>,
    (expected_width, expected_height): (u32, u32),
) -> Result<(), GeometryError> {
    if (destination.width(), destination.height()) != (expected_width, expected_height) {
        return Err(GeometryError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width: destination.width(),
            actual_height: destination.height(),
        });
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
