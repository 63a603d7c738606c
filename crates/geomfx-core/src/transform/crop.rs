//! Rectangular crop in pixel coordinates.
//!
//! The destination's dimensions are the crop size; no scaling happens. Rows
//! are copied as contiguous blocks; the copy for destination row `r` starts
//! at byte `(offset_height + r) * src_row_bytes + offset_width * 4` of the
//! source.
//!
//! Admission is decided by the callers in [`crate::facade`]; see
//! [`legacy_check`] and [`region_check`].

use crate::buffer::{PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::error::GeometryError;
use crate::ops::Rect;

/// Copy the `destination`-sized region at `(offset_width, offset_height)`.
pub(crate) fn crop(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    offset_width: u32,
    offset_height: u32,
) {
    if destination.is_empty() {
        return;
    }

    let src_row_bytes = source.row_bytes();
    let dst_row_bytes = destination.row_bytes();
    let skip = offset_width as usize * BYTES_PER_PIXEL;

    for (r, dst_row) in destination
        .pixels
        .chunks_exact_mut(dst_row_bytes)
        .enumerate()
    {
        let start = (offset_height as usize + r) * src_row_bytes + skip;
        dst_row.copy_from_slice(&source.pixels[start..start + dst_row_bytes]);
    }
}

/// Legacy filter bounds comparison.
///
/// The request is refused when
/// `src_width > dst_width + offset_width || src_height > dst_height + offset_height`.
/// Note the direction: a region that ends before the source's right or
/// bottom edge is refused, while one that runs past it is admitted. Requests
/// admitted here whose read span would leave the source slice are also
/// refused, so a non-empty crop only goes through when the region ends
/// exactly on the source's right and bottom edges.
pub(crate) fn legacy_check(
    source: &PixelView<'_>,
    destination: &PixelViewMut<'_>,
    rect: Rect,
) -> Result<(), GeometryError> {
    let rejected = || GeometryError::CropRejected {
        rect,
        source_width: source.width,
        source_height: source.height,
    };

    let (right, bottom) = match (rect.right(), rect.bottom()) {
        (Some(r), Some(b)) => (r, b),
        _ => return Err(rejected()),
    };
    if source.width > right || source.height > bottom {
        return Err(rejected());
    }

    if destination.is_empty() {
        return Ok(());
    }
    match read_span_end(source, rect) {
        Some(end) if end <= source.pixels.len() => Ok(()),
        _ => Err(rejected()),
    }
}

/// Region containment: the rectangle must lie inside the source.
pub(crate) fn region_check(source: &PixelView<'_>, rect: Rect) -> Result<(), GeometryError> {
    if rect.fits_within(source.width, source.height) {
        Ok(())
    } else {
        Err(GeometryError::CropOutOfBounds {
            rect,
            source_width: source.width,
            source_height: source.height,
        })
    }
}

/// One past the last source byte the copy would read.
fn read_span_end(source: &PixelView<'_>, rect: Rect) -> Option<usize> {
    let last_row = (rect.bottom()? as usize).checked_sub(1)?;
    let row_end = (rect.right()? as usize).checked_mul(BYTES_PER_PIXEL)?;
    last_row
        .checked_mul(source.row_bytes())?
        .checked_add(row_end)
}
