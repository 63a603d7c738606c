//! Straighten placeholder.
//!
//! Not a rotation. Every destination pixel gets a fixed diagnostic colour:
//! red and blue forced to 128, green copied from the source pixel with the
//! same index, alpha left as it was. The angle is accepted and ignored.

use crate::buffer::{PixelView, PixelViewMut, BLUE, BYTES_PER_PIXEL, GREEN, RED};

/// Value written to the red and blue channels.
pub const DIAGNOSTIC_LEVEL: u8 = 128;

/// Fill `destination` with the diagnostic pattern.
///
/// All `width * height` destination pixels are written. The legacy filter's
/// stub never advanced its write pointer and so only ever rewrote the first
/// pixel; that is not reproduced. The source must hold at least as many
/// pixels as the destination.
pub(crate) fn straighten(source: &PixelView<'_>, destination: &mut PixelViewMut<'_>, angle: f32) {
    tracing::trace!(angle, "straighten is a placeholder; angle ignored");

    let src_pixels = source.pixels.chunks_exact(BYTES_PER_PIXEL);
    let dst_pixels = destination.pixels.chunks_exact_mut(BYTES_PER_PIXEL);
    for (src_px, dst_px) in src_pixels.zip(dst_pixels) {
        dst_px[RED] = DIAGNOSTIC_LEVEL;
        dst_px[GREEN] = src_px[GREEN];
        dst_px[BLUE] = DIAGNOSTIC_LEVEL;
    }
}
