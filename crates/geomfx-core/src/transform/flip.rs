//! Horizontal and vertical mirroring.
//!
//! Source and destination always have the same dimensions. Vertical flips
//! move whole rows as one block; horizontal flips move 4-byte pixels one at a
//! time because reversed pixels are never contiguous.

use crate::buffer::{PixelBuffer, PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::ops::FlipMode;

/// Mirror `source` into `destination` along the axes in `mode`.
///
/// `Both` runs a horizontal pass into a scratch buffer and a vertical pass
/// from the scratch buffer into `destination`. The scratch buffer is dropped
/// before returning.
pub(crate) fn flip(source: &PixelView<'_>, destination: &mut PixelViewMut<'_>, mode: FlipMode) {
    debug_assert_eq!(
        (source.width, source.height),
        (destination.width, destination.height)
    );

    match mode {
        FlipMode::None => {}
        FlipMode::Horizontal => flip_horizontal(source, destination),
        FlipMode::Vertical => flip_vertical(source, destination),
        FlipMode::Both => {
            let mut scratch = PixelBuffer::scratch_like(destination);
            flip_horizontal(source, &mut scratch.view_mut());
            flip_vertical(&scratch.view(), destination);
        }
    }
}

/// Row `i` of the source becomes row `height - 1 - i` of the destination.
fn flip_vertical(source: &PixelView<'_>, destination: &mut PixelViewMut<'_>) {
    let row_bytes = source.row_bytes();
    if row_bytes == 0 {
        return;
    }

    let src_rows = source.pixels.chunks_exact(row_bytes);
    let dst_rows = destination.pixels.chunks_exact_mut(row_bytes).rev();
    for (src_row, dst_row) in src_rows.zip(dst_rows) {
        dst_row.copy_from_slice(src_row);
    }
}

/// Pixel `j` of each row becomes pixel `width - 1 - j` of the same row.
fn flip_horizontal(source: &PixelView<'_>, destination: &mut PixelViewMut<'_>) {
    let row_bytes = source.row_bytes();
    if row_bytes == 0 {
        return;
    }

    let src_rows = source.pixels.chunks_exact(row_bytes);
    let dst_rows = destination.pixels.chunks_exact_mut(row_bytes);
    for (src_row, dst_row) in src_rows.zip(dst_rows) {
        let src_pixels = src_row.chunks_exact(BYTES_PER_PIXEL);
        let dst_pixels = dst_row.chunks_exact_mut(BYTES_PER_PIXEL).rev();
        for (src_px, dst_px) in src_pixels.zip(dst_pixels) {
            dst_px.copy_from_slice(src_px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 4] = [1, 2, 3, 4];
    const B: [u8; 4] = [5, 6, 7, 8];
    const C: [u8; 4] = [9, 10, 11, 12];
    const D: [u8; 4] = [13, 14, 15, 16];

    fn buffer_of(width: u32, height: u32, pixels: &[[u8; 4]]) -> PixelBuffer {
        PixelBuffer::new(width, height, pixels.concat()).unwrap()
    }

    fn flipped(src: &PixelBuffer, mode: FlipMode) -> PixelBuffer {
        let mut dst = PixelBuffer::blank(src.width(), src.height()).unwrap();
        flip(&src.view(), &mut dst.view_mut(), mode);
        dst
    }

    #[test]
    fn test_flip_horizontal_2x2() {
        let src = buffer_of(2, 2, &[A, B, C, D]);
        assert_eq!(
            flipped(&src, FlipMode::Horizontal),
            buffer_of(2, 2, &[B, A, D, C])
        );
    }

    #[test]
    fn test_flip_vertical_2x2() {
        let src = buffer_of(2, 2, &[A, B, C, D]);
        assert_eq!(
            flipped(&src, FlipMode::Vertical),
            buffer_of(2, 2, &[C, D, A, B])
        );
    }

    #[test]
    fn test_flip_both_2x2() {
        let src = buffer_of(2, 2, &[A, B, C, D]);
        assert_eq!(flipped(&src, FlipMode::Both), buffer_of(2, 2, &[D, C, B, A]));
    }

    #[test]
    fn test_flip_none_leaves_destination() {
        let src = buffer_of(2, 2, &[A, B, C, D]);
        let mut dst = buffer_of(2, 2, &[D, D, D, D]);
        flip(&src.view(), &mut dst.view_mut(), FlipMode::None);
        assert_eq!(dst, buffer_of(2, 2, &[D, D, D, D]));
    }

    #[test]
    fn test_flip_horizontal_single_row() {
        let src = buffer_of(3, 1, &[A, B, C]);
        assert_eq!(
            flipped(&src, FlipMode::Horizontal),
            buffer_of(3, 1, &[C, B, A])
        );
        // A single row is its own vertical mirror
        assert_eq!(flipped(&src, FlipMode::Vertical), src);
    }

    #[test]
    fn test_flip_vertical_single_column() {
        let src = buffer_of(1, 3, &[A, B, C]);
        assert_eq!(
            flipped(&src, FlipMode::Vertical),
            buffer_of(1, 3, &[C, B, A])
        );
        assert_eq!(flipped(&src, FlipMode::Horizontal), src);
    }

    #[test]
    fn test_flip_keeps_channel_order() {
        // Pixels move as units; bytes within a pixel are never reordered
        let src = buffer_of(2, 1, &[[1, 2, 3, 4], [5, 6, 7, 8]]);
        let out = flipped(&src, FlipMode::Horizontal);
        assert_eq!(out.pixels(), &[5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_flip_zero_area() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let src = PixelBuffer::blank(w, h).unwrap();
            for mode in [FlipMode::Horizontal, FlipMode::Vertical, FlipMode::Both] {
                let out = flipped(&src, mode);
                assert!(out.pixels().is_empty());
            }
        }
    }
}
