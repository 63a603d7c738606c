//! Quarter-turn rotation.
//!
//! Rotations are counter-clockwise. A quarter turn maps each source column to
//! a destination row, so no row survives contiguously and pixels are copied
//! one at a time. The half turn is a flip on both axes, and the
//! three-quarter turn is a quarter turn followed by a half turn.
//!
//! For a 90 degree turn of a `w` x `h` source into an `h` x `w` destination:
//! ```text
//! dst(col = y, row = w - 1 - x) = src(col = x, row = y)
//! ```

use super::flip::flip;
use crate::buffer::{PixelBuffer, PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::ops::{FlipMode, RotateCode};

/// Rotate `source` into `destination`.
///
/// The destination is expected to be `rotation.output_dimensions()` of the
/// source. [`RotateCode::None`] and zero-area sources write nothing.
pub(crate) fn rotate(
    source: &PixelView<'_>,
    destination: &mut PixelViewMut<'_>,
    rotation: RotateCode,
) {
    debug_assert_eq!(
        rotation.output_dimensions(source.width, source.height),
        (destination.width, destination.height)
    );

    if source.is_empty() {
        return;
    }

    match rotation {
        RotateCode::None => {}
        RotateCode::Rotate90 => rotate_90(source, destination),
        RotateCode::Rotate180 => flip(source, destination, FlipMode::Both),
        RotateCode::Rotate270 => {
            let mut scratch = PixelBuffer::scratch_like(destination);
            rotate_90(source, &mut scratch.view_mut());
            flip(&scratch.view(), destination, FlipMode::Both);
        }
    }
}

fn rotate_90(source: &PixelView<'_>, destination: &mut PixelViewMut<'_>) {
    let src_w = source.width as usize;
    let src_h = source.height as usize;

    for (y, src_row) in source.pixels.chunks_exact(source.row_bytes()).enumerate() {
        for (x, src_px) in src_row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            let dst_idx = ((src_w - 1 - x) * src_h + y) * BYTES_PER_PIXEL;
            destination.pixels[dst_idx..dst_idx + BYTES_PER_PIXEL].copy_from_slice(src_px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 4] = [1, 1, 1, 255];
    const B: [u8; 4] = [2, 2, 2, 255];
    const C: [u8; 4] = [3, 3, 3, 255];
    const D: [u8; 4] = [4, 4, 4, 255];
    const E: [u8; 4] = [5, 5, 5, 255];
    const F: [u8; 4] = [6, 6, 6, 255];

    fn buffer_of(width: u32, height: u32, pixels: &[[u8; 4]]) -> PixelBuffer {
        PixelBuffer::new(width, height, pixels.concat()).unwrap()
    }

    fn rotated(src: &PixelBuffer, rotation: RotateCode) -> PixelBuffer {
        let (w, h) = rotation.output_dimensions(src.width(), src.height());
        let mut dst = PixelBuffer::blank(w, h).unwrap();
        rotate(&src.view(), &mut dst.view_mut(), rotation);
        dst
    }

    #[test]
    fn test_rotate_90_2x2() {
        // A B      B D
        // C D  ->  A C
        let src = buffer_of(2, 2, &[A, B, C, D]);
        assert_eq!(
            rotated(&src, RotateCode::Rotate90),
            buffer_of(2, 2, &[B, D, A, C])
        );
    }

    #[test]
    fn test_rotate_90_landscape() {
        // A B C        C F
        // D E F   ->   B E
        //              A D
        let src = buffer_of(3, 2, &[A, B, C, D, E, F]);
        let out = rotated(&src, RotateCode::Rotate90);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 3);
        assert_eq!(out, buffer_of(2, 3, &[C, F, B, E, A, D]));
    }

    #[test]
    fn test_rotate_180_landscape() {
        let src = buffer_of(3, 2, &[A, B, C, D, E, F]);
        assert_eq!(
            rotated(&src, RotateCode::Rotate180),
            buffer_of(3, 2, &[F, E, D, C, B, A])
        );
    }

    #[test]
    fn test_rotate_270_landscape() {
        // A B C        D A
        // D E F   ->   E B
        //              F C
        let src = buffer_of(3, 2, &[A, B, C, D, E, F]);
        let out = rotated(&src, RotateCode::Rotate270);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 3);
        assert_eq!(out, buffer_of(2, 3, &[D, A, E, B, F, C]));
    }

    #[test]
    fn test_rotate_none_writes_nothing() {
        let src = buffer_of(2, 2, &[A, B, C, D]);
        let mut dst = buffer_of(2, 2, &[E, E, E, E]);
        rotate(&src.view(), &mut dst.view_mut(), RotateCode::None);
        assert_eq!(dst, buffer_of(2, 2, &[E, E, E, E]));
    }

    #[test]
    fn test_rotate_single_pixel() {
        let src = buffer_of(1, 1, &[A]);
        for rotation in [
            RotateCode::Rotate90,
            RotateCode::Rotate180,
            RotateCode::Rotate270,
        ] {
            assert_eq!(rotated(&src, rotation), src);
        }
    }

    #[test]
    fn test_rotate_zero_area() {
        for (w, h) in [(0, 0), (0, 3), (3, 0)] {
            let src = PixelBuffer::blank(w, h).unwrap();
            for rotation in [
                RotateCode::Rotate90,
                RotateCode::Rotate180,
                RotateCode::Rotate270,
            ] {
                let out = rotated(&src, rotation);
                assert!(out.pixels().is_empty());
            }
        }
    }
}
