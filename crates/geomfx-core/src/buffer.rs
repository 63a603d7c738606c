//! Packed RGBA pixel buffers.
//!
//! Buffers are row-major with 4 bytes per pixel and no row padding, so the
//! stride is always `width * 4`. The four bytes of a pixel are treated as an
//! opaque unit everywhere except the straighten placeholder, which addresses
//! individual channels through the offsets below.
//!
//! - [`PixelView`] / [`PixelViewMut`] borrow memory owned by a host image.
//! - [`PixelBuffer`] owns its memory; used for scratch space and for the
//!   allocating convenience API.

use crate::error::GeometryError;

/// Bytes per pixel for every buffer handled by this crate.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte offset of the red channel within a pixel.
pub const RED: usize = 0;
/// Byte offset of the green channel within a pixel.
pub const GREEN: usize = 1;
/// Byte offset of the blue channel within a pixel.
pub const BLUE: usize = 2;
/// Byte offset of the alpha channel within a pixel.
pub const ALPHA: usize = 3;

/// Number of bytes a `width` x `height` buffer occupies.
pub fn byte_len(width: u32, height: u32) -> Result<usize, GeometryError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(GeometryError::DimensionsOverflow { width, height })
}

fn check_len(width: u32, height: u32, actual: usize) -> Result<(), GeometryError> {
    let expected = byte_len(width, height)?;
    if expected != actual {
        return Err(GeometryError::BufferSizeMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Read-only view of a packed RGBA region.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    pub(crate) pixels: &'a [u8],
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl<'a> PixelView<'a> {
    /// Wrap `pixels` as a `width` x `height` buffer.
    ///
    /// Fails when the slice length is not exactly `width * height * 4`.
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Result<Self, GeometryError> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Number of pixels in the view.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// True when the view has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row `y`, or `None` past the bottom edge. A zero-area view has no rows.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if self.is_empty() || y >= self.height {
            return None;
        }
        let start = y as usize * self.row_bytes();
        self.pixels.get(start..start + self.row_bytes())
    }

    /// The 4 bytes of pixel `(x, y)`, or `None` outside the view (always
    /// `None` for a zero-area view).
    pub fn pixel(&self, x: u32, y: u32) -> Option<&'a [u8]> {
        if x >= self.width {
            return None;
        }
        let start = x as usize * BYTES_PER_PIXEL;
        self.row(y)?.get(start..start + BYTES_PER_PIXEL)
    }
}

/// Writable view of a packed RGBA region.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    pub(crate) pixels: &'a mut [u8],
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl<'a> PixelViewMut<'a> {
    /// Wrap `pixels` as a writable `width` x `height` buffer.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self, GeometryError> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[u8] {
        &*self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut *self.pixels
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            pixels: &*self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Writable row `y`; `None` past the bottom edge or for a zero-area view.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if self.is_empty() || y >= self.height {
            return None;
        }
        let row_bytes = self.row_bytes();
        let start = y as usize * row_bytes;
        self.pixels.get_mut(start..start + row_bytes)
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if x >= self.width {
            return None;
        }
        let start = x as usize * BYTES_PER_PIXEL;
        self.row_mut(y)?.get_mut(start..start + BYTES_PER_PIXEL)
    }
}

/// An owned packed RGBA buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is always width * height * 4.
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Take ownership of `pixels` as a `width` x `height` buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, GeometryError> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Zero-filled buffer.
    pub fn blank(width: u32, height: u32) -> Result<Self, GeometryError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; len],
        })
    }

    /// Scratch space shaped like `view`. The view already proved its size is
    /// addressable, so this cannot fail.
    pub(crate) fn scratch_like(view: &PixelViewMut<'_>) -> Self {
        Self {
            width: view.width,
            height: view.height,
            pixels: vec![0u8; view.pixels.len()],
        }
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    pub fn view_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is a zero-area buffer.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
