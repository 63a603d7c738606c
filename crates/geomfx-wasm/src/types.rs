//! WASM-compatible bitmap type.
//!
//! [`JsBitmap`] is the host image handed to the geometry entry points. It
//! always holds exactly `width * height * 4` bytes.

use geomfx_core::{GeometryError, PixelBuffer, PixelView, PixelViewMut};
use wasm_bindgen::prelude::*;

/// A packed RGBA bitmap owned by JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// # Locking
///
/// Entry points borrow a bitmap for the duration of one call: shared for a
/// source, exclusive for a destination. Passing the same bitmap as both is
/// refused by wasm-bindgen's borrow check before any pixel is touched.
#[wasm_bindgen]
pub struct JsBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Bitmap width in pixels
    /// * `height` - Bitmap height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// Throws if `pixels` is not exactly `width * height * 4` bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        Self::try_new(width, height, pixels).map_err(to_js_error)
    }

    /// Create a zero-filled bitmap, typically a destination.
    pub fn blank(width: u32, height: u32) -> Result<JsBitmap, JsValue> {
        PixelBuffer::blank(width, height)
            .map(Self::from_buffer)
            .map_err(to_js_error)
    }

    /// Create a bitmap by copying a `Uint8Array`.
    pub fn from_uint8_array(
        width: u32,
        height: u32,
        data: &js_sys::Uint8Array,
    ) -> Result<JsBitmap, JsValue> {
        Self::new(width, height, data.to_vec())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, GeometryError> {
        PixelBuffer::new(width, height, pixels).map(Self::from_buffer)
    }

    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.into_pixels(),
        }
    }

    /// Copy into a core PixelBuffer.
    pub(crate) fn to_buffer(&self) -> Result<PixelBuffer, GeometryError> {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
    }

    /// Borrow as a source.
    pub(crate) fn view(&self) -> Result<PixelView<'_>, GeometryError> {
        PixelView::new(self.pixels.as_slice(), self.width, self.height)
    }

    /// Borrow as a destination.
    pub(crate) fn view_mut(&mut self) -> Result<PixelViewMut<'_>, GeometryError> {
        PixelViewMut::new(self.pixels.as_mut_slice(), self.width, self.height)
    }

    pub(crate) fn raw(&self) -> (&[u8], u32, u32) {
        (self.pixels.as_slice(), self.width, self.height)
    }

    pub(crate) fn raw_mut(&mut self) -> (&mut [u8], u32, u32) {
        (self.pixels.as_mut_slice(), self.width, self.height)
    }
}

pub(crate) fn to_js_error(err: GeometryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_creation() {
        let img = JsBitmap::try_new(100, 50, vec![0u8; 100 * 50 * 4]).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_bitmap_rejects_wrong_length() {
        let err = JsBitmap::try_new(2, 2, vec![0u8; 15]).err().unwrap();
        assert!(matches!(err, GeometryError::BufferSizeMismatch { .. }));
    }

    #[test]
    fn test_js_bitmap_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8, 4, 2]; // 2 RGBA pixels
        let img = JsBitmap::try_new(2, 1, pixels.clone()).unwrap();
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_buffer_round_trip() {
        let buffer = PixelBuffer::blank(20, 10).unwrap();
        let img = JsBitmap::from_buffer(buffer.clone());
        assert_eq!(img.width(), 20);
        assert_eq!(img.height(), 10);
        assert_eq!(img.to_buffer().unwrap(), buffer);
    }

    #[test]
    fn test_views_match_dimensions() {
        let mut img = JsBitmap::try_new(3, 2, vec![7u8; 24]).unwrap();
        assert_eq!(img.view().unwrap().pixel_count(), 6);
        assert_eq!(img.view_mut().unwrap().row_bytes(), 12);
    }
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_uint8_array() {
        let data = js_sys::Uint8Array::from(&[1u8, 2, 3, 4, 5, 6, 7, 8][..]);
        let img = JsBitmap::from_uint8_array(2, 1, &data).unwrap();
        assert_eq!(img.pixels(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[wasm_bindgen_test]
    fn test_constructor_throws_on_wrong_length() {
        assert!(JsBitmap::new(2, 2, vec![0u8; 4]).is_err());
    }
}
