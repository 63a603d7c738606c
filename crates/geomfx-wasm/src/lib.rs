//! geomfx WASM - WebAssembly bindings for geomfx
//!
//! This crate exposes the geomfx-core geometry operations to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - the [`JsBitmap`] host image (packed RGBA)
//! - `transform` - flip, rotate, crop and straighten bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmap, apply_filter_rotate } from '@geomfx/wasm';
//!
//! await init();
//!
//! const src = new JsBitmap(width, height, rgbaBytes);
//! const dst = JsBitmap.blank(height, width);
//! apply_filter_rotate(src, dst, 1); // 90 degrees counter-clockwise
//! ```

use wasm_bindgen::prelude::*;

mod transform;
mod types;

pub use transform::{
    apply_filter_crop, apply_filter_flip, apply_filter_rotate, apply_filter_straighten,
    apply_geometry, apply_geometry_into, geometry_output_size,
};
pub use types::JsBitmap;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
