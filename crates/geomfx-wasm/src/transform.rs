//! WASM bindings for geometry operations.
//!
//! The four `apply_filter_*` functions are the permissive host contract:
//! they borrow both bitmaps for one call, forward the bitmaps' declared sizes
//! to the core, and silently skip invalid requests. `apply_geometry` and
//! `apply_geometry_into` take an operation object and throw on invalid
//! geometry instead.

use crate::types::{to_js_error, JsBitmap};
use geomfx_core::{
    apply_crop, apply_flip, apply_rotate, apply_straighten, transformed, try_apply, GeometryError,
    GeometryOp,
};
use wasm_bindgen::prelude::*;

/// Mirror `src` into `dst`.
///
/// `flip` is a bitmask: 1 = horizontal, 2 = vertical, 3 = both. Does nothing
/// when the bitmaps differ in size.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const dst = JsBitmap.blank(src.width, src.height);
/// apply_filter_flip(src, dst, 1);
/// ```
#[wasm_bindgen]
pub fn apply_filter_flip(src: &JsBitmap, dst: &mut JsBitmap, flip: i32) {
    let (source, src_w, src_h) = src.raw();
    let (destination, dst_w, dst_h) = dst.raw_mut();
    apply_flip(source, src_w, src_h, destination, dst_w, dst_h, flip);
}

/// Rotate `src` into `dst` counter-clockwise.
///
/// `rotate` is 0 (none), 1 (90), 2 (180) or 3 (270). For 90 and 270 the
/// destination must have swapped dimensions.
#[wasm_bindgen]
pub fn apply_filter_rotate(src: &JsBitmap, dst: &mut JsBitmap, rotate: i32) {
    let (source, src_w, src_h) = src.raw();
    let (destination, dst_w, dst_h) = dst.raw_mut();
    apply_rotate(source, src_w, src_h, destination, dst_w, dst_h, rotate);
}

/// Copy the `dst`-sized region at `(offset_width, offset_height)` of `src`.
#[wasm_bindgen]
pub fn apply_filter_crop(src: &JsBitmap, dst: &mut JsBitmap, offset_width: u32, offset_height: u32) {
    let (source, src_w, src_h) = src.raw();
    let (destination, dst_w, dst_h) = dst.raw_mut();
    apply_crop(
        source,
        src_w,
        src_h,
        destination,
        dst_w,
        dst_h,
        offset_width,
        offset_height,
    );
}

/// Straighten placeholder: fills `dst` with a diagnostic pattern.
#[wasm_bindgen]
pub fn apply_filter_straighten(src: &JsBitmap, dst: &mut JsBitmap, angle: f32) {
    let (source, src_w, src_h) = src.raw();
    let (destination, dst_w, dst_h) = dst.raw_mut();
    apply_straighten(source, src_w, src_h, destination, dst_w, dst_h, angle);
}

/// Apply an operation object and return a new bitmap.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = apply_geometry(image, { op: "rotate", rotation: "rotate90" });
/// const cropped = apply_geometry(image, {
///   op: "crop", offsetWidth: 10, offsetHeight: 10, width: 100, height: 80,
/// });
/// ```
#[wasm_bindgen]
pub fn apply_geometry(image: &JsBitmap, op: JsValue) -> Result<JsBitmap, JsValue> {
    let op = parse_op(op)?;
    geometry(image, &op).map_err(to_js_error)
}

/// Apply an operation object into an existing destination bitmap.
#[wasm_bindgen]
pub fn apply_geometry_into(src: &JsBitmap, dst: &mut JsBitmap, op: JsValue) -> Result<(), JsValue> {
    let op = parse_op(op)?;
    geometry_into(src, dst, &op).map_err(to_js_error)
}

/// Destination `[width, height]` an operation object needs for `image`.
#[wasm_bindgen]
pub fn geometry_output_size(image: &JsBitmap, op: JsValue) -> Result<Vec<u32>, JsValue> {
    let op = parse_op(op)?;
    let (width, height) = op.output_dimensions(image.width(), image.height());
    Ok(vec![width, height])
}

fn parse_op(op: JsValue) -> Result<GeometryOp, JsValue> {
    serde_wasm_bindgen::from_value(op)
        .map_err(|e| JsValue::from_str(&format!("Invalid geometry operation: {}", e)))
}

fn geometry(image: &JsBitmap, op: &GeometryOp) -> Result<JsBitmap, GeometryError> {
    let result = transformed(&image.to_buffer()?, op)?;
    Ok(JsBitmap::from_buffer(result))
}

fn geometry_into(src: &JsBitmap, dst: &mut JsBitmap, op: &GeometryOp) -> Result<(), GeometryError> {
    let source = src.view()?;
    let mut destination = dst.view_mut()?;
    try_apply(op, &source, &mut destination)
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use geomfx_core::{FlipMode, Rect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_geometry_from_js_object() {
        let src = JsBitmap::new(2, 1, vec![1, 1, 1, 1, 2, 2, 2, 2]).unwrap();
        let op = serde_wasm_bindgen::to_value(&GeometryOp::Flip {
            mode: FlipMode::Horizontal,
        })
        .unwrap();
        let out = apply_geometry(&src, op).unwrap();
        assert_eq!(out.pixels(), vec![2, 2, 2, 2, 1, 1, 1, 1]);
    }

    #[wasm_bindgen_test]
    fn test_geometry_output_size_for_crop() {
        let src = JsBitmap::blank(10, 10).unwrap();
        let op = serde_wasm_bindgen::to_value(&GeometryOp::Crop(Rect::new(1, 2, 3, 4))).unwrap();
        assert_eq!(geometry_output_size(&src, op).unwrap(), vec![3, 4]);
    }

    #[wasm_bindgen_test]
    fn test_apply_geometry_rejects_unknown_op() {
        let src = JsBitmap::blank(1, 1).unwrap();
        let op = serde_wasm_bindgen::to_value(&"spin").unwrap();
        assert!(apply_geometry(&src, op).is_err());
    }
}
