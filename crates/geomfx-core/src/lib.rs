//! geomfx Core - pixel geometry for packed RGBA buffers
//!
//! This crate relocates pixels between a source and a destination buffer
//! (4 bytes per pixel, row-major, no padding) for a small set of operations:
//! axis flips, quarter-turn rotations, rectangular crops and a straighten
//! placeholder. Buffers are owned by the caller; the crate only allocates
//! call-scoped scratch space.
//!
//! # Module Structure
//!
//! - `buffer` - borrowed views and the owned [`PixelBuffer`]
//! - `ops` - operation parameters ([`FlipMode`], [`RotateCode`], [`Rect`], [`GeometryOp`])
//! - `facade` - validation and dispatch (permissive `apply_*`, strict `try_*`)
//! - `error` - [`GeometryError`]

pub mod buffer;
pub mod error;
pub mod facade;
pub mod ops;
mod transform;

pub use buffer::{PixelBuffer, PixelView, PixelViewMut, BYTES_PER_PIXEL};
pub use error::GeometryError;
pub use facade::{
    apply, apply_crop, apply_flip, apply_rotate, apply_straighten, transformed, try_apply,
    try_crop, try_flip, try_rotate, try_straighten,
};
pub use ops::{FlipMode, GeometryOp, Rect, RotateCode};
pub use transform::DIAGNOSTIC_LEVEL;
