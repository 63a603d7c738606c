//! Pixel relocation engines: flip, rotate, crop and the straighten
//! placeholder.
//!
//! Each engine copies from a source view into a destination view and assumes
//! the facade has already checked dimensions. Scratch buffers needed for
//! two-pass operations (flip on both axes, 270 degree rotation) live only for
//! the duration of one call.
//!
//! # Coordinate System
//!
//! - Buffers are row-major, 4 bytes per pixel, origin at the top-left corner
//! - Rotation is counter-clockwise for positive quarter turns
//! - Crop offsets and sizes are in whole pixels

mod crop;
mod flip;
mod rotate;
mod straighten;

pub(crate) use crop::{crop, legacy_check as legacy_crop_check, region_check as crop_region_check};
pub(crate) use flip::flip;
pub(crate) use rotate::rotate;
pub(crate) use straighten::straighten;
pub use straighten::DIAGNOSTIC_LEVEL;
