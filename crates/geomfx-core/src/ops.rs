//! Operation parameters: flip modes, rotation codes, crop rectangles and the
//! [`GeometryOp`] variant that carries exactly one of them.
//!
//! The integer encodings (`FlipMode::from_bits`, `RotateCode::from_code`)
//! match what host bindings pass across the boundary.

use serde::{Deserialize, Serialize};

/// Mirroring axes for a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlipMode {
    /// No mirroring.
    #[default]
    None,
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
    /// Mirror both axes (same as a 180 degree rotation).
    Both,
}

impl FlipMode {
    /// Bit selecting horizontal mirroring.
    pub const HORIZONTAL_BIT: i32 = 1;
    /// Bit selecting vertical mirroring.
    pub const VERTICAL_BIT: i32 = 2;

    /// Decode a host bitmask: bit 0 = horizontal, bit 1 = vertical.
    ///
    /// Any other bits are ignored.
    pub fn from_bits(bits: i32) -> Self {
        let horizontal = bits & Self::HORIZONTAL_BIT != 0;
        let vertical = bits & Self::VERTICAL_BIT != 0;
        match (horizontal, vertical) {
            (true, true) => FlipMode::Both,
            (true, false) => FlipMode::Horizontal,
            (false, true) => FlipMode::Vertical,
            (false, false) => FlipMode::None,
        }
    }

    /// Encode back to the host bitmask.
    pub fn bits(self) -> i32 {
        match self {
            FlipMode::None => 0,
            FlipMode::Horizontal => Self::HORIZONTAL_BIT,
            FlipMode::Vertical => Self::VERTICAL_BIT,
            FlipMode::Both => Self::HORIZONTAL_BIT | Self::VERTICAL_BIT,
        }
    }

    pub fn has_horizontal(self) -> bool {
        matches!(self, FlipMode::Horizontal | FlipMode::Both)
    }

    pub fn has_vertical(self) -> bool {
        matches!(self, FlipMode::Vertical | FlipMode::Both)
    }
}

/// Quarter-turn rotation, positive direction counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum RotateCode {
    /// No rotation.
    #[default]
    None = 0,
    /// 90 degrees counter-clockwise.
    Rotate90 = 1,
    /// 180 degrees.
    Rotate180 = 2,
    /// 270 degrees counter-clockwise (90 clockwise).
    Rotate270 = 3,
}

impl RotateCode {
    /// Decode a host rotation code (0-3).
    ///
    /// Unknown codes map to [`RotateCode::None`], which leaves the
    /// destination untouched.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => RotateCode::Rotate90,
            2 => RotateCode::Rotate180,
            3 => RotateCode::Rotate270,
            _ => RotateCode::None,
        }
    }

    /// Map a multiple of 90 degrees to a rotation code.
    ///
    /// Negative angles are clockwise, so `-90` is [`RotateCode::Rotate270`].
    /// Returns `None` for angles that are not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(RotateCode::None),
            90 => Some(RotateCode::Rotate90),
            180 => Some(RotateCode::Rotate180),
            270 => Some(RotateCode::Rotate270),
            _ => None,
        }
    }

    /// Host code (0-3).
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn degrees(self) -> u32 {
        self as u32 * 90
    }

    /// Quarter and three-quarter turns exchange width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, RotateCode::Rotate90 | RotateCode::Rotate270)
    }

    /// Destination size for a `width` x `height` source.
    pub fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Axis-aligned crop region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    /// Left edge, pixels from the source's left border.
    pub offset_width: u32,
    /// Top edge, pixels from the source's top border.
    pub offset_height: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(offset_width: u32, offset_height: u32, width: u32, height: u32) -> Self {
        Self {
            offset_width,
            offset_height,
            width,
            height,
        }
    }

    /// Exclusive right edge, `None` on overflow.
    pub fn right(&self) -> Option<u32> {
        self.offset_width.checked_add(self.width)
    }

    /// Exclusive bottom edge, `None` on overflow.
    pub fn bottom(&self) -> Option<u32> {
        self.offset_height.checked_add(self.height)
    }

    /// True when the whole rectangle lies inside a `width` x `height` source.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        matches!(
            (self.right(), self.bottom()),
            (Some(r), Some(b)) if r <= width && b <= height
        )
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One geometry operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum GeometryOp {
    Flip { mode: FlipMode },
    Rotate { rotation: RotateCode },
    Crop(Rect),
    /// Placeholder; the angle is carried but not applied.
    Straighten { angle: f32 },
}

impl GeometryOp {
    /// Destination size this operation expects for a `width` x `height`
    /// source.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            GeometryOp::Flip { .. } | GeometryOp::Straighten { .. } => (width, height),
            GeometryOp::Rotate { rotation } => rotation.output_dimensions(width, height),
            GeometryOp::Crop(rect) => (rect.width, rect.height),
        }
    }

    /// True for operations that leave pixels where they are.
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            GeometryOp::Flip {
                mode: FlipMode::None
            } | GeometryOp::Rotate {
                rotation: RotateCode::None
            }
        )
    }
}
