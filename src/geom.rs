//! Board-space geometry: points, quarter-turn rotations, and the exact
//! integer rotation matrices used for axis-aligned snapping.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point (or displacement) in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate this vector about the origin by `rotation`.
    ///
    /// Uses integer cos/sin so multiples of 90° never drift.
    #[must_use]
    pub fn rotated(self, rotation: Rotation) -> Point {
        let (cos, sin) = rotation.cos_sin();
        let (cos, sin) = (f64::from(cos), f64::from(sin));
        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Rotate this point about `pivot` by `rotation`.
    #[must_use]
    pub fn rotated_about(self, pivot: Point, rotation: Rotation) -> Point {
        pivot + (self - pivot).rotated(rotation)
    }

    /// Scale both components by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Point {
        Point { x: self.x * factor, y: self.y * factor }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}


/// Rejected raw rotation value (not a multiple of 90 in `0..360`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid rotation: {0} (expected 0, 90, 180 or 270)")]
pub struct InvalidRotation(pub u16);

/// Axis-aligned orientation of a piece, clockwise in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All orientations in ascending order.
    pub const ALL: [Rotation; 4] = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Number of quarter turns from `Deg0`.
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Orientation reached after `turns` quarter turns from `Deg0`, mod 4.
    #[must_use]
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// This orientation advanced by `delta`, mod 360.
    #[must_use]
    pub fn plus(self, delta: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + delta.quarter_turns())
    }

    /// Exact `(cos, sin)` for this angle.
    #[must_use]
    pub fn cos_sin(self) -> (i32, i32) {
        match self {
            Self::Deg0 => (1, 0),
            Self::Deg90 => (0, 1),
            Self::Deg180 => (-1, 0),
            Self::Deg270 => (0, -1),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}
