//! Core types for isosurface extraction.
//!
//! Points, lattice coordinates, cube indices and the canonical edge identity
//! shared by every cell that touches a lattice edge.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::IsoCoreError;

/// A 3D point with named fields for clarity.
///
/// Used both for lattice-space sample positions and for output vertices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new Point3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Point3 with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Linear interpolation between two points.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Dot product with another point (treating both as vectors).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another point (treating both as vectors).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
            z: if self.z < other.z { self.z } else { other.z },
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
            z: if self.z > other.z { self.z } else { other.z },
        }
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

impl From<LatticeCoord> for Point3 {
    #[inline]
    fn from(c: LatticeCoord) -> Self {
        Self::new(c.x as f32, c.y as f32, c.z as f32)
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Point3> for f32 {
    type Output = Point3;

    #[inline]
    fn mul(self, point: Point3) -> Point3 {
        point * self
    }
}

impl Div<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Integer lattice point of the sampling grid.
///
/// Cells are addressed by their minimum corner, so a cell coordinate is also
/// a `LatticeCoord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LatticeCoord {
    /// X index.
    pub x: u32,
    /// Y index.
    pub y: u32,
    /// Z index.
    pub z: u32,
}

impl LatticeCoord {
    /// Create a new LatticeCoord.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Offset this coordinate by a corner offset.
    #[inline]
    pub const fn offset(self, (dx, dy, dz): (u32, u32, u32)) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// 8-bit corner classification of a cell.
///
/// Bit `i` is set when corner `i` (in [`CORNER_OFFSETS`](crate::marching_cubes::CORNER_OFFSETS)
/// order) samples strictly below the iso threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CubeIndex(pub u8);

impl CubeIndex {
    /// Every corner above or at the threshold.
    pub const EMPTY: Self = Self(0);
    /// Every corner below the threshold.
    pub const FULL: Self = Self(0xFF);

    /// The raw bitmask as a table row index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True if corner `corner` is below the threshold.
    #[inline]
    pub const fn contains(self, corner: usize) -> bool {
        corner < 8 && (self.0 >> corner) & 1 == 1
    }

    /// True for the two configurations that never produce triangles.
    #[inline]
    pub const fn is_trivial(self) -> bool {
        self.0 == 0 || self.0 == 0xFF
    }
}

impl TryFrom<usize> for CubeIndex {
    type Error = IsoCoreError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .map(CubeIndex)
            .map_err(|_| IsoCoreError::CubeIndexOutOfRange { index })
    }
}

impl fmt::Display for CubeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Orientation-independent identity of a lattice edge.
///
/// Holds the global lattice indices of both endpoints with `lo <= hi`, so two
/// cells sharing an edge derive the same id no matter which corner they
/// consider first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EdgeId {
    /// Smaller endpoint lattice index.
    pub lo: u32,
    /// Larger endpoint lattice index.
    pub hi: u32,
}

impl EdgeId {
    /// Build the normalised id of the edge between lattice indices `a` and `b`.
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// One triangle corner as emitted by a cell, before deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawVertex {
    /// Interpolated crossing point in lattice space.
    pub position: Point3,
    /// Lattice edge the point lies on.
    pub edge: EdgeId,
}

impl RawVertex {
    /// Create a new RawVertex.
    #[inline]
    pub const fn new(position: Point3, edge: EdgeId) -> Self {
        Self { position, edge }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Point3::splat(3.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Point3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Point3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_point_lerp() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, 6.0);
        assert_eq!(a.lerp(b, 0.5), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_point_cross_and_length() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
        assert!((Point3::new(3.0, 4.0, 0.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_finite() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_lattice_offset() {
        let c = LatticeCoord::new(3, 4, 5);
        assert_eq!(c.offset((1, 0, 1)), LatticeCoord::new(4, 4, 6));
        assert_eq!(Point3::from(c), Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_cube_index_bits() {
        let idx = CubeIndex(0b0100_0001);
        assert!(idx.contains(0));
        assert!(idx.contains(6));
        assert!(!idx.contains(1));
        assert!(!idx.contains(8));
        assert!(!idx.is_trivial());
        assert!(CubeIndex::EMPTY.is_trivial());
        assert!(CubeIndex::FULL.is_trivial());
    }

    #[test]
    fn test_cube_index_try_from() {
        assert_eq!(CubeIndex::try_from(255usize), Ok(CubeIndex(255)));
        assert_eq!(
            CubeIndex::try_from(256usize),
            Err(IsoCoreError::CubeIndexOutOfRange { index: 256 })
        );
    }

    #[test]
    fn test_edge_id_normalised() {
        assert_eq!(EdgeId::new(7, 3), EdgeId::new(3, 7));
        let id = EdgeId::new(12, 2);
        assert_eq!(id.lo, 2);
        assert_eq!(id.hi, 12);
    }
}
