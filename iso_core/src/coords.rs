//! Lattice coordinate mathematics.
//!
//! Maps local cube corners to global lattice points, lattice points to their
//! linear index `x + y*size + z*size²`, and lattice edges to their canonical
//! [`EdgeId`]. The linear index is what makes vertices emitted by adjacent
//! cells comparable, so it is computed from global coordinates only.

use crate::marching_cubes::{edge_corners, CORNER_OFFSETS};
use crate::types::{EdgeId, LatticeCoord, Point3};

/// Linear index of a lattice point in a `size³` grid.
///
/// # Example
/// ```
/// use iso_core::coords::lattice_index;
/// use iso_core::LatticeCoord;
///
/// assert_eq!(lattice_index(LatticeCoord::new(1, 2, 3), 10), 1 + 2 * 10 + 3 * 100);
/// ```
#[inline]
pub const fn lattice_index(coord: LatticeCoord, size: u32) -> u32 {
    coord.x + coord.y * size + coord.z * size * size
}

/// Inverse of [`lattice_index`].
#[inline]
pub const fn lattice_from_index(index: u32, size: u32) -> LatticeCoord {
    LatticeCoord::new(index % size, (index / size) % size, index / (size * size))
}

/// Global lattice point of corner `corner` of the cell whose minimum corner is `cell`.
#[inline]
pub fn corner_lattice(cell: LatticeCoord, corner: usize) -> LatticeCoord {
    debug_assert!(corner < 8, "corner index {} out of range", corner);
    cell.offset(CORNER_OFFSETS[corner])
}

/// Lattice-space positions of the 8 corners of `cell`, in table order.
#[inline]
pub fn cell_corner_positions(cell: LatticeCoord) -> [Point3; 8] {
    let mut positions = [Point3::default(); 8];
    for (i, position) in positions.iter_mut().enumerate() {
        *position = Point3::from(cell.offset(CORNER_OFFSETS[i]));
    }
    positions
}

/// Canonical identity of cube edge `edge` of `cell` in a `size³` grid.
///
/// # Panics
/// Panics if `edge >= 12`.
#[inline]
pub fn edge_id(cell: LatticeCoord, edge: usize, size: u32) -> EdgeId {
    let (a, b) = edge_corners(edge);
    EdgeId::new(
        lattice_index(corner_lattice(cell, a), size),
        lattice_index(corner_lattice(cell, b), size),
    )
}

/// Number of cells in a grid of `size` lattice points per axis.
#[inline]
pub const fn cell_count(size: u32) -> usize {
    if size < 2 {
        return 0;
    }
    let n = (size - 1) as usize;
    n * n * n
}

/// Map a lattice-space point to output space.
///
/// The grid is centred on the origin by subtracting `size / 2` on every axis,
/// then scaled by `spacing`.
#[inline]
pub fn lattice_to_output(point: Point3, size: u32, spacing: f32) -> Point3 {
    (point - Point3::splat(size as f32 / 2.0)) * spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_index_roundtrip() {
        let size = 7;
        for index in 0..size * size * size {
            let coord = lattice_from_index(index, size);
            assert_eq!(lattice_index(coord, size), index);
        }
    }

    #[test]
    fn test_corner_lattice_uses_global_coords() {
        let cell = LatticeCoord::new(2, 3, 4);
        assert_eq!(corner_lattice(cell, 0), LatticeCoord::new(2, 3, 4));
        assert_eq!(corner_lattice(cell, 2), LatticeCoord::new(3, 3, 5));
        assert_eq!(corner_lattice(cell, 6), LatticeCoord::new(3, 4, 5));
    }

    #[test]
    fn test_shared_edge_has_same_id_from_both_cells() {
        let size = 5;
        // Edge 1 of cell (0,0,0) runs (1,0,0)-(1,0,1); edge 3 of cell (1,0,0)
        // runs (1,0,1)-(1,0,0), the same lattice edge walked the other way.
        let left = edge_id(LatticeCoord::new(0, 0, 0), 1, size);
        let right = edge_id(LatticeCoord::new(1, 0, 0), 3, size);
        assert_eq!(left, right);
        assert_eq!(left, EdgeId::new(1, 1 + 25));
    }

    #[test]
    fn test_cell_corner_positions() {
        let positions = cell_corner_positions(LatticeCoord::new(1, 1, 1));
        assert_eq!(positions[0], Point3::new(1.0, 1.0, 1.0));
        assert_eq!(positions[6], Point3::new(2.0, 2.0, 2.0));
        assert_eq!(positions[3], Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(2), 1);
        assert_eq!(cell_count(10), 729);
        assert_eq!(cell_count(1), 0);
    }

    #[test]
    fn test_lattice_to_output_centres_grid() {
        let p = lattice_to_output(Point3::new(5.0, 5.0, 5.0), 10, 1.0);
        assert_eq!(p, Point3::splat(0.0));

        let p = lattice_to_output(Point3::new(0.0, 10.0, 5.0), 10, 0.5);
        assert_eq!(p, Point3::new(-2.5, 2.5, 0.0));
    }
}
