//! Marching Cubes cell processing.
//!
//! Classifies one lattice cell against the iso threshold and turns its table
//! row into triangles whose corners carry the canonical identity of the
//! lattice edge they were interpolated on.

use crate::coords::{cell_corner_positions, corner_lattice, edge_id, lattice_index};
use crate::traits::ScalarField;
use crate::types::{CubeIndex, LatticeCoord, Point3, RawVertex};

use super::tables::{edge_corners, triangulation, EDGE_TABLE, MAX_TRIANGLES_PER_CELL};

/// Interpolate the point where the field crosses `iso_value` along an edge.
///
/// Computes `p0 + (iso_value - v0) * (p1 - p0) / (v1 - v0)`. The fraction is
/// clamped to `[0, 1]` so the result always lies on the edge; when it is NaN
/// (both densities equal to the threshold, or NaN densities) the midpoint is
/// used. Finite corner positions therefore always give a finite vertex.
///
/// # Arguments
/// * `p0` - Position of the first corner
/// * `p1` - Position of the second corner
/// * `v0` - Field value at the first corner
/// * `v1` - Field value at the second corner
/// * `iso_value` - The iso threshold
#[inline]
pub fn interpolate_vertex(p0: Point3, p1: Point3, v0: f32, v1: f32, iso_value: f32) -> Point3 {
    let t = (iso_value - v0) / (v1 - v0);
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    p0.lerp(p1, t)
}

/// Compute the cube configuration index from corner values.
///
/// Bit `i` is set when `corner_values[i] < iso_value`. Values exactly at the
/// threshold count as outside.
#[inline]
pub fn compute_cube_index(corner_values: &[f32; 8], iso_value: f32) -> CubeIndex {
    let mut index = 0u8;
    for (i, &value) in corner_values.iter().enumerate() {
        if value < iso_value {
            index |= 1 << i;
        }
    }
    CubeIndex(index)
}

/// The sampled corners of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    /// Minimum lattice corner of the cell.
    pub cell: LatticeCoord,
    /// Corner classification.
    pub cube_index: CubeIndex,
    /// Lattice-space corner positions in table order.
    pub positions: [Point3; 8],
    /// Field values at the corners in table order.
    pub values: [f32; 8],
}

/// Sample the 8 corners of `cell` and classify them against `iso_value`.
pub fn classify_cell<F>(field: &F, cell: LatticeCoord, iso_value: f32) -> CellSample
where
    F: ScalarField + ?Sized,
{
    let positions = cell_corner_positions(cell);
    let mut values = [0.0f32; 8];
    for (value, &position) in values.iter_mut().zip(positions.iter()) {
        *value = field.density(position);
    }

    CellSample {
        cell,
        cube_index: compute_cube_index(&values, iso_value),
        positions,
        values,
    }
}

/// Compute the crossing vertex for every edge the surface cuts.
///
/// Each edge is interpolated from its endpoint with the smaller global lattice
/// index towards the larger one, so every cell sharing the edge produces the
/// same bits.
fn edge_vertices(sample: &CellSample, size: u32, iso_value: f32) -> [RawVertex; 12] {
    let mut vertices = [RawVertex::default(); 12];
    let edge_flags = EDGE_TABLE[sample.cube_index.index()];

    for (edge, vertex) in vertices.iter_mut().enumerate() {
        if edge_flags & (1 << edge) == 0 {
            continue;
        }
        let id = edge_id(sample.cell, edge, size);
        let (a, b) = edge_corners(edge);
        let (lo, hi) = if lattice_index(corner_lattice(sample.cell, a), size) == id.lo {
            (a, b)
        } else {
            (b, a)
        };

        let position = interpolate_vertex(
            sample.positions[lo],
            sample.positions[hi],
            sample.values[lo],
            sample.values[hi],
            iso_value,
        );
        *vertex = RawVertex::new(position, id);
    }

    vertices
}

/// Triangulate an already classified cell without allocating.
///
/// Returns a fixed array of up to five triangles plus the number that are valid.
pub fn triangulate_cell(
    sample: &CellSample,
    size: u32,
    iso_value: f32,
) -> ([[RawVertex; 3]; MAX_TRIANGLES_PER_CELL], usize) {
    let mut triangles = [[RawVertex::default(); 3]; MAX_TRIANGLES_PER_CELL];
    if sample.cube_index.is_trivial() {
        return (triangles, 0);
    }

    let vertices = edge_vertices(sample, size, iso_value);
    let mut count = 0;
    for [e0, e1, e2] in triangulation(sample.cube_index) {
        triangles[count] = [vertices[e0], vertices[e1], vertices[e2]];
        count += 1;
    }

    (triangles, count)
}

/// Process a single cell without dynamic allocation.
///
/// # Arguments
/// * `field` - Scalar field sampled at the lattice corners
/// * `cell` - Minimum lattice corner of the cell
/// * `size` - Lattice points per axis (used for global edge identity)
/// * `iso_value` - The iso threshold
///
/// # Returns
/// A tuple of (triangles, count) where triangles is a fixed array and count
/// is the number of valid triangles, each in table winding order.
pub fn process_cell_no_alloc<F>(
    field: &F,
    cell: LatticeCoord,
    size: u32,
    iso_value: f32,
) -> ([[RawVertex; 3]; MAX_TRIANGLES_PER_CELL], usize)
where
    F: ScalarField + ?Sized,
{
    debug_assert!(
        cell.x + 1 < size && cell.y + 1 < size && cell.z + 1 < size,
        "cell {:?} outside a grid of size {}",
        cell,
        size
    );
    let sample = classify_cell(field, cell, iso_value);
    triangulate_cell(&sample, size, iso_value)
}

/// Process a single cell and collect its triangles.
///
/// Returns an empty vector when the cell is entirely inside or outside.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn process_cell<F>(
    field: &F,
    cell: LatticeCoord,
    size: u32,
    iso_value: f32,
) -> crate::alloc_prelude::Vec<[RawVertex; 3]>
where
    F: ScalarField + ?Sized,
{
    let (triangles, count) = process_cell_no_alloc(field, cell, size, iso_value);
    triangles[..count].to_vec()
}
