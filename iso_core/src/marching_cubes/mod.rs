//! Marching Cubes mesh extraction.
//!
//! This module provides the per-cell half of the algorithm:
//!
//! - Compile-time lookup tables for cube configurations
//! - Cell classification and edge interpolation
//! - Both allocating and no-alloc variants for flexibility
//!
//! Grid traversal and vertex deduplication live in `iso_rs`.
//!
//! # Example
//!
//! ```
//! use iso_core::marching_cubes::process_cell_no_alloc;
//! use iso_core::{LatticeCoord, Point3};
//!
//! let field = |p: Point3| (p - Point3::splat(1.0)).length_squared();
//! let (triangles, count) = process_cell_no_alloc(&field, LatticeCoord::new(0, 0, 0), 2, 0.25);
//! assert_eq!(count, 1);
//! assert!(triangles[0].iter().all(|v| v.position.is_finite()));
//! ```

mod algorithm;
mod tables;

pub use algorithm::{
    classify_cell, compute_cube_index, interpolate_vertex, process_cell_no_alloc,
    triangulate_cell, CellSample,
};
pub use tables::{
    edge_corners, triangle_count, triangulation, try_edge_corners, try_triangulation,
    Triangulation, CORNER_A_FROM_EDGE, CORNER_B_FROM_EDGE, CORNER_OFFSETS, EDGE_TABLE,
    MAX_TRIANGLES_PER_CELL, TRI_SENTINEL, TRI_TABLE,
};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use algorithm::process_cell;
