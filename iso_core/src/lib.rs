//! # iso_core
//!
//! Pure Marching Cubes algorithms for extracting isosurfaces from scalar fields
//! sampled on a regular lattice.
//!
//! This crate holds the parts of the pipeline that are pure functions of their
//! inputs: the lookup tables, cell classification, edge interpolation and the
//! lattice bookkeeping that gives every lattice edge a canonical identity.
//! Grid traversal, deduplication and mesh output live in `iso_rs`.
//!
//! ## Features
//!
//! - **no_std compatible**: Works in embedded environments with the `alloc` feature
//! - **Compile-time tables**: The 256-row triangulation table is a `const` array
//! - **Shared-edge identity**: Vertices emitted by adjacent cells on the same
//!   lattice edge carry the same [`EdgeId`] and bit-identical positions
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables standard library support
//! - `alloc`: Enables heap allocation (Vec, etc.) without full std
//!
//! ## Modules
//!
//! - [`types`]: Core data types (Point3, LatticeCoord, CubeIndex, EdgeId, RawVertex)
//! - [`traits`]: The [`ScalarField`] contract and corner enumeration helpers
//! - [`coords`]: Lattice index and edge identity functions
//! - [`marching_cubes`]: Tables, classifier, interpolator and per-cell triangulation
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```
//! use iso_core::prelude::*;
//!
//! let field = |p: Point3| p.y;
//! let sample = classify_cell(&field, LatticeCoord::new(0, 0, 0), 0.5);
//! assert_eq!(triangulation(sample.cube_index).count(), 2);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Conditional std/alloc support
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal alloc prelude for conditional compilation
#[cfg(feature = "std")]
mod alloc_prelude {
    pub use std::vec::Vec;
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
mod alloc_prelude {
    pub use alloc::vec::Vec;
}

pub mod coords;
pub mod error;
pub mod marching_cubes;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::coords::{
        cell_corner_positions, cell_count, corner_lattice, edge_id, lattice_from_index,
        lattice_index, lattice_to_output,
    };
    pub use crate::error::IsoCoreError;
    pub use crate::marching_cubes::{
        classify_cell, compute_cube_index, edge_corners, interpolate_vertex,
        process_cell_no_alloc, triangulate_cell, triangulation, CellSample,
    };
    pub use crate::traits::ScalarField;
    pub use crate::types::{CubeIndex, EdgeId, LatticeCoord, Point3, RawVertex};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::marching_cubes::process_cell;
}

// Re-export everything at crate root for convenience
pub use coords::{
    cell_corner_positions, cell_count, corner_lattice, edge_id, lattice_from_index,
    lattice_index, lattice_to_output,
};
pub use error::IsoCoreError;
pub use traits::ScalarField;
pub use types::{CubeIndex, EdgeId, LatticeCoord, Point3, RawVertex};
