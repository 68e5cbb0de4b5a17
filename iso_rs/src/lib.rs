//! # iso_rs
//!
//! Isosurface meshing runtime built on `iso_core`.
//!
//! This crate turns a scalar field sampled over a `size³` lattice into an
//! indexed triangle mesh:
//!
//! - **Traversal**: every one of the `(size-1)³` cells is classified and
//!   triangulated, z outermost and x innermost
//! - **Parallelism**: z-slabs are marched on a rayon pool and merged in slab
//!   order, so parallel output equals sequential output
//! - **Deduplication**: corners are merged by lattice edge identity, in O(n)
//!   with a hash map or O(n log n) with a stable sort
//! - **Output**: vertices centred on the origin and scaled by the lattice
//!   spacing, ready for OBJ export or upload to a renderer
//!
//! ## Quick Start
//!
//! ```
//! use iso_rs::{MesherBuilder, MeshStats, SphereField};
//!
//! // Sphere of radius 3 centred in a 10³ grid
//! let mesher = MesherBuilder::new(10)
//!     .with_spacing(1.0)
//!     .with_iso_threshold(9.0)
//!     .build()?;
//!
//! let mesh = mesher.generate(&SphereField::new(10));
//! let stats = MeshStats::from_mesh(&mesh);
//! assert!(stats.triangle_count > 0);
//!
//! let obj = mesh.to_obj();
//! assert!(obj.contains("f "));
//! # Ok::<(), iso_rs::IsoError>(())
//! ```
//!
//! ## Custom fields
//!
//! Any `Fn(Point3) -> f32` is a [`ScalarField`]:
//!
//! ```
//! use iso_rs::{MesherBuilder, Point3};
//!
//! let mesher = MesherBuilder::new(8).with_iso_threshold(3.5).build()?;
//! let plane = |p: Point3| p.y;
//! let mesh = mesher.generate(&plane);
//! assert_eq!(mesh.triangle_count(), 2 * 7 * 7);
//! # Ok::<(), iso_rs::IsoError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): rayon-parallel generation
//! - `serde`: `Serialize`/`Deserialize` for configuration types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod config;
mod dedup;
mod error;
mod field;
mod mesh;
mod mesher;

pub use builder::MesherBuilder;
pub use config::{MesherConfig, MAX_SIZE, MAX_SPACING, MIN_SIZE};
pub use dedup::{DedupStrategy, VertexDeduplicator};
pub use error::{IsoError, Result};
pub use field::{FieldKind, PerlinField, SphereField};
pub use mesh::{Mesh, MeshStats};
pub use mesher::{GridMesher, RawMesh, RawTriangle};

// Re-export iso_core types for convenience
pub use iso_core::{CubeIndex, EdgeId, IsoCoreError, LatticeCoord, Point3, RawVertex, ScalarField};

/// Prelude module for convenient imports.
///
/// ```
/// use iso_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::MesherBuilder;
    pub use crate::config::MesherConfig;
    pub use crate::dedup::DedupStrategy;
    pub use crate::error::{IsoError, Result};
    pub use crate::field::{FieldKind, PerlinField, SphereField};
    pub use crate::mesh::{Mesh, MeshStats};
    pub use crate::mesher::{GridMesher, RawMesh};

    pub use iso_core::{EdgeId, Point3, ScalarField};
}
