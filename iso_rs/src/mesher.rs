//! Grid traversal and mesh generation.
//!
//! Wraps iso_core's per-cell marching cubes with full-grid traversal, optional
//! rayon parallelism and deduplication.

use iso_core::marching_cubes::process_cell_no_alloc;
use iso_core::{lattice_to_output, LatticeCoord, RawVertex, ScalarField};
use log::{debug, info, warn};

use crate::config::MesherConfig;
use crate::dedup::{DedupStrategy, VertexDeduplicator};
use crate::error::{IsoError, Result};
use crate::mesh::Mesh;

/// A triangle as three raw corners.
pub type RawTriangle = [RawVertex; 3];

/// Triangle soup produced by one marching pass.
///
/// Holds three vertices per triangle. Positions are in whatever space the
/// producer used: lattice space from [`GridMesher::march`], output space from
/// [`Mesh::to_raw`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh {
    vertices: Vec<RawVertex>,
}

impl RawMesh {
    /// Create an empty raw mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a flat corner list.
    ///
    /// # Errors
    /// Returns [`IsoError::InvalidMesh`] if the length is not a multiple of 3.
    pub fn from_vertices(vertices: Vec<RawVertex>) -> Result<Self> {
        if vertices.len() % 3 != 0 {
            return Err(IsoError::InvalidMesh {
                message: format!(
                    "{} raw vertices is not a whole number of triangles",
                    vertices.len()
                ),
            });
        }
        Ok(Self { vertices })
    }

    pub(crate) fn from_vertices_unchecked(vertices: Vec<RawVertex>) -> Self {
        debug_assert_eq!(vertices.len() % 3, 0);
        Self { vertices }
    }

    /// All corners, three per triangle.
    #[inline]
    pub fn vertices(&self) -> &[RawVertex] {
        &self.vertices
    }

    /// Iterate triangles in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = &[RawVertex]> + '_ {
        self.vertices.chunks_exact(3)
    }

    /// Number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no triangles were emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Take the corner list.
    pub fn into_vertices(self) -> Vec<RawVertex> {
        self.vertices
    }
}

/// Marching cubes over a `size³` lattice.
///
/// Holds only configuration, so one mesher can serve any number of passes
/// and threads.
///
/// # Example
///
/// ```
/// use iso_rs::{MesherBuilder, SphereField};
///
/// let mesher = MesherBuilder::new(10).with_iso_threshold(9.5).build()?;
/// let mesh = mesher.generate(&SphereField::new(10));
/// assert_eq!(mesh.triangle_count(), 344);
/// # Ok::<(), iso_rs::IsoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridMesher {
    config: MesherConfig,
    dedup: VertexDeduplicator,
}

impl GridMesher {
    /// Create a mesher with the default deduplication strategy.
    ///
    /// # Errors
    /// Returns a configuration error for any parameter outside its range.
    pub fn new(config: MesherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, DedupStrategy::default()))
    }

    pub(crate) fn from_parts(config: MesherConfig, strategy: DedupStrategy) -> Self {
        Self {
            config,
            dedup: VertexDeduplicator::new(strategy),
        }
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// The deduplication strategy used by `generate*`.
    #[inline]
    pub fn dedup_strategy(&self) -> DedupStrategy {
        self.dedup.strategy()
    }

    /// Cells per axis.
    #[inline]
    fn cells_per_axis(&self) -> u32 {
        self.config.size.saturating_sub(1)
    }

    /// Run the full pipeline: march, deduplicate, move to output space.
    ///
    /// Uses rayon when the `parallel` feature is enabled. The result is the
    /// same either way.
    pub fn generate<F>(&self, field: &F) -> Mesh
    where
        F: ScalarField + Sync + ?Sized,
    {
        #[cfg(feature = "parallel")]
        {
            self.generate_parallel(field, 0)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.generate_sequential(field)
        }
    }

    /// Run the full pipeline on the calling thread.
    pub fn generate_sequential<F>(&self, field: &F) -> Mesh
    where
        F: ScalarField + ?Sized,
    {
        self.log_pass_start("sequential");
        let raw = self.march(field);
        self.finish(raw)
    }

    /// Run the full pipeline with z-slabs spread over a rayon pool.
    ///
    /// # Arguments
    /// * `field` - Scalar field to sample
    /// * `num_threads` - Pool size; 0 uses rayon's global pool
    #[cfg(feature = "parallel")]
    pub fn generate_parallel<F>(&self, field: &F, num_threads: usize) -> Mesh
    where
        F: ScalarField + Sync + ?Sized,
    {
        self.log_pass_start("parallel");

        let pool = if num_threads > 0 {
            match rayon::ThreadPoolBuilder::new().num_threads(num_threads).build() {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!(
                        "could not build a {}-thread pool ({}), using the global pool",
                        num_threads, err
                    );
                    None
                }
            }
        } else {
            None
        };

        let raw = match pool {
            Some(pool) => pool.install(|| self.march_parallel(field)),
            None => self.march_parallel(field),
        };
        self.finish(raw)
    }

    /// March every cell and collect the raw triangle soup.
    pub fn march<F>(&self, field: &F) -> RawMesh
    where
        F: ScalarField + ?Sized,
    {
        let mut vertices = Vec::new();
        self.for_each_triangle(field, |triangle| vertices.extend_from_slice(&triangle));
        RawMesh::from_vertices_unchecked(vertices)
    }

    /// March every cell, handing each triangle to `callback` as it is found.
    ///
    /// Triangles arrive in traversal order (z outer, then y, x inner) with
    /// positions in lattice space. Nothing is allocated per pass.
    ///
    /// # Example
    ///
    /// ```
    /// use iso_rs::{MesherBuilder, SphereField};
    ///
    /// let mesher = MesherBuilder::new(10).with_iso_threshold(9.5).build()?;
    /// let mut count = 0;
    /// mesher.for_each_triangle(&SphereField::new(10), |_triangle| count += 1);
    /// assert_eq!(count, 344);
    /// # Ok::<(), iso_rs::IsoError>(())
    /// ```
    pub fn for_each_triangle<F, C>(&self, field: &F, mut callback: C)
    where
        F: ScalarField + ?Sized,
        C: FnMut(RawTriangle),
    {
        for z in 0..self.cells_per_axis() {
            self.march_slab(field, z, &mut callback);
        }
    }

    fn march_slab<F, C>(&self, field: &F, z: u32, callback: &mut C)
    where
        F: ScalarField + ?Sized,
        C: FnMut(RawTriangle),
    {
        let cells = self.cells_per_axis();
        let size = self.config.size;
        let iso = self.config.iso_threshold;

        for y in 0..cells {
            for x in 0..cells {
                let (triangles, count) =
                    process_cell_no_alloc(field, LatticeCoord::new(x, y, z), size, iso);
                for triangle in &triangles[..count] {
                    callback(*triangle);
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn march_parallel<F>(&self, field: &F) -> RawMesh
    where
        F: ScalarField + Sync + ?Sized,
    {
        use log::trace;
        use rayon::prelude::*;

        // One private buffer per slab; collect keeps slab order
        let slabs: Vec<Vec<RawVertex>> = (0..self.cells_per_axis())
            .into_par_iter()
            .map(|z| {
                let mut slab = Vec::new();
                self.march_slab(field, z, &mut |triangle: RawTriangle| {
                    slab.extend_from_slice(&triangle)
                });
                trace!("slab z={} emitted {} triangles", z, slab.len() / 3);
                slab
            })
            .collect();

        let total = slabs.iter().map(Vec::len).sum();
        let mut vertices = Vec::with_capacity(total);
        for slab in slabs {
            vertices.extend(slab);
        }
        RawMesh::from_vertices_unchecked(vertices)
    }

    fn log_pass_start(&self, mode: &str) {
        debug!(
            "{} pass: size={} spacing={} iso={} dedup={:?}",
            mode,
            self.config.size,
            self.config.spacing,
            self.config.iso_threshold,
            self.dedup.strategy()
        );
    }

    fn finish(&self, raw: RawMesh) -> Mesh {
        let mut mesh = self.dedup.deduplicate(&raw);

        let size = self.config.size;
        let spacing = self.config.spacing;
        mesh.map_positions(|p| lattice_to_output(p, size, spacing));

        info!(
            "marched {} cells: {} raw vertices, {} distinct vertices, {} triangles",
            self.config.cell_count(),
            raw.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        if mesh.is_empty() {
            warn!(
                "iso threshold {} produced no surface in a {}³ grid",
                self.config.iso_threshold, size
            );
        }

        mesh
    }
}
