//! Indexed triangle mesh, statistics and OBJ export.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use iso_core::{EdgeId, Point3, RawVertex};
use log::debug;

use crate::error::{IsoError, Result};
use crate::mesher::RawMesh;

/// Distinct vertices plus index triples.
///
/// Every vertex remembers the lattice edge it was interpolated on. No two
/// vertices share an [`EdgeId`], and triangles keep the winding they were
/// emitted with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3>,
    edge_ids: Vec<EdgeId>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Assemble a mesh from its parts, checking every invariant.
    ///
    /// # Errors
    /// Returns [`IsoError::InvalidMesh`] if the parts are inconsistent.
    pub fn from_parts(
        vertices: Vec<Point3>,
        edge_ids: Vec<EdgeId>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self> {
        let mesh = Self {
            vertices,
            edge_ids,
            triangles,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Trusted constructor for the deduplicator, which upholds the invariants.
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<Point3>,
        edge_ids: Vec<EdgeId>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), edge_ids.len());
        Self {
            vertices,
            edge_ids,
            triangles,
        }
    }

    /// Distinct vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Lattice edge of each vertex, index-aligned with [`vertices`](Self::vertices).
    #[inline]
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_ids
    }

    /// Triangles as vertex index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Flat index buffer, three entries per triangle.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Split into `(vertices, edge_ids, triangles)`.
    pub fn into_parts(self) -> (Vec<Point3>, Vec<EdgeId>, Vec<[u32; 3]>) {
        (self.vertices, self.edge_ids, self.triangles)
    }

    /// Expand back into one raw vertex per triangle corner.
    pub fn to_raw(&self) -> RawMesh {
        let vertices = self
            .triangles
            .iter()
            .flatten()
            .map(|&i| RawVertex::new(self.vertices[i as usize], self.edge_ids[i as usize]))
            .collect();
        RawMesh::from_vertices_unchecked(vertices)
    }

    /// Apply `f` to every vertex position.
    pub fn map_positions<F>(&mut self, mut f: F)
    where
        F: FnMut(Point3) -> Point3,
    {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Check index range and edge uniqueness.
    ///
    /// # Errors
    /// Returns [`IsoError::InvalidMesh`] describing the first broken invariant.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() != self.edge_ids.len() {
            return Err(IsoError::InvalidMesh {
                message: format!(
                    "{} vertices but {} edge ids",
                    self.vertices.len(),
                    self.edge_ids.len()
                ),
            });
        }

        let count = self.vertices.len();
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i as usize >= count) {
                return Err(IsoError::InvalidMesh {
                    message: format!("triangle {} references vertex {} of {}", t, bad, count),
                });
            }
        }

        let mut seen = HashSet::with_capacity(count);
        for edge in &self.edge_ids {
            if !seen.insert(*edge) {
                return Err(IsoError::InvalidMesh {
                    message: format!("edge {} owns more than one vertex", edge),
                });
            }
        }

        Ok(())
    }

    /// Render as a Wavefront OBJ document.
    pub fn to_obj(&self) -> String {
        Obj(self).to_string()
    }

    /// Write as Wavefront OBJ.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", Obj(self))?;
        Ok(())
    }

    /// Write as Wavefront OBJ to a file, replacing any existing file.
    pub fn write_obj_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_obj(&mut writer)?;
        writer.flush()?;
        debug!(
            "wrote {} vertices and {} triangles to {}",
            self.vertex_count(),
            self.triangle_count(),
            path.display()
        );
        Ok(())
    }
}

struct Obj<'a>(&'a Mesh);

impl fmt::Display for Obj<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;
        writeln!(f, "# iso_rs marching cubes mesh")?;
        writeln!(
            f,
            "# {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        )?;
        writeln!(f)?;

        for v in &mesh.vertices {
            writeln!(f, "v {} {} {}", v.x, v.y, v.z)?;
        }

        writeln!(f)?;

        // OBJ indices are 1-based
        for [a, b, c] in &mesh.triangles {
            writeln!(f, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }

        Ok(())
    }
}

/// Mesh statistics after extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Number of distinct vertices.
    pub vertex_count: usize,
    /// Sum of triangle areas.
    pub surface_area: f32,
    /// Bounding box minimum (origin for an empty mesh).
    pub bbox_min: Point3,
    /// Bounding box maximum (origin for an empty mesh).
    pub bbox_max: Point3,
}

impl MeshStats {
    /// Compute statistics for a mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let vertices = mesh.vertices();

        let (bbox_min, bbox_max) = match vertices.split_first() {
            Some((&first, rest)) => rest
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
            None => (Point3::default(), Point3::default()),
        };

        let surface_area = mesh
            .triangles()
            .iter()
            .map(|&[a, b, c]| {
                let p0 = vertices[a as usize];
                let e1 = vertices[b as usize] - p0;
                let e2 = vertices[c as usize] - p0;
                e1.cross(e2).length() * 0.5
            })
            .sum();

        Self {
            triangle_count: mesh.triangle_count(),
            vertex_count: mesh.vertex_count(),
            surface_area,
            bbox_min,
            bbox_max,
        }
    }

    /// Extent of the bounding box on each axis.
    pub fn extent(&self) -> Point3 {
        self.bbox_max - self.bbox_min
    }
}
