//! Merging raw triangle corners into shared vertices.
//!
//! Corners are merged by [`EdgeId`] only. Every cell visiting a lattice edge
//! interpolates it in the same direction, so corners with equal ids already
//! carry bit-identical positions and no spatial tolerance is needed.

use std::collections::HashMap;

use iso_core::{EdgeId, Point3, RawVertex};

use crate::mesh::Mesh;
use crate::mesher::RawMesh;

/// How [`VertexDeduplicator`] finds corners that share an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DedupStrategy {
    /// Hash map keyed by edge. Vertices come out in first-occurrence order.
    #[default]
    Hashed,
    /// Stable sort by edge. Vertices come out in ascending edge order.
    Sorted,
}

/// Collapses a [`RawMesh`] into an indexed [`Mesh`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexDeduplicator {
    strategy: DedupStrategy,
}

impl VertexDeduplicator {
    /// Create a deduplicator using `strategy`.
    pub const fn new(strategy: DedupStrategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy.
    #[inline]
    pub const fn strategy(&self) -> DedupStrategy {
        self.strategy
    }

    /// Merge corners sharing an edge.
    ///
    /// The result has exactly `raw.len() / 3` triangles with the corner order
    /// of the input. For [`DedupStrategy::Hashed`], deduplicating
    /// `mesh.to_raw()` reproduces `mesh`.
    pub fn deduplicate(&self, raw: &RawMesh) -> Mesh {
        let (vertices, edge_ids, indices) = match self.strategy {
            DedupStrategy::Hashed => dedup_hashed(raw.vertices()),
            DedupStrategy::Sorted => dedup_sorted(raw.vertices()),
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Mesh::from_parts_unchecked(vertices, edge_ids, triangles)
    }
}

type Dedup = (Vec<Point3>, Vec<EdgeId>, Vec<u32>);

fn dedup_hashed(raw: &[RawVertex]) -> Dedup {
    let mut lookup: HashMap<EdgeId, u32> = HashMap::with_capacity(raw.len() / 2);
    let mut vertices = Vec::with_capacity(raw.len() / 2);
    let mut edge_ids = Vec::with_capacity(raw.len() / 2);
    let mut indices = Vec::with_capacity(raw.len());

    for v in raw {
        let index = *lookup.entry(v.edge).or_insert_with(|| {
            vertices.push(v.position);
            edge_ids.push(v.edge);
            (vertices.len() - 1) as u32
        });
        indices.push(index);
    }

    (vertices, edge_ids, indices)
}

fn dedup_sorted(raw: &[RawVertex]) -> Dedup {
    let mut order: Vec<usize> = (0..raw.len()).collect();
    // Stable, so the first corner in traversal order represents each edge
    order.sort_by_key(|&i| raw[i].edge);

    let mut vertices: Vec<Point3> = Vec::with_capacity(raw.len() / 2);
    let mut edge_ids: Vec<EdgeId> = Vec::with_capacity(raw.len() / 2);
    let mut indices = vec![0u32; raw.len()];

    for i in order {
        let v = &raw[i];
        if edge_ids.last() != Some(&v.edge) {
            vertices.push(v.position);
            edge_ids.push(v.edge);
        }
        indices[i] = (vertices.len() - 1) as u32;
    }

    (vertices, edge_ids, indices)
}
