//! Comprehensive Test Suite for iso_core
//!
//! Together these tests pin down the behaviour of the per-cell pipeline:
//! table contents, the corner and edge numbering, classification,
//! interpolation and lattice edge identity.
//!
//! # Test Categories
//!
//! 1. **Type Invariants** - Point3, LatticeCoord, CubeIndex, EdgeId
//! 2. **Corner Ordering** - Fixed corner enumeration and bit assignment
//! 3. **Table Invariants** - Every triangulation row and the edge map
//! 4. **Classification** - Cube index from sampled corners
//! 5. **Interpolation** - Edge crossing placement and degenerate edges
//! 6. **Edge Identity** - Global lattice indices shared between cells
//! 7. **Error Conditions** - Fallible lookups and contract panics

use iso_core::marching_cubes::*;
use iso_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Test Helpers
// =============================================================================

/// Squared distance to `center`.
fn sphere(center: Point3) -> impl Fn(Point3) -> f32 {
    move |p: Point3| (p - center).length_squared()
}

/// Corner values where exactly the corners in `mask` are below 0.5.
fn values_for_mask(mask: u8) -> [f32; 8] {
    let mut values = [1.0; 8];
    for (i, v) in values.iter_mut().enumerate() {
        if mask & (1 << i) != 0 {
            *v = 0.0;
        }
    }
    values
}

// =============================================================================
// SECTION 1: Type Invariants
// =============================================================================

#[test]
fn point3_arithmetic() {
    let a = Point3::new(1.0, 2.0, 3.0);
    let b = Point3::new(4.0, 6.0, 8.0);

    assert_eq!(a + b, Point3::new(5.0, 8.0, 11.0));
    assert_eq!(b - a, Point3::new(3.0, 4.0, 5.0));
    assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(b / 2.0, Point3::new(2.0, 3.0, 4.0));
    assert_eq!(-a, Point3::new(-1.0, -2.0, -3.0));
    assert_eq!(a.dot(b), 40.0);
    assert_eq!((b - a).length(), 50.0f32.sqrt());
}

#[test]
fn point3_cross_is_right_handed() {
    let x = Point3::new(1.0, 0.0, 0.0);
    let y = Point3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Point3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(x), Point3::new(0.0, 0.0, -1.0));
}

#[test]
fn point3_lerp_endpoints() {
    let a = Point3::new(1.0, 2.0, 3.0);
    let b = Point3::new(3.0, 2.0, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Point3::splat(2.0));
}

#[test]
fn cube_index_bits() {
    let cube = CubeIndex(0b1000_0101);
    assert!(cube.contains(0));
    assert!(!cube.contains(1));
    assert!(cube.contains(2));
    assert!(cube.contains(7));
    assert_eq!(cube.index(), 133);
    assert!(CubeIndex::EMPTY.is_trivial());
    assert!(CubeIndex::FULL.is_trivial());
    assert!(!cube.is_trivial());
}

#[test]
fn cube_index_try_from_range() {
    assert_eq!(CubeIndex::try_from(255usize), Ok(CubeIndex::FULL));
    assert_eq!(
        CubeIndex::try_from(256usize),
        Err(IsoCoreError::CubeIndexOutOfRange { index: 256 })
    );
}

#[test]
fn edge_id_is_normalised() {
    assert_eq!(EdgeId::new(7, 3), EdgeId::new(3, 7));
    let id = EdgeId::new(9, 2);
    assert_eq!((id.lo, id.hi), (2, 9));
    assert!(EdgeId::new(0, 5) < EdgeId::new(1, 2));
}

// =============================================================================
// SECTION 2: Corner Ordering
// =============================================================================

#[test]
fn corner_offsets_match_enumeration() {
    let expected = [
        (0, 0, 0),
        (1, 0, 0),
        (1, 0, 1),
        (0, 0, 1),
        (0, 1, 0),
        (1, 1, 0),
        (1, 1, 1),
        (0, 1, 1),
    ];
    assert_eq!(CORNER_OFFSETS, expected);
    for (i, &(dx, dy, dz)) in expected.iter().enumerate() {
        assert_eq!(corner_lattice(LatticeCoord::new(0, 0, 0), i), LatticeCoord::new(dx, dy, dz));
    }
}

#[test]
fn corner_positions_follow_offsets() {
    let cell = LatticeCoord::new(3, 4, 5);
    let positions = cell_corner_positions(cell);
    for (i, &(dx, dy, dz)) in CORNER_OFFSETS.iter().enumerate() {
        assert_eq!(
            positions[i],
            Point3::new((3 + dx) as f32, (4 + dy) as f32, (5 + dz) as f32)
        );
        assert_eq!(corner_lattice(cell, i), cell.offset((dx, dy, dz)));
    }
}

#[test]
fn edges_join_adjacent_corners() {
    for edge in 0..12 {
        let (a, b) = edge_corners(edge);
        let (ax, ay, az) = CORNER_OFFSETS[a];
        let (bx, by, bz) = CORNER_OFFSETS[b];
        let manhattan = ax.abs_diff(bx) + ay.abs_diff(by) + az.abs_diff(bz);
        assert_eq!(manhattan, 1, "edge {} joins non-adjacent corners", edge);
    }
}

#[test]
fn every_cube_edge_appears_once() {
    let mut seen = std::collections::HashSet::new();
    for edge in 0..12 {
        let (a, b) = edge_corners(edge);
        assert!(seen.insert((a.min(b), a.max(b))), "edge {} duplicated", edge);
    }
    assert_eq!(seen.len(), 12);
}

// =============================================================================
// SECTION 3: Table Invariants
// =============================================================================

#[test]
fn rows_are_whole_triangles_terminated_by_sentinel() {
    for (index, row) in TRI_TABLE.iter().enumerate() {
        let len = row.iter().position(|&e| e == TRI_SENTINEL).unwrap_or(16);
        assert!(len <= 15, "row {} has no room for the sentinel", index);
        assert_eq!(len % 3, 0, "row {} has a partial triangle", index);
        assert!(
            row[len..].iter().all(|&e| e == TRI_SENTINEL),
            "row {} has entries after the sentinel",
            index
        );
        assert!(row[..len].iter().all(|&e| (0..12).contains(&e)));

        let cube = CubeIndex(index as u8);
        assert_eq!(triangulation(cube).count() * 3, len);
        assert_eq!(triangle_count(cube), len / 3);
    }
}

#[test]
fn trivial_cubes_have_no_triangles() {
    assert_eq!(triangulation(CubeIndex::EMPTY).count(), 0);
    assert_eq!(triangulation(CubeIndex::FULL).count(), 0);
    assert_eq!(EDGE_TABLE[0], 0);
    assert_eq!(EDGE_TABLE[255], 0);
}

#[test]
fn nontrivial_cubes_have_triangles() {
    for index in 1..255 {
        let count = triangle_count(CubeIndex(index));
        assert!(
            (1..=MAX_TRIANGLES_PER_CELL).contains(&count),
            "cube {} has {} triangles",
            index,
            count
        );
    }
}

#[test]
fn rows_use_exactly_the_crossed_edges() {
    for index in 0..=255u8 {
        let cube = CubeIndex(index);
        let mut used = 0u16;
        for triangle in triangulation(cube) {
            for edge in triangle {
                used |= 1 << edge;
            }
        }
        assert_eq!(used, EDGE_TABLE[index as usize], "cube {}", index);

        // An edge is crossed iff its corners classify differently
        for edge in 0..12 {
            let (a, b) = edge_corners(edge);
            let crossed = cube.contains(a) != cube.contains(b);
            assert_eq!(EDGE_TABLE[index as usize] & (1 << edge) != 0, crossed);
        }
    }
}

#[test]
fn known_rows() {
    let rows: Vec<[usize; 3]> = triangulation(CubeIndex(1)).collect();
    assert_eq!(rows, vec![[0, 8, 3]]);

    let rows: Vec<[usize; 3]> = triangulation(CubeIndex(15)).collect();
    assert_eq!(rows, vec![[9, 8, 10], [10, 8, 11]]);

    let rows: Vec<[usize; 3]> = triangulation(CubeIndex(64)).collect();
    assert_eq!(rows, vec![[10, 6, 5]]);
}

#[test]
fn triangulation_iterator_is_exact_and_fused() {
    for index in 0..=255u8 {
        let mut iter = triangulation(CubeIndex(index));
        let expected = triangle_count(CubeIndex(index));
        assert_eq!(iter.len(), expected);
        for _ in 0..expected {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}

// =============================================================================
// SECTION 4: Classification
// =============================================================================

#[test]
fn cube_index_sets_bits_for_inside_corners() {
    for mask in 0..=255u8 {
        assert_eq!(compute_cube_index(&values_for_mask(mask), 0.5), CubeIndex(mask));
    }
}

#[test]
fn threshold_comparison_is_strict() {
    let values = [0.5; 8];
    assert_eq!(compute_cube_index(&values, 0.5), CubeIndex::EMPTY);
    assert_eq!(compute_cube_index(&values, 0.500_001), CubeIndex::FULL);
}

#[test]
fn classify_cell_samples_corners_in_order() {
    let field = |p: Point3| p.x + 10.0 * p.y + 100.0 * p.z;
    let cell = LatticeCoord::new(1, 2, 3);
    let sample = classify_cell(&field, cell, 0.0);

    assert_eq!(sample.cell, cell);
    for i in 0..8 {
        assert_eq!(sample.positions[i], Point3::from(corner_lattice(cell, i)));
        assert_eq!(sample.values[i], field(sample.positions[i]));
    }
    assert_eq!(sample.cube_index, CubeIndex::EMPTY);
}

#[test]
fn classify_cell_sphere_corner() {
    // Only (1,1,1), corner 6 of cell (0,0,0), is within radius 0.5
    let field = sphere(Point3::splat(1.0));
    let sample = classify_cell(&field, LatticeCoord::new(0, 0, 0), 0.25);
    assert_eq!(sample.cube_index, CubeIndex(1 << 6));
}

// =============================================================================
// SECTION 5: Interpolation
// =============================================================================

#[test]
fn interpolation_is_linear() {
    let p0 = Point3::new(0.0, 0.0, 0.0);
    let p1 = Point3::new(1.0, 0.0, 0.0);
    assert_eq!(interpolate_vertex(p0, p1, 0.0, 1.0, 0.25), Point3::new(0.25, 0.0, 0.0));
    assert_eq!(interpolate_vertex(p0, p1, 2.0, -2.0, 0.0), Point3::new(0.5, 0.0, 0.0));
}

#[test]
fn equal_densities_resolve_to_midpoint() {
    let p0 = Point3::new(2.0, 4.0, 6.0);
    let p1 = Point3::new(2.0, 5.0, 6.0);
    let v = interpolate_vertex(p0, p1, 1.0, 1.0, 1.0);
    assert_eq!(v, Point3::new(2.0, 4.5, 6.0));
}

#[test]
fn equal_densities_off_threshold_clamp_to_endpoint() {
    let p0 = Point3::new(0.0, 0.0, 0.0);
    let p1 = Point3::new(0.0, 0.0, 1.0);
    let v = interpolate_vertex(p0, p1, 1.0, 1.0, 2.0);
    assert!(v.is_finite());
    assert!(v == p0 || v == p1);
}

#[test]
fn threshold_outside_edge_range_is_clamped() {
    let p0 = Point3::new(0.0, 0.0, 0.0);
    let p1 = Point3::new(1.0, 0.0, 0.0);
    assert_eq!(interpolate_vertex(p0, p1, 0.0, 1.0, -5.0), p0);
    assert_eq!(interpolate_vertex(p0, p1, 0.0, 1.0, 5.0), p1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Interpolated points stay on the segment and are never NaN
    #[test]
    fn interpolation_stays_on_segment(
        x0 in -50.0f32..50.0, y0 in -50.0f32..50.0, z0 in -50.0f32..50.0,
        x1 in -50.0f32..50.0, y1 in -50.0f32..50.0, z1 in -50.0f32..50.0,
        v0 in -10.0f32..10.0,
        v1 in -10.0f32..10.0,
        iso in -10.0f32..10.0,
    ) {
        let p0 = Point3::new(x0, y0, z0);
        let p1 = Point3::new(x1, y1, z1);
        let v = interpolate_vertex(p0, p1, v0, v1, iso);

        prop_assert!(v.is_finite());
        let lo = p0.min(p1);
        let hi = p0.max(p1);
        let slack = 1e-3;
        prop_assert!(v.x >= lo.x - slack && v.x <= hi.x + slack);
        prop_assert!(v.y >= lo.y - slack && v.y <= hi.y + slack);
        prop_assert!(v.z >= lo.z - slack && v.z <= hi.z + slack);
    }

    /// Crossing vertices of a cell lie on the edges they are labelled with
    #[test]
    fn cell_vertices_lie_on_their_edges(
        x in 0u32..6, y in 0u32..6, z in 0u32..6,
        cx in 0.0f32..8.0, cy in 0.0f32..8.0, cz in 0.0f32..8.0,
        iso in 0.5f32..20.0,
    ) {
        let size = 8;
        let field = sphere(Point3::new(cx, cy, cz));
        let (triangles, count) =
            process_cell_no_alloc(&field, LatticeCoord::new(x, y, z), size, iso);

        prop_assert!(count <= MAX_TRIANGLES_PER_CELL);
        for triangle in &triangles[..count] {
            for v in triangle {
                let a = Point3::from(lattice_from_index(v.edge.lo, size));
                let b = Point3::from(lattice_from_index(v.edge.hi, size));
                prop_assert_eq!((b - a).length_squared(), 1.0);

                // Collinear with the edge and between its endpoints
                let along = (v.position - a).dot(b - a);
                let off = (v.position - a) - (b - a) * along;
                prop_assert!((-1e-5..=1.0 + 1e-5).contains(&along));
                prop_assert!(off.length_squared() < 1e-10);
            }
        }
    }
}

// =============================================================================
// SECTION 6: Edge Identity
// =============================================================================

#[test]
fn lattice_index_roundtrip() {
    let size = 7;
    for index in 0..size * size * size {
        let coord = lattice_from_index(index, size);
        assert_eq!(lattice_index(coord, size), index);
    }
    assert_eq!(lattice_index(LatticeCoord::new(1, 2, 3), 10), 321);
}

#[test]
fn edge_ids_connect_neighbouring_lattice_points() {
    let size = 5;
    let cell = LatticeCoord::new(1, 2, 3);
    for edge in 0..12 {
        let id = edge_id(cell, edge, size);
        let (a, b) = edge_corners(edge);
        let ga = lattice_index(corner_lattice(cell, a), size);
        let gb = lattice_index(corner_lattice(cell, b), size);
        assert_eq!(id, EdgeId::new(ga, gb));
        assert!(matches!(id.hi - id.lo, 1 | 5 | 25));
    }
}

#[test]
fn neighbouring_cells_share_face_edge_ids() {
    let size = 6;
    let left = LatticeCoord::new(1, 1, 1);
    let right = LatticeCoord::new(2, 1, 1);

    // Face x = 2: left uses edges 1, 5, 9, 10; right uses 3, 7, 8, 11
    for (l, r) in [(1, 3), (5, 7), (9, 8), (10, 11)] {
        assert_eq!(edge_id(left, l, size), edge_id(right, r, size));
    }
}

#[test]
fn shared_edge_positions_are_bit_identical() {
    let size = 8;
    let field = sphere(Point3::new(3.3, 4.1, 3.7));
    let iso = 5.0;

    let mut seen = std::collections::HashMap::new();
    for z in 0..size - 1 {
        for y in 0..size - 1 {
            for x in 0..size - 1 {
                for triangle in process_cell(&field, LatticeCoord::new(x, y, z), size, iso) {
                    for v in triangle {
                        let bits = v.position.as_array().map(f32::to_bits);
                        let first = *seen.entry(v.edge).or_insert(bits);
                        assert_eq!(first, bits, "edge {} differs between cells", v.edge);
                    }
                }
            }
        }
    }
    assert!(!seen.is_empty());
}

#[test]
fn output_transform_centres_grid() {
    let size = 10;
    assert_eq!(lattice_to_output(Point3::splat(5.0), size, 1.0), Point3::splat(0.0));
    assert_eq!(
        lattice_to_output(Point3::new(9.0, 0.0, 5.5), size, 0.5),
        Point3::new(2.0, -2.5, 0.25)
    );
    assert_eq!(cell_count(size), 729);
    assert_eq!(cell_count(1), 0);
}

// =============================================================================
// SECTION 7: Error Conditions
// =============================================================================

#[test]
fn fallible_lookups() {
    assert_eq!(try_edge_corners(11), Ok((3, 7)));
    assert_eq!(
        try_edge_corners(12),
        Err(IsoCoreError::EdgeIndexOutOfRange { index: 12 })
    );
    assert_eq!(try_triangulation(64).map(|t| t.count()), Ok(1));
    assert!(matches!(
        try_triangulation(256),
        Err(IsoCoreError::CubeIndexOutOfRange { index: 256 })
    ));
}

#[test]
fn error_messages() {
    assert_eq!(
        IsoCoreError::CubeIndexOutOfRange { index: 300 }.to_string(),
        "cube index 300 is outside [0, 255]"
    );
    assert_eq!(
        IsoCoreError::EdgeIndexOutOfRange { index: 12 }.to_string(),
        "edge index 12 is outside [0, 11]"
    );
}

#[test]
#[should_panic]
fn edge_lookup_out_of_range_panics() {
    let _ = edge_corners(12);
}

