//! Sphere Mesh Generation
//!
//! This demo runs the full isosurface pipeline on an analytic sphere:
//! 1. Build and validate a mesher configuration
//! 2. March the grid sequentially, in parallel and through the callback API
//! 3. Compare deduplication strategies
//! 4. Report mesh statistics
//! 5. Export the mesh as OBJ
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin sphere_mesh -- 48 18.0 output/sphere.obj
//! ```

use std::env;
use std::path::Path;

use instant::Instant;
use log::info;

use iso_rs::{DedupStrategy, MeshStats, MesherBuilder, SphereField, VertexDeduplicator};

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("          Marching Cubes Sphere Mesh");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let size: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(48);
    let radius: f32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(size as f32 * 0.375);
    let output_path = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| "output/sphere.obj".to_string());

    if args.len() < 4 {
        println!("Usage: {} [size] [radius] [output.obj]", args[0]);
        println!();
    }

    // Ensure output directory exists
    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent).ok();
    }

    // =========================================================================
    // Step 1: Configure
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 1: Configure Mesher                                    │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let mesher = match MesherBuilder::new(size)
        .with_spacing(1.0)
        .with_iso_threshold(radius * radius)
        .build()
    {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let field = SphereField::new(size);

    println!("  Grid:            {}³ lattice points", size);
    println!("  Cells:           {}", mesher.config().cell_count());
    println!("  Radius:          {:.2} (threshold {:.2})", radius, radius * radius);
    println!();

    // =========================================================================
    // Step 2: Generation
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 2: Generation                                          │");
    println!("└─────────────────────────────────────────────────────────────┘");
    println!();

    // Sequential generation (single-threaded)
    println!("  [Sequential]");
    let start = Instant::now();
    let mesh_seq = mesher.generate_sequential(&field);
    let seq_time = start.elapsed();
    println!("    Triangles:     {}", mesh_seq.triangle_count());
    println!("    Time:          {:.3}s", seq_time.as_secs_f64());
    println!(
        "    Throughput:    {:.0} cells/sec",
        mesher.config().cell_count() as f64 / seq_time.as_secs_f64()
    );
    println!();

    // Parallel generation (rayon)
    println!("  [Parallel]");
    let start = Instant::now();
    let mesh = mesher.generate_parallel(&field, 0);
    let par_time = start.elapsed();
    println!("    Triangles:     {}", mesh.triangle_count());
    println!("    Time:          {:.3}s", par_time.as_secs_f64());
    println!(
        "    Speedup:       {:.2}x",
        seq_time.as_secs_f64() / par_time.as_secs_f64()
    );
    println!("    Identical:     {}", mesh == mesh_seq);
    println!();

    // Callback-based marching (no allocation)
    println!("  [Callback (no alloc)]");
    let start = Instant::now();
    let mut callback_count = 0;
    mesher.for_each_triangle(&field, |_triangle| {
        callback_count += 1;
    });
    let callback_time = start.elapsed();
    println!("    Triangles:     {}", callback_count);
    println!("    Time:          {:.3}s", callback_time.as_secs_f64());
    println!();

    // =========================================================================
    // Step 3: Deduplication
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 3: Deduplication                                       │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let raw = mesher.march(&field);
    println!("  Raw vertices:    {}", raw.len());
    for strategy in [DedupStrategy::Hashed, DedupStrategy::Sorted] {
        let start = Instant::now();
        let deduped = VertexDeduplicator::new(strategy).deduplicate(&raw);
        let elapsed = start.elapsed();
        println!(
            "  {:<8} {:>8} vertices in {:.3}ms",
            format!("{:?}:", strategy),
            deduped.vertex_count(),
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();

    // =========================================================================
    // Step 4: Mesh Statistics
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 4: Mesh Statistics                                     │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let stats = MeshStats::from_mesh(&mesh);
    let sphere_area = 4.0 * std::f32::consts::PI * radius * radius;
    println!("  Triangle count:  {}", stats.triangle_count);
    println!("  Vertex count:    {}", stats.vertex_count);
    println!(
        "  Surface area:    {:.4} ({:.1}% of 4πr²)",
        stats.surface_area,
        100.0 * stats.surface_area / sphere_area
    );
    println!(
        "  Bounding box:    ({:.2}, {:.2}, {:.2}) → ({:.2}, {:.2}, {:.2})",
        stats.bbox_min.x,
        stats.bbox_min.y,
        stats.bbox_min.z,
        stats.bbox_max.x,
        stats.bbox_max.y,
        stats.bbox_max.z
    );
    if let Err(e) = mesh.validate() {
        eprintln!("  Validation:      FAILED ({})", e);
        std::process::exit(1);
    }
    println!("  Validation:      ok");
    println!();

    // =========================================================================
    // Step 5: Export to OBJ
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 5: Export to OBJ                                       │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let start = Instant::now();
    if let Err(e) = mesh.write_obj_to_file(&output_path) {
        eprintln!("Error writing '{}': {}", output_path, e);
        std::process::exit(1);
    }
    let export_time = start.elapsed();
    println!("  Output file:     {}", output_path);
    println!("  Export time:     {:.3}s", export_time.as_secs_f64());
    println!();

    info!("sphere mesh written to {}", output_path);
    println!("═══════════════════════════════════════════════════════════════");
}
