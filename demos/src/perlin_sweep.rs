//! Perlin Threshold Sweep
//!
//! Sweeps the iso threshold across the range of a Perlin field and reports
//! how the surface grows and shrinks:
//! 1. Sample the field to find its range on the lattice
//! 2. Generate a mesh per threshold step
//! 3. Check raw corner counts against triangle counts
//! 4. Optionally export the densest mesh
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release --bin perlin_sweep -- 32 4.0 7 output/perlin.obj
//! ```

use std::env;

use instant::Instant;
use log::{debug, warn};

use iso_core::{lattice_from_index, Point3, ScalarField};
use iso_rs::{FieldKind, Mesh, MesherBuilder, MesherConfig};

const STEPS: usize = 16;

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("          Marching Cubes Perlin Threshold Sweep");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let size: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(32);
    let scale: f32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4.0);
    let seed: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);
    let output_path = args.get(4).cloned();

    let base = MesherConfig {
        size,
        scale,
        ..MesherConfig::default()
    };
    if let Err(e) = base.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    let field = FieldKind::Perlin { seed }.build(&base);

    // =========================================================================
    // Step 1: Field range
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 1: Field Range                                         │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let (min, max) = (0..base.lattice_point_count() as u32)
        .map(|i| field.density(Point3::from(lattice_from_index(i, size))))
        .fold((f32::MAX, f32::MIN), |(lo, hi), d| (lo.min(d), hi.max(d)));

    println!("  Grid:            {}³, scale {}, seed {}", size, scale, seed);
    println!("  Density range:   [{:.4}, {:.4}]", min, max);
    println!();

    // =========================================================================
    // Step 2: Sweep
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 2: Sweep                                               │");
    println!("└─────────────────────────────────────────────────────────────┘");
    println!("  {:>10} {:>10} {:>10} {:>10} {:>9}", "threshold", "raw", "vertices", "triangles", "time");

    let mut densest: Option<(f32, Mesh)> = None;
    let mut previous: Option<usize> = None;
    let start = Instant::now();

    for step in 0..=STEPS {
        let threshold = min + (max - min) * step as f32 / STEPS as f32;
        let mesher = match MesherBuilder::from_config(base)
            .with_iso_threshold(threshold)
            .build()
        {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Invalid threshold {}: {}", threshold, e);
                std::process::exit(1);
            }
        };

        let step_start = Instant::now();
        let raw = mesher.march(&*field);
        let mesh = mesher.generate(&*field);
        let elapsed = step_start.elapsed();

        if raw.len() != 3 * mesh.triangle_count() {
            warn!(
                "threshold {}: {} raw vertices for {} triangles",
                threshold,
                raw.len(),
                mesh.triangle_count()
            );
        }
        if let Some(prev) = previous {
            debug!(
                "threshold {:.4}: triangle count changed by {}",
                threshold,
                mesh.triangle_count() as i64 - prev as i64
            );
        }
        previous = Some(mesh.triangle_count());

        println!(
            "  {:>10.4} {:>10} {:>10} {:>10} {:>7.1}ms",
            threshold,
            raw.len(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            elapsed.as_secs_f64() * 1000.0
        );

        let is_denser = densest
            .as_ref()
            .map_or(true, |(_, best)| mesh.triangle_count() > best.triangle_count());
        if is_denser {
            densest = Some((threshold, mesh));
        }
    }

    println!();
    println!("  Sweep time:      {:.3}s", start.elapsed().as_secs_f64());
    println!();

    // =========================================================================
    // Step 3: Export
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 3: Export                                              │");
    println!("└─────────────────────────────────────────────────────────────┘");

    match (densest, output_path) {
        (Some((threshold, mesh)), Some(path)) => {
            if let Err(e) = mesh.write_obj_to_file(&path) {
                eprintln!("Error writing '{}': {}", path, e);
                std::process::exit(1);
            }
            println!("  Densest surface at threshold {:.4}", threshold);
            println!("  Output file:     {}", path);
        }
        (Some((threshold, mesh)), None) => {
            println!(
                "  Densest surface at threshold {:.4}: {} triangles",
                threshold,
                mesh.triangle_count()
            );
            println!("  Pass an output path to export it.");
        }
        (None, _) => println!("  No surface found."),
    }
    println!();
    println!("═══════════════════════════════════════════════════════════════");
}
