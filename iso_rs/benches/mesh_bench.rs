//! Criterion benchmarks for iso_rs mesh generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iso_rs::{
    DedupStrategy, GridMesher, MesherBuilder, PerlinField, SphereField, VertexDeduplicator,
};

/// Sphere filling most of the grid
fn make_sphere_mesher(size: u32) -> (GridMesher, SphereField) {
    let radius = size as f32 * 0.35;
    let mesher = MesherBuilder::new(size)
        .with_iso_threshold(radius * radius)
        .build()
        .unwrap();
    (mesher, SphereField::new(size))
}

fn bench_march(c: &mut Criterion) {
    let mut group = c.benchmark_group("march");

    for size in [16u32, 32, 64] {
        let (mesher, field) = make_sphere_mesher(size);
        group.throughput(Throughput::Elements(mesher.config().cell_count() as u64));

        group.bench_with_input(BenchmarkId::new("sphere", size), &size, |b, _| {
            b.iter(|| black_box(mesher.march(&field)))
        });

        group.bench_with_input(BenchmarkId::new("callback", size), &size, |b, _| {
            b.iter(|| {
                let mut count = 0;
                mesher.for_each_triangle(&field, |_| count += 1);
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");
    let (mesher, field) = make_sphere_mesher(64);
    let raw = mesher.march(&field);
    group.throughput(Throughput::Elements(raw.len() as u64));

    for strategy in [DedupStrategy::Hashed, DedupStrategy::Sorted] {
        let dedup = VertexDeduplicator::new(strategy);
        group.bench_function(format!("{:?}", strategy), |b| {
            b.iter(|| black_box(dedup.deduplicate(black_box(&raw))))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let (mesher, sphere) = make_sphere_mesher(64);
    let perlin = PerlinField::new(8.0, 0);
    let perlin_mesher = MesherBuilder::new(64)
        .with_scale(8.0)
        .with_iso_threshold(0.5)
        .build()
        .unwrap();

    group.bench_function("sphere_sequential", |b| {
        b.iter(|| black_box(mesher.generate_sequential(&sphere)))
    });
    group.bench_function("perlin_sequential", |b| {
        b.iter(|| black_box(perlin_mesher.generate_sequential(&perlin)))
    });

    #[cfg(feature = "parallel")]
    {
        group.bench_function("sphere_parallel", |b| {
            b.iter(|| black_box(mesher.generate_parallel(&sphere, 0)))
        });
        group.bench_function("perlin_parallel", |b| {
            b.iter(|| black_box(perlin_mesher.generate_parallel(&perlin, 0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_march, bench_dedup, bench_generate);
criterion_main!(benches);
