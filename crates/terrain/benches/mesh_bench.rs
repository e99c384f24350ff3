//! Criterion benchmarks for terrain generation.
//!
//! Benchmarks:
//!   - sample_gradient over a 256x256 lattice
//!   - build_terrain_mesh at widths 100 and 500
//!   - seeded_vertex_colors for a 101x101 grid
//!
//! Run with: cargo bench -p terrain --bench mesh_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use terrain::colors::seeded_vertex_colors;
use terrain::gradient::sample_gradient;
use terrain::mesh::build_terrain_mesh;

// ---------------------------------------------------------------------------
// Benchmark: gradient sampling
// ---------------------------------------------------------------------------

fn bench_sample_gradient(c: &mut Criterion) {
    c.bench_function("sample_gradient_256x256", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..256 {
                for j in 0..256 {
                    acc += sample_gradient(black_box(i), black_box(j)).y;
                }
            }
            black_box(acc)
        });
    });
}

// ---------------------------------------------------------------------------
// Benchmark: mesh building
// ---------------------------------------------------------------------------

fn bench_build_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_terrain_mesh");
    group.sample_size(20);

    for width in [100u32, 500] {
        group.bench_function(format!("width_{width}"), |b| {
            b.iter(|| black_box(build_terrain_mesh(black_box(width), 1.0)));
        });
    }

    group.finish();
}

fn bench_vertex_colors(c: &mut Criterion) {
    c.bench_function("seeded_vertex_colors_101x101", |b| {
        b.iter(|| black_box(seeded_vertex_colors(black_box(101 * 101), 42)));
    });
}

criterion_group!(benches, bench_sample_gradient, bench_build_mesh, bench_vertex_colors);
criterion_main!(benches);
