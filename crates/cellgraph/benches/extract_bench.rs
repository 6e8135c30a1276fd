//! Criterion benchmarks for cell extraction on jittered grids.
//! Focus sizes: n×n grids with n in {4, 16, 64}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use cellgraph::api::{
    build_half_edges, enumerate_faces, extract_cells, CellConstraints, ExtractCfg, Graph, PointSet,
};

fn jittered_grid(n: usize, seed: u64) -> (Graph, Vec<Vector2<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = n + 1;
    let pts: Vec<Vector2<f64>> = (0..w * w)
        .map(|i| {
            let (r, c) = (i / w, i % w);
            vector![
                c as f64 + rng.gen_range(-0.3..0.3),
                r as f64 + rng.gen_range(-0.3..0.3)
            ]
        })
        .collect();
    let mut edges = Vec::with_capacity(2 * n * w);
    for r in 0..w {
        for c in 0..n {
            edges.push((r * w + c, r * w + c + 1));
            edges.push((c * w + r, (c + 1) * w + r));
        }
    }
    let g = Graph::from_edges(pts.len(), &edges).expect("grid edges are valid");
    (g, pts)
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for &n in &[4usize, 16, 64] {
        let (g, pts) = jittered_grid(n, 42);
        let ps = PointSet::new(&pts);

        group.bench_with_input(BenchmarkId::new("build_half_edges", n), &n, |b, _| {
            b.iter(|| build_half_edges(&g, &ps).expect("valid input"))
        });

        group.bench_with_input(BenchmarkId::new("enumerate_faces", n), &n, |b, _| {
            b.iter_batched(
                || build_half_edges(&g, &ps).expect("valid input"),
                |mut t| enumerate_faces(&mut t),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("extract_cells", n), &n, |b, _| {
            b.iter_batched(
                CellConstraints::default,
                |mut cons| extract_cells(&g, &ps, &mut cons, ExtractCfg::default()).expect("valid input"),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
