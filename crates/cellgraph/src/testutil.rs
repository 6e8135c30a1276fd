//! Small graph fixtures shared by unit tests.

use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::graph::Graph;

/// Unit square `(0,0),(1,0),(1,1),(0,1)` with edges 0-1, 1-2, 2-3, 3-0.
pub(crate) fn square() -> (Graph, Vec<Vector2<f64>>) {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    (g, pts)
}

/// `cols × rows` grid of unit cells. Node `r * (cols + 1) + c` sits at `(c, r)`.
/// Horizontal edges are added row by row, then vertical edges.
pub(crate) fn grid(cols: usize, rows: usize) -> (Graph, Vec<Vector2<f64>>) {
    jittered_grid(cols, rows, 0, 0.0)
}

/// Grid with every node displaced by up to `amp` per axis (keep `amp < 0.5`
/// to stay planar).
pub(crate) fn jittered_grid(
    cols: usize,
    rows: usize,
    seed: u64,
    amp: f64,
) -> (Graph, Vec<Vector2<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = cols + 1;
    let mut pts = Vec::with_capacity(w * (rows + 1));
    for r in 0..=rows {
        for c in 0..=cols {
            let (dx, dy) = if amp > 0.0 {
                (rng.gen_range(-amp..amp), rng.gen_range(-amp..amp))
            } else {
                (0.0, 0.0)
            };
            pts.push(vector![c as f64 + dx, r as f64 + dy]);
        }
    }
    let mut edges = Vec::new();
    for r in 0..=rows {
        for c in 0..cols {
            edges.push((r * w + c, r * w + c + 1));
        }
    }
    for r in 0..rows {
        for c in 0..=cols {
            edges.push((r * w + c, (r + 1) * w + c));
        }
    }
    let g = Graph::from_edges(pts.len(), &edges).unwrap();
    (g, pts)
}
