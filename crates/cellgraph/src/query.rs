//! Point-in-face and point-in-cell lookups (linear scans, no spatial index).

use std::sync::Arc;

use nalgebra::Vector2;

use crate::cell::Cell;
use crate::cfg::WRAPPER_TIE_EPS;
use crate::geom::{point_in_polygon, signed_area};
use crate::graph::Graph;
use crate::half_edge::HalfEdgeTable;
use crate::points::PointSet;

/// Face index of the smallest face containing `p`.
///
/// Visits every stamped face once, rebuilding its polygon from the table. A
/// bounded face and the exterior trace of the same single loop share a polygon;
/// on such a tie the bounded (negative signed area) face wins.
pub fn face_at(
    table: &HalfEdgeTable,
    graph: &Graph,
    points: &PointSet,
    p: Vector2<f64>,
) -> Option<usize> {
    let face_count = table
        .half_edges
        .iter()
        .filter_map(|h| h.face)
        .max()
        .map_or(0, |m| m + 1);
    let mut seen = vec![false; face_count];
    let mut best: Option<(usize, f64)> = None;

    for (h, he) in table.half_edges.iter().enumerate() {
        let Some(face) = he.face else { continue };
        if seen[face] {
            continue;
        }
        seen[face] = true;
        let Some(poly) = table.face_polygon(h, graph, points) else {
            continue;
        };
        if !point_in_polygon(p, &poly) {
            continue;
        }
        let signed = signed_area(&poly);
        if best.map_or(true, |(_, cur)| smaller(signed, cur)) {
            best = Some((face, signed));
        }
    }
    best.map(|(face, _)| face)
}

/// `a` beats `b`: smaller absolute area, bounded trace on a tie.
fn smaller(a: f64, b: f64) -> bool {
    let (x, y) = (a.abs(), b.abs());
    if (x - y).abs() <= WRAPPER_TIE_EPS * x.max(y) {
        a < 0.0 && b >= 0.0
    } else {
        x < y
    }
}

/// Smallest-area cell whose polygon contains `p`.
pub fn cell_at<'a, I>(cells: I, p: Vector2<f64>) -> Option<&'a Arc<Cell>>
where
    I: IntoIterator<Item = &'a Arc<Cell>>,
{
    cells
        .into_iter()
        .filter(|c| c.contains(p))
        .min_by(|a, b| a.area.total_cmp(&b.area))
}
