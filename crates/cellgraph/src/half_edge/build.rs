//! Half-edge construction: twins, per-node angle sort, `next` linkage.

use std::cmp::Ordering;

use crate::error::GraphResult;
use crate::geom::angle_of;
use crate::graph::Graph;
use crate::points::PointSet;

use super::types::{HalfEdge, HalfEdgeTable};

/// Build the half-edge table of `graph` in the projection given by `points`.
///
/// Edge `e` yields halves `2e` (start→end) and `2e + 1` (end→start). Angle ties
/// at a node are broken by target node, then by insertion order. Deterministic
/// for a fixed edge order.
pub fn build_half_edges(graph: &Graph, points: &PointSet) -> GraphResult<HalfEdgeTable> {
    graph.check(points.len())?;

    let mut half_edges: Vec<HalfEdge> = Vec::with_capacity(graph.edges.len() * 2);
    for edge in &graph.edges {
        let a = points.projected(graph.point_of(edge.start));
        let b = points.projected(graph.point_of(edge.end));
        let i = half_edges.len();
        half_edges.push(HalfEdge {
            origin: edge.start,
            target: edge.end,
            angle: angle_of(b - a),
            twin: i + 1,
            next: None,
            face: None,
        });
        half_edges.push(HalfEdge {
            origin: edge.end,
            target: edge.start,
            angle: angle_of(a - b),
            twin: i,
            next: None,
            face: None,
        });
    }

    // Group by origin and sort each group by angle (stable).
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); graph.nodes.len()];
    for (i, h) in half_edges.iter().enumerate() {
        outgoing[h.origin].push(i);
    }
    for out in outgoing.iter_mut() {
        out.sort_by(|&a, &b| {
            let (ha, hb) = (&half_edges[a], &half_edges[b]);
            match ha.angle.total_cmp(&hb.angle) {
                Ordering::Equal => ha.target.cmp(&hb.target),
                o => o,
            }
        });
    }

    // Rotate to twin, step once.
    for i in 0..half_edges.len() {
        let twin = half_edges[i].twin;
        let out = &outgoing[half_edges[i].target];
        half_edges[i].next = out
            .iter()
            .position(|&h| h == twin)
            .map(|k| out[(k + 1) % out.len()]);
        if half_edges[i].next.is_none() {
            tracing::warn!(half_edge = i, twin, "twin missing from target's outgoing list");
        }
    }

    Ok(HalfEdgeTable {
        half_edges,
        outgoing,
    })
}
