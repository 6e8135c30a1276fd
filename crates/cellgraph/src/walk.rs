//! Greedy single-seed angular walk.
//!
//! Finds the cell around a query point without building a half-edge table:
//! start on the edge nearest the seed, oriented so the seed lies on its right,
//! and at every node turn onto the neighbor reached by the smallest
//! counter-clockwise sweep from the incoming direction. This is the same local
//! rule the half-edge `next` linkage encodes, so both strategies trace the same
//! loops and share one validator.

use std::sync::Arc;

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::cell::{Cell, CellConstraints, CellResult};
use crate::cfg::AREA_EPS;
use crate::error::GraphResult;
use crate::geom::{angle_of, ccw_delta, cross, distance_to_segment, signed_area};
use crate::graph::{Graph, NodeId};
use crate::points::PointSet;

#[inline]
fn pos(graph: &Graph, points: &PointSet, v: NodeId) -> Vector2<f64> {
    points.projected(graph.point_of(v))
}

/// Neighbor of `cur` after arriving from `prev`. Turning back is chosen only at
/// a dead end; equal sweeps go to the lower node index.
fn turn(graph: &Graph, points: &PointSet, prev: NodeId, cur: NodeId) -> Option<NodeId> {
    let here = pos(graph, points, cur);
    let back = angle_of(pos(graph, points, prev) - here);
    graph
        .neighbors(cur)
        .map(|n| (ccw_delta(back, angle_of(pos(graph, points, n) - here)), n))
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, n)| n)
}

/// Node loop traced from the directed edge `from → to`, or `None` if it does
/// not return to that edge within `2·E + 1` steps.
pub fn trace_face_from(
    graph: &Graph,
    points: &PointSet,
    from: NodeId,
    to: NodeId,
) -> Option<Vec<NodeId>> {
    let cap = 2 * graph.edges.len() + 1;
    let mut nodes = vec![from];
    let (mut prev, mut cur) = (from, to);
    for _ in 0..cap {
        let nx = turn(graph, points, prev, cur)?;
        if cur == from && nx == to {
            return Some(nodes);
        }
        nodes.push(cur);
        prev = cur;
        cur = nx;
    }
    tracing::warn!(from, to, steps = cap, "walk hit its step cap");
    None
}

/// Directed edge nearest `seed` with the seed on its right. First edge wins ties.
///
/// When the nearest point is an endpoint, every edge at that node is equally
/// near, so the node's angular sector holding the seed picks the edge instead.
fn start_edge(graph: &Graph, points: &PointSet, seed: Vector2<f64>) -> Option<(NodeId, NodeId)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, e) in graph.edges.iter().enumerate() {
        let d = distance_to_segment(
            seed,
            pos(graph, points, e.start),
            pos(graph, points, e.end),
        );
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    let (i, _) = best?;
    let e = graph.edges[i];
    let (a, b) = (pos(graph, points, e.start), pos(graph, points, e.end));
    let ab = b - a;
    let len2 = ab.norm_squared();
    let t = if len2 > 0.0 {
        (seed - a).dot(&ab) / len2
    } else {
        0.0
    };
    if t <= 0.0 {
        return sector_edge(graph, points, e.start, seed);
    }
    if t >= 1.0 {
        return sector_edge(graph, points, e.end, seed);
    }
    if cross(a, b, seed) < 0.0 {
        Some((e.start, e.end))
    } else {
        Some((e.end, e.start))
    }
}

/// Outgoing edge of `v` that closes the sector containing `seed`: the first
/// neighbor met sweeping counter-clockwise from the seed direction. The sector
/// lies on that edge's right.
fn sector_edge(
    graph: &Graph,
    points: &PointSet,
    v: NodeId,
    seed: Vector2<f64>,
) -> Option<(NodeId, NodeId)> {
    let here = pos(graph, points, v);
    let dir = angle_of(seed - here);
    graph
        .neighbors(v)
        .map(|n| (ccw_delta(dir, angle_of(pos(graph, points, n) - here)), n))
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, n)| (v, n))
}

/// Extract and validate the cell around `seed`.
///
/// The start edge is claimed in the session's start-edge set; a second walk
/// from the same directed edge reports `Duplicate`. A loop with positive raw
/// signed area is the exterior of its component and is reported as
/// `WrapperCell` with unchecked geometry. Anything else goes through the
/// shared validator.
pub fn find_cell_at(
    graph: &Graph,
    points: &PointSet,
    seed: Vector2<f64>,
    constraints: &CellConstraints,
) -> GraphResult<(CellResult, Cell)> {
    graph.check(points.len())?;
    let Some((from, to)) = start_edge(graph, points, seed) else {
        return Ok((CellResult::OpenCell, Cell::default()));
    };
    if !constraints.try_claim_start_edge(from, to) {
        return Ok((CellResult::Duplicate, Cell::default()));
    }
    let Some(nodes) = trace_face_from(graph, points, from, to) else {
        return Ok((CellResult::OpenCell, Cell::default()));
    };

    let poly: Vec<Vector2<f64>> = nodes.iter().map(|&v| pos(graph, points, v)).collect();
    if signed_area(&poly) > AREA_EPS {
        let cell = Cell::from_nodes_unchecked(&nodes, graph, points, constraints.winding);
        return Ok((CellResult::WrapperCell, cell));
    }

    let mut cell = Cell::default();
    let res = cell.build_from_nodes(&nodes, graph, points, constraints);
    tracing::trace!(from, to, result = %res, "seed walk");
    Ok((res, cell))
}

/// [`find_cell_at`] for many seeds in parallel against one session.
///
/// Results keep the seed order. When two seeds land in the same cell, which of
/// them reports `Duplicate` depends on scheduling.
pub fn find_cells_at(
    graph: &Graph,
    points: &PointSet,
    seeds: &[Vector2<f64>],
    constraints: &CellConstraints,
) -> GraphResult<Vec<(CellResult, Arc<Cell>)>> {
    graph.check(points.len())?;
    seeds
        .par_iter()
        .map(|&seed| {
            find_cell_at(graph, points, seed, constraints).map(|(res, cell)| (res, Arc::new(cell)))
        })
        .collect()
}
