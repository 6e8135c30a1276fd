//! The cell validation pipeline shared by face enumeration and the seed walk.

use std::iter;

use ahash::AHashSet;
use nalgebra::Vector3;

use crate::cfg::AREA_EPS;
use crate::geom::{compactness, is_convex, signed_area, Aabb3, Winding};
use crate::graph::{Graph, NodeId};
use crate::points::PointSet;

use super::constraints::CellConstraints;
use super::hash::cell_hash;
use super::types::{Cell, CellResult};

/// Segment extremes of a measured loop (segments between repeated nodes excluded).
#[derive(Clone, Copy, Debug)]
struct LoopMeasure {
    min_segment: f64,
    max_segment: f64,
}

impl LoopMeasure {
    #[inline]
    fn has_segments(&self) -> bool {
        self.min_segment <= self.max_segment
    }
}

/// Validate one node loop against `constraints`; convenience over
/// [`Cell::build_from_nodes`].
pub fn validate_nodes(
    nodes: &[NodeId],
    graph: &Graph,
    points: &PointSet,
    constraints: &CellConstraints,
) -> (CellResult, Cell) {
    let mut cell = Cell::default();
    let res = cell.build_from_nodes(nodes, graph, points, constraints);
    (res, cell)
}

impl Cell {
    /// Describe the loop `nodes` and run it through every configured check.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// point count, leaves, segment lengths, convex-only, duplicate (claims the
    /// loop hash in the session), bounds, perimeter, holes, compactness, area,
    /// concave-only, and finally wrapper classification. Geometry is measured
    /// before the checks, so soft failures still leave a usable polygon.
    pub fn build_from_nodes(
        &mut self,
        nodes: &[NodeId],
        graph: &Graph,
        points: &PointSet,
        c: &CellConstraints,
    ) -> CellResult {
        *self = Cell::default();
        if nodes.len() < 3 {
            return CellResult::OpenCell;
        }
        if nodes
            .iter()
            .any(|&v| v >= graph.nodes.len() || graph.point_of(v) >= points.len())
        {
            return CellResult::Unknown;
        }

        let unique: AHashSet<NodeId> = nodes.iter().copied().collect();
        let has_leaf = unique.iter().any(|&v| graph.is_leaf(v));
        self.nodes = if has_leaf && c.keep_cells_with_leaves && c.duplicate_leaf_points {
            nodes
                .iter()
                .flat_map(|&v| iter::repeat(v).take(if graph.is_leaf(v) { 2 } else { 1 }))
                .collect()
        } else {
            nodes.to_vec()
        };
        let Some(m) = self.measure(graph, points, c.winding) else {
            return CellResult::Unknown;
        };

        if !c.point_count.contains(unique.len()) {
            return CellResult::OutsidePointsLimit;
        }
        if has_leaf && !c.keep_cells_with_leaves {
            return CellResult::Leaf;
        }
        if m.has_segments()
            && !(c.segment_length.contains(m.min_segment) && c.segment_length.contains(m.max_segment))
        {
            return CellResult::OutsideSegmentsLimit;
        }
        if c.convex_only && !self.is_convex {
            return CellResult::WrongAspect;
        }
        if !c.try_claim_cell(cell_hash(nodes)) {
            return CellResult::Duplicate;
        }
        if !c.bounds_size.contains(self.bounds.diagonal()) {
            return CellResult::OutsideBoundsLimit;
        }
        if !c.perimeter.contains(self.perimeter) {
            return CellResult::OutsidePerimeterLimit;
        }
        if let Some(holes) = &c.holes {
            if holes.overlaps(&self.polygon) {
                return CellResult::Hole;
            }
        }
        if !c.compactness.contains(self.compactness) {
            return CellResult::OutsideCompactnessLimit;
        }
        if self.area <= AREA_EPS || !c.area.contains(self.area) {
            return CellResult::OutsideAreaLimit;
        }
        if c.concave_only && self.is_convex {
            return CellResult::WrongAspect;
        }

        self.built_successfully = true;
        if let Some(w) = c.wrapper() {
            if (self.area - w.area).abs() <= c.wrapper_tolerance_for(w.area) {
                return CellResult::WrapperCell;
            }
        }
        CellResult::Success
    }

    /// Geometry of a loop with no constraint checks (wrapper faces, exterior
    /// walks). `built_successfully` reflects only whether the geometry is usable.
    pub fn from_nodes_unchecked(
        nodes: &[NodeId],
        graph: &Graph,
        points: &PointSet,
        winding: Winding,
    ) -> Cell {
        let mut cell = Cell {
            nodes: nodes.to_vec(),
            ..Cell::default()
        };
        if nodes.len() < 3
            || nodes
                .iter()
                .any(|&v| v >= graph.nodes.len() || graph.point_of(v) >= points.len())
        {
            return cell;
        }
        if cell.measure(graph, points, winding).is_some() {
            cell.built_successfully = cell.area > AREA_EPS;
        }
        cell
    }

    /// Fill every derived field from `self.nodes`, then normalize winding.
    fn measure(&mut self, graph: &Graph, points: &PointSet, winding: Winding) -> Option<LoopMeasure> {
        let n = self.nodes.len();
        let world: Vec<Vector3<f64>> = self
            .nodes
            .iter()
            .map(|&v| points.world(graph.point_of(v)))
            .collect();

        let mut bounds = Aabb3::empty();
        let mut sum = Vector3::zeros();
        let mut perimeter = 0.0;
        let mut m = LoopMeasure {
            min_segment: f64::INFINITY,
            max_segment: 0.0,
        };
        for i in 0..n {
            let j = (i + 1) % n;
            bounds.extend(world[i]);
            sum += world[i];
            let len = (world[j] - world[i]).norm();
            perimeter += len;
            if self.nodes[i] != self.nodes[j] {
                m.min_segment = m.min_segment.min(len);
                m.max_segment = m.max_segment.max(len);
            }
        }

        self.polygon = self
            .nodes
            .iter()
            .map(|&v| points.projected(graph.point_of(v)))
            .collect();
        let signed = signed_area(&self.polygon);
        if !signed.is_finite() || !perimeter.is_finite() {
            return None;
        }

        self.bounds = bounds;
        self.centroid = sum / n as f64;
        self.perimeter = perimeter;
        self.area = signed.abs();
        self.compactness = compactness(self.area, perimeter);
        self.is_convex = is_convex(&self.polygon);
        self.is_clockwise = signed < 0.0;
        if self.winding() != winding {
            self.nodes.reverse();
            self.polygon.reverse();
            self.is_clockwise = !self.is_clockwise;
        }
        self.is_closed_loop = true;
        Some(m)
    }
}
