//! Data types for the half-edge table and its faces.

use nalgebra::Vector2;

use crate::graph::{Graph, NodeId};
use crate::points::PointSet;

/// Directed half of an undirected edge.
///
/// Invariant: `table[table[h].twin].twin == h`. `next == None` only marks a
/// half whose twin could not be found in the target's outgoing list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
    pub origin: NodeId,
    pub target: NodeId,
    /// Polar angle of `target - origin` in the projected plane (radians).
    pub angle: f64,
    pub twin: usize,
    pub next: Option<usize>,
    pub face: Option<usize>,
}

/// Arena of half-edges plus the angle-sorted outgoing list of every node.
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeTable {
    pub half_edges: Vec<HalfEdge>,
    pub outgoing: Vec<Vec<usize>>,
}

impl HalfEdgeTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.half_edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.half_edges.is_empty()
    }

    #[inline]
    pub fn twin(&self, h: usize) -> usize {
        self.half_edges[h].twin
    }

    #[inline]
    pub fn next(&self, h: usize) -> Option<usize> {
        self.half_edges[h].next
    }

    /// Angle-sorted outgoing halves of `node`.
    #[inline]
    pub fn outgoing(&self, node: NodeId) -> &[usize] {
        &self.outgoing[node]
    }

    /// Origin nodes of the loop through `start`, or `None` if the loop never
    /// closes within `len()` steps.
    pub fn face_nodes(&self, start: usize) -> Option<Vec<NodeId>> {
        let mut nodes = Vec::new();
        let mut cur = start;
        for _ in 0..self.len() {
            nodes.push(self.half_edges[cur].origin);
            cur = self.half_edges[cur].next?;
            if cur == start {
                return Some(nodes);
            }
        }
        None
    }

    /// Projected polygon of the loop through `start`.
    pub fn face_polygon(
        &self,
        start: usize,
        graph: &Graph,
        points: &PointSet,
    ) -> Option<Vec<Vector2<f64>>> {
        let nodes = self.face_nodes(start)?;
        Some(
            nodes
                .into_iter()
                .map(|n| points.projected(graph.point_of(n)))
                .collect(),
        )
    }
}

/// One closed trace of `next` links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub index: usize,
    /// Half-edge the trace started from.
    pub start: usize,
    /// Origin node of every consumed half-edge, in trace order.
    pub nodes: Vec<NodeId>,
}

impl Face {
    /// Traces with fewer than three nodes are leaf excursions, not regions.
    #[inline]
    pub fn is_region(&self) -> bool {
        self.nodes.len() >= 3
    }

    pub fn polygon(&self, graph: &Graph, points: &PointSet) -> Vec<Vector2<f64>> {
        self.nodes
            .iter()
            .map(|&n| points.projected(graph.point_of(n)))
            .collect()
    }
}

/// Result of a full enumeration pass.
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    /// All closed traces, indexed by `Face::index`.
    pub faces: Vec<Face>,
    /// Traces dropped because they did not close onto their start.
    pub discarded_traces: usize,
}

impl FaceSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Faces eligible for validation (at least three nodes).
    pub fn regions(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter().filter(|f| f.is_region())
    }

    /// Sum of trace lengths; equals the half-edge count after a clean pass.
    pub fn total_len(&self) -> usize {
        self.faces.iter().map(|f| f.nodes.len()).sum()
    }
}
