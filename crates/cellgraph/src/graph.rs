//! Undirected adjacency view consumed by the half-edge builder and the seed walk.

use crate::error::{GraphError, GraphResult};

pub type NodeId = usize;
pub type EdgeId = usize;

/// One entry of a node's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub node: NodeId,
    pub edge: EdgeId,
}

/// Graph node; `point` indexes the caller's position arrays.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub point: usize,
    pub links: Vec<Link>,
}

impl Node {
    #[inline]
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.links.len() == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub start: NodeId,
    pub end: NodeId,
}

impl Edge {
    /// Endpoint opposite to `node` (assumes `node` is an endpoint).
    #[inline]
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with identity node→point mapping from an edge list.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId)]) -> GraphResult<Self> {
        let mut g = Graph::new();
        for i in 0..node_count {
            g.add_node(i);
        }
        for &(a, b) in edges {
            g.add_edge(a, b)?;
        }
        Ok(g)
    }

    pub fn add_node(&mut self, point: usize) -> NodeId {
        self.nodes.push(Node {
            point,
            links: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Connect `a` and `b`. A repeated edge returns the existing id.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<EdgeId> {
        let count = self.nodes.len();
        for n in [a, b] {
            if n >= count {
                return Err(GraphError::NodeOutOfRange { node: n, count });
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }
        if let Some(e) = self.find_edge(a, b) {
            return Ok(e);
        }
        let id = self.edges.len();
        self.edges.push(Edge { start: a, end: b });
        self.nodes[a].links.push(Link { node: b, edge: id });
        self.nodes[b].links.push(Link { node: a, edge: id });
        Ok(id)
    }

    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.nodes
            .get(a)?
            .links
            .iter()
            .find(|l| l.node == b)
            .map(|l| l.edge)
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].degree()
    }

    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node].is_leaf()
    }

    #[inline]
    pub fn point_of(&self, node: NodeId) -> usize {
        self.nodes[node].point
    }

    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[node].links.iter().map(|l| l.node)
    }

    /// Every edge endpoint and adjacency entry must name an existing node.
    ///
    /// `add_edge` already guarantees this; the fields are public, so graphs
    /// assembled by hand are checked before traversal.
    pub fn check_topology(&self) -> GraphResult<()> {
        let count = self.nodes.len();
        for e in &self.edges {
            for n in [e.start, e.end] {
                if n >= count {
                    return Err(GraphError::NodeOutOfRange { node: n, count });
                }
            }
            if e.start == e.end {
                return Err(GraphError::SelfLoop { node: e.start });
            }
        }
        for node in &self.nodes {
            if let Some(l) = node.links.iter().find(|l| l.node >= count) {
                return Err(GraphError::NodeOutOfRange {
                    node: l.node,
                    count,
                });
            }
        }
        Ok(())
    }

    /// [`Graph::check_topology`] plus [`Graph::check_points`].
    pub fn check(&self, point_count: usize) -> GraphResult<()> {
        self.check_topology()?;
        self.check_points(point_count)
    }

    /// Every node must map into a position array of `count` points.
    pub fn check_points(&self, count: usize) -> GraphResult<()> {
        match self.nodes.iter().enumerate().find(|(_, n)| n.point >= count) {
            Some((node, n)) => Err(GraphError::PointOutOfRange {
                node,
                point: n.point,
                count,
            }),
            None => Ok(()),
        }
    }
}
