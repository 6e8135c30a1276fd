//! Input errors.
//!
//! Only malformed inputs are errors. Faces that fail validation are reported
//! through [`crate::CellResult`], and broken half-edge traces are counted and
//! skipped, never raised.

use thiserror::Error;

use crate::graph::NodeId;

/// Malformed graph or position input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a node that does not exist.
    #[error("node {node} out of range (graph has {count} nodes)")]
    NodeOutOfRange { node: NodeId, count: usize },

    /// An edge connects a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop { node: NodeId },

    /// A node maps to a point index outside the supplied positions.
    #[error("node {node} maps to point {point}, but only {count} positions were supplied")]
    PointOutOfRange {
        node: NodeId,
        point: usize,
        count: usize,
    },

    /// World and projected arrays must describe the same points.
    #[error("world positions ({world}) and projected positions ({projected}) differ in length")]
    ProjectionMismatch { projected: usize, world: usize },
}

/// Result alias for graph input handling.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_offender() {
        let e = GraphError::PointOutOfRange {
            node: 4,
            point: 9,
            count: 3,
        };
        let msg = e.to_string();
        assert!(msg.contains("node 4"));
        assert!(msg.contains("point 9"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphError>();
    }
}
