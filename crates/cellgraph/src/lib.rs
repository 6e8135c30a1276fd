//! Planar cell extraction from projected graphs.
//!
//! Given an undirected graph whose nodes carry 2D projected positions, the crate
//! builds a half-edge table, enumerates every face by following `next` links,
//! and runs each face through one validation pipeline that either produces a
//! fully described [`Cell`] or a typed [`CellResult`] rejection.
//!
//! Layout
//! - `graph`, `points`: the adjacency view and position arrays supplied by callers.
//! - `half_edge`: table construction and face enumeration.
//! - `cell`: constraints, validation, dedup hashing.
//! - `wrapper`, `query`, `walk`, `extract`: exterior detection, point lookups,
//!   the single-seed angular walk, and the per-session orchestration.
//!
//! Conventions
//! - Node ids index `Graph::nodes`; positions are indexed by the node's `point`.
//!   Every position lookup goes through that translation.
//! - With the "step once after twin" rule, bounded faces trace with negative
//!   signed area and each component's exterior with positive signed area.

pub mod api;
pub mod cell;
pub(crate) mod cfg;
pub mod error;
pub mod extract;
pub mod geom;
pub mod graph;
pub mod half_edge;
pub mod points;
pub mod query;
pub mod walk;
pub mod wrapper;

#[cfg(test)]
pub(crate) mod testutil;

pub use cell::{Cell, CellConstraints, CellResult, HoleTester, Limit, PointHoles};
pub use error::{GraphError, GraphResult};
pub use extract::{extract_cells, CellSet, ExtractCfg, FaceOutcome};
pub use geom::{Aabb3, Winding};
pub use graph::{Edge, EdgeId, Graph, Link, Node, NodeId};
pub use half_edge::{build_half_edges, enumerate_faces, Face, FaceSet, HalfEdge, HalfEdgeTable};
pub use points::PointSet;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cell::{Cell, CellConstraints, CellResult, Limit};
    pub use crate::extract::{extract_cells, CellSet, ExtractCfg};
    pub use crate::geom::Winding;
    pub use crate::graph::{Graph, NodeId};
    pub use crate::points::PointSet;
    pub use crate::walk::{find_cell_at, find_cells_at};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
