//! Curated API for callers that want one import path.
//!
//! Important
//! - Mirrors the crate root plus the free functions that live in submodules.
//! - Prefer these re-exports in binaries and benches.

// Input views
pub use crate::graph::{Edge, EdgeId, Graph, Link, Node, NodeId};
pub use crate::points::PointSet;
// Half-edge table and faces
pub use crate::half_edge::{build_half_edges, enumerate_faces, Face, FaceSet, HalfEdge, HalfEdgeTable};
// Validation
pub use crate::cell::{
    canonical_nodes, cell_hash, validate_nodes, Cell, CellConstraints, CellResult, HoleTester, Limit,
    PointHoles,
};
// Queries, walk, sessions
pub use crate::extract::{extract_cells, CellSet, ExtractCfg, FaceOutcome};
pub use crate::query::{cell_at, face_at};
pub use crate::walk::{find_cell_at, find_cells_at, trace_face_from};
pub use crate::wrapper::detect_wrapper;
// Geometry
pub use crate::geom::{
    compactness, is_convex, point_in_polygon, signed_area, Aabb3, Winding,
};
