//! One extraction session: build, enumerate, detect the wrapper, validate.

use std::sync::Arc;

use ahash::AHashSet;
use nalgebra::Vector2;

use crate::cell::{cell_hash, Cell, CellConstraints, CellResult};
use crate::cfg::AREA_EPS;
use crate::error::GraphResult;
use crate::geom::signed_area;
use crate::graph::Graph;
use crate::half_edge::{build_half_edges, enumerate_faces, FaceSet, HalfEdgeTable};
use crate::points::PointSet;
use crate::query;
use crate::wrapper::detect_wrapper;

/// Session switches.
#[derive(Clone, Copy, Debug)]
pub struct ExtractCfg {
    /// Seed the constraints with the largest face before validating the rest.
    pub detect_wrapper: bool,
    /// Keep soft-rejected cells (valid polygon, failed a limit) in `rejected`.
    pub keep_rejected: bool,
}

impl Default for ExtractCfg {
    fn default() -> Self {
        Self {
            detect_wrapper: true,
            keep_rejected: true,
        }
    }
}

/// Validation outcome of one enumerated face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceOutcome {
    pub face: usize,
    pub result: CellResult,
}

/// Everything one session produced.
#[derive(Clone, Debug, Default)]
pub struct CellSet {
    pub table: HalfEdgeTable,
    pub faces: FaceSet,
    pub accepted: Vec<Arc<Cell>>,
    /// Soft failures with a non-degenerate polygon, one per physical loop.
    pub rejected: Vec<Arc<Cell>>,
    /// Face index and cell of the exterior, when detected.
    pub wrapper: Option<(usize, Arc<Cell>)>,
    /// One entry per validated face, in enumeration order.
    pub outcomes: Vec<FaceOutcome>,
}

impl CellSet {
    /// Face containing `p` (smallest when nested).
    pub fn face_at(&self, graph: &Graph, points: &PointSet, p: Vector2<f64>) -> Option<usize> {
        query::face_at(&self.table, graph, points, p)
    }

    /// Smallest accepted or rejected cell containing `p`.
    pub fn cell_at(&self, p: Vector2<f64>) -> Option<&Arc<Cell>> {
        query::cell_at(self.accepted.iter().chain(&self.rejected), p)
    }

    /// Number of validated faces that ended with `result`.
    pub fn count(&self, result: CellResult) -> usize {
        self.outcomes.iter().filter(|o| o.result == result).count()
    }
}

/// Run one full extraction session over `graph`.
///
/// The wrapper face (if enabled and found) is stored on `constraints` and in
/// [`CellSet::wrapper`], and is not validated itself. The exterior traces of
/// other components (positive signed area) are recorded as `WrapperCell`
/// without validation. The remaining region faces are validated in
/// enumeration order against `constraints`, whose dedup state accumulates
/// across the session. Only malformed input is an error.
pub fn extract_cells(
    graph: &Graph,
    points: &PointSet,
    constraints: &mut CellConstraints,
    cfg: ExtractCfg,
) -> GraphResult<CellSet> {
    let mut table = build_half_edges(graph, points)?;
    let faces = enumerate_faces(&mut table);

    let wrapper = if cfg.detect_wrapper {
        detect_wrapper(&faces, graph, points).map(|idx| {
            let cell = Arc::new(Cell::from_nodes_unchecked(
                &faces.faces[idx].nodes,
                graph,
                points,
                constraints.winding,
            ));
            constraints.set_wrapper(Arc::clone(&cell));
            (idx, cell)
        })
    } else {
        None
    };
    let wrapper_face = wrapper.as_ref().map(|(idx, _)| *idx);
    let constraints: &CellConstraints = constraints;

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    let mut rejected_seen: AHashSet<u64> = AHashSet::new();
    let mut outcomes = Vec::new();

    for face in faces.regions() {
        if Some(face.index) == wrapper_face {
            continue;
        }
        // Positive traces are component exteriors; only the largest is the wrapper.
        if signed_area(&face.polygon(graph, points)) > AREA_EPS {
            tracing::trace!(face = face.index, "exterior trace");
            outcomes.push(FaceOutcome {
                face: face.index,
                result: CellResult::WrapperCell,
            });
            continue;
        }
        let mut cell = Cell::default();
        let result = cell.build_from_nodes(&face.nodes, graph, points, constraints);
        tracing::trace!(face = face.index, %result, "validated face");
        outcomes.push(FaceOutcome {
            face: face.index,
            result,
        });
        if result.is_success() {
            accepted.push(Arc::new(cell));
        } else if cfg.keep_rejected
            && result.is_soft()
            && cell.area > AREA_EPS
            && rejected_seen.insert(cell_hash(&face.nodes))
        {
            rejected.push(Arc::new(cell));
        }
    }

    tracing::debug!(
        faces = faces.len(),
        accepted = accepted.len(),
        rejected = rejected.len(),
        wrapper = ?wrapper_face,
        "extracted cells"
    );
    Ok(CellSet {
        table,
        faces,
        accepted,
        rejected,
        wrapper,
        outcomes,
    })
}
