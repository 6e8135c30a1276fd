//! JSON reports for extraction runs and point queries.

use std::collections::BTreeMap;

use cellgraph::{Cell, CellResult, CellSet, Winding};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CellRow {
    pub nodes: Vec<usize>,
    pub area: f64,
    pub perimeter: f64,
    pub compactness: f64,
    pub convex: bool,
    pub winding: Winding,
    pub centroid: [f64; 3],
}

impl From<&Cell> for CellRow {
    fn from(c: &Cell) -> Self {
        Self {
            nodes: c.nodes.clone(),
            area: c.area,
            perimeter: c.perimeter,
            compactness: c.compactness,
            convex: c.is_convex,
            winding: c.winding(),
            centroid: [c.centroid.x, c.centroid.y, c.centroid.z],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractReport {
    pub half_edges: usize,
    pub faces: usize,
    pub discarded_traces: usize,
    /// Validated faces per outcome; outcomes that never occurred are omitted.
    pub results: BTreeMap<&'static str, usize>,
    pub wrapper_face: Option<usize>,
    pub wrapper: Option<CellRow>,
    pub accepted: Vec<CellRow>,
    pub rejected: Vec<CellRow>,
}

impl ExtractReport {
    pub fn new(set: &CellSet) -> Self {
        let results = CellResult::ALL
            .iter()
            .map(|&r| (r.as_str(), set.count(r)))
            .filter(|&(_, n)| n > 0)
            .collect();
        Self {
            half_edges: set.table.len(),
            faces: set.faces.len(),
            discarded_traces: set.faces.discarded_traces,
            results,
            wrapper_face: set.wrapper.as_ref().map(|(i, _)| *i),
            wrapper: set.wrapper.as_ref().map(|(_, c)| CellRow::from(c.as_ref())),
            accepted: set.accepted.iter().map(|c| CellRow::from(c.as_ref())).collect(),
            rejected: set.rejected.iter().map(|c| CellRow::from(c.as_ref())).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub point: [f64; 2],
    pub face: Option<usize>,
    pub face_nodes: Option<Vec<usize>>,
    pub cell: Option<CellRow>,
    /// Outcome of the seed walk from the same point.
    pub walk: &'static str,
    pub walk_cell: Option<CellRow>,
}
