//! Graph and constraint files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cellgraph::{CellConstraints, Graph, PointSet};
use nalgebra::{Vector2, Vector3};
use serde::Deserialize;

/// On-disk graph: positions indexed by point, optional node→point map
/// (identity when absent), undirected edges between nodes.
#[derive(Debug, Deserialize)]
struct GraphFile {
    positions: Vec<[f64; 2]>,
    world: Option<Vec<[f64; 3]>>,
    nodes: Option<Vec<usize>>,
    edges: Vec<[usize; 2]>,
}

/// Graph plus the position arrays it indexes.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub projected: Vec<Vector2<f64>>,
    pub world: Option<Vec<Vector3<f64>>>,
}

impl LoadedGraph {
    pub fn points(&self) -> Result<PointSet<'_>> {
        Ok(match &self.world {
            Some(w) => PointSet::with_world(&self.projected, w)?,
            None => PointSet::new(&self.projected),
        })
    }
}

pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_graph(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_graph(text: &str) -> Result<LoadedGraph> {
    let file: GraphFile = serde_json::from_str(text)?;
    let mut graph = Graph::new();
    let node_points = file
        .nodes
        .unwrap_or_else(|| (0..file.positions.len()).collect());
    for p in node_points {
        graph.add_node(p);
    }
    for (i, &[a, b]) in file.edges.iter().enumerate() {
        graph
            .add_edge(a, b)
            .with_context(|| format!("edge #{i} ({a}, {b})"))?;
    }
    let loaded = LoadedGraph {
        graph,
        projected: file.positions.iter().map(|&[x, y]| Vector2::new(x, y)).collect(),
        world: file
            .world
            .map(|w| w.iter().map(|&[x, y, z]| Vector3::new(x, y, z)).collect()),
    };
    loaded.graph.check_points(loaded.projected.len())?;
    Ok(loaded)
}

/// Constraints from a JSON file (any subset of fields), or defaults.
pub fn load_constraints(path: Option<&Path>) -> Result<CellConstraints> {
    let Some(path) = path else {
        return Ok(CellConstraints::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgraph::{GraphError, Limit, Winding};
    use tempfile::tempdir;

    const SQUARE: &str = r#"{
        "positions": [[0,0],[1,0],[1,1],[0,1]],
        "edges": [[0,1],[1,2],[2,3],[3,0]]
    }"#;

    #[test]
    fn identity_node_map_by_default() {
        let g = parse_graph(SQUARE).unwrap();
        assert_eq!(g.graph.nodes.len(), 4);
        assert_eq!(g.graph.edges.len(), 4);
        assert_eq!(g.graph.point_of(2), 2);
        assert_eq!(g.points().unwrap().len(), 4);
    }

    #[test]
    fn explicit_node_map_and_world() {
        let text = r#"{
            "positions": [[0,0],[1,0],[1,1]],
            "world": [[0,0,1],[1,0,1],[1,1,1]],
            "nodes": [2, 1, 0],
            "edges": [[0,1],[1,2],[2,0]]
        }"#;
        let g = parse_graph(text).unwrap();
        assert_eq!(g.graph.point_of(0), 2);
        assert_eq!(g.points().unwrap().world(0).z, 1.0);
    }

    #[test]
    fn bad_graphs_are_rejected() {
        let self_loop = r#"{"positions": [[0,0],[1,0]], "edges": [[1,1]]}"#;
        let err = parse_graph(self_loop).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::SelfLoop { node: 1 })
        );

        let short = r#"{"positions": [[0,0]], "nodes": [0, 3], "edges": [[0,1]]}"#;
        assert!(parse_graph(short).is_err());

        let mismatch = r#"{"positions": [[0,0]], "world": [], "edges": []}"#;
        assert!(parse_graph(mismatch).unwrap().points().is_err());
    }

    #[test]
    fn constraints_override_a_subset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(
            &path,
            r#"{"convex_only": true, "winding": "Clockwise", "area": {"min": 0.5}}"#,
        )
        .unwrap();
        let c = load_constraints(Some(&path)).unwrap();
        assert!(c.convex_only);
        assert_eq!(c.winding, Winding::Clockwise);
        assert_eq!(c.area, Limit { min: Some(0.5), max: None });
        assert!(c.keep_cells_with_leaves);
        assert_eq!(c.point_count.min, Some(3));

        assert!(!load_constraints(None).unwrap().convex_only);
    }
}
