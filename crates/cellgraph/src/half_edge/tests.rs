use super::*;
use crate::geom::signed_area;
use crate::graph::Graph;
use crate::points::PointSet;
use crate::testutil::{grid, jittered_grid, square};
use crate::GraphError;
use nalgebra::vector;
use proptest::prelude::*;

#[test]
fn square_next_links() {
    let (g, pts) = square();
    let t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
    assert_eq!(t.len(), 8);
    let next: Vec<_> = (0..8).map(|h| t.next(h).unwrap()).collect();
    // 0→1→2→3 and 1→0→3→2
    assert_eq!(next, vec![2, 7, 4, 1, 6, 3, 0, 5]);
    for h in 0..8 {
        assert_eq!(t.twin(t.twin(h)), h);
    }
}

#[test]
fn grid_faces_cover_every_half_edge() {
    let (g, pts) = grid(2, 1);
    let ps = PointSet::new(&pts);
    let mut t = build_half_edges(&g, &ps).unwrap();
    let faces = enumerate_faces(&mut t);
    assert_eq!(faces.discarded_traces, 0);
    assert_eq!(faces.len(), 3);
    assert_eq!(faces.total_len(), t.len());
    assert!(t.half_edges.iter().all(|h| h.face.is_some()));
    assert_eq!(faces.regions().count(), 3);
    // one exterior (positive, area 2), two bounded (negative, area 1)
    let mut areas: Vec<f64> = faces
        .faces
        .iter()
        .map(|f| signed_area(&f.polygon(&g, &ps)))
        .collect();
    areas.sort_by(|a, b| a.total_cmp(b));
    assert!((areas[0] + 1.0).abs() < 1e-12);
    assert!((areas[1] + 1.0).abs() < 1e-12);
    assert!((areas[2] - 2.0).abs() < 1e-12);
}

#[test]
fn next_chain_returns_to_start() {
    let (g, pts) = grid(3, 2);
    let mut t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
    let faces = enumerate_faces(&mut t);
    for f in &faces.faces {
        let mut h = f.start;
        for _ in 0..f.nodes.len() {
            h = t.next(h).unwrap();
        }
        assert_eq!(h, f.start);
        assert_eq!(t.face_nodes(f.start).unwrap(), f.nodes);
    }
}

#[test]
fn single_edge_is_one_leaf_trace() {
    let g = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    let mut t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
    let faces = enumerate_faces(&mut t);
    assert_eq!(faces.len(), 1);
    assert_eq!(faces.faces[0].nodes, vec![0, 1]);
    assert_eq!(faces.regions().count(), 0);
}

#[test]
fn broken_next_discards_only_affected_traces() {
    let (g, pts) = square();
    let mut t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
    t.half_edges[0].next = None;
    let faces = enumerate_faces(&mut t);
    // h0 dead-ends; h2→h4→h6 runs into h0
    assert_eq!(faces.discarded_traces, 2);
    assert_eq!(faces.len(), 1);
    assert_eq!(faces.faces[0].nodes, vec![1, 0, 3, 2]);
    assert_eq!(t.half_edges[1].face, Some(0));
    assert_eq!(t.half_edges[2].face, None);
}

#[test]
fn angle_ties_break_by_target() {
    // 0→2 and 0→1 both point along +x
    let g = Graph::from_edges(3, &[(0, 2), (0, 1)]).unwrap();
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    let t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
    assert_eq!(t.outgoing(0), &[2, 0]);
}

#[test]
fn out_of_range_point_is_an_error() {
    let mut g = Graph::new();
    g.add_node(0);
    g.add_node(3);
    g.add_edge(0, 1).unwrap();
    let pts = vec![vector![0.0, 0.0]];
    assert!(matches!(
        build_half_edges(&g, &PointSet::new(&pts)),
        Err(GraphError::PointOutOfRange { node: 1, .. })
    ));
}

#[test]
fn hand_built_edge_to_missing_node_is_an_error() {
    let (mut g, pts) = square();
    g.edges.push(crate::graph::Edge { start: 2, end: 7 });
    assert!(matches!(
        build_half_edges(&g, &PointSet::new(&pts)),
        Err(GraphError::NodeOutOfRange { node: 7, count: 4 })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn jittered_grids_enumerate_cleanly(
        cols in 1usize..5,
        rows in 1usize..5,
        seed in any::<u64>(),
    ) {
        let (g, pts) = jittered_grid(cols, rows, seed, 0.25);
        let mut t = build_half_edges(&g, &PointSet::new(&pts)).unwrap();
        for h in 0..t.len() {
            prop_assert_eq!(t.twin(t.twin(h)), h);
        }
        let faces = enumerate_faces(&mut t);
        prop_assert_eq!(faces.discarded_traces, 0);
        prop_assert_eq!(faces.total_len(), t.len());
        prop_assert_eq!(faces.len(), cols * rows + 1);
        prop_assert!(t.half_edges.iter().all(|h| h.face.is_some()));
    }
}
