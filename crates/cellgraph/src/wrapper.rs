//! Exterior (wrapper) face detection.

use crate::cfg::WRAPPER_TIE_EPS;
use crate::geom::signed_area;
use crate::graph::Graph;
use crate::half_edge::FaceSet;
use crate::points::PointSet;

/// Index of the face with the largest absolute projected area.
///
/// Only region faces (three or more nodes) compete. When two areas tie within
/// a relative `WRAPPER_TIE_EPS`, the trace with positive signed area wins: it is
/// the exterior side of the loop. Returns `None` if no face has non-zero area.
pub fn detect_wrapper(faces: &FaceSet, graph: &Graph, points: &PointSet) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for face in faces.regions() {
        let signed = signed_area(&face.polygon(graph, points));
        if !signed.is_finite() || signed == 0.0 {
            continue;
        }
        best = match best {
            None => Some((face.index, signed)),
            Some((idx, cur)) => {
                let (a, b) = (signed.abs(), cur.abs());
                let tie = (a - b).abs() <= WRAPPER_TIE_EPS * a.max(b);
                if (tie && signed > 0.0 && cur < 0.0) || (!tie && a > b) {
                    Some((face.index, signed))
                } else {
                    Some((idx, cur))
                }
            }
        };
    }
    if let Some((idx, area)) = best {
        tracing::debug!(face = idx, area, "wrapper face");
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::half_edge::{build_half_edges, enumerate_faces};
    use crate::testutil::{grid, square};
    use approx::assert_relative_eq;
    use nalgebra::vector;

    #[test]
    fn single_loop_prefers_positive_trace() {
        let (g, pts) = square();
        let ps = PointSet::new(&pts);
        let mut t = build_half_edges(&g, &ps).unwrap();
        let faces = enumerate_faces(&mut t);
        assert_eq!(faces.len(), 2);
        let w = detect_wrapper(&faces, &g, &ps).unwrap();
        let area = signed_area(&faces.faces[w].polygon(&g, &ps));
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn grid_wrapper_encloses_everything() {
        let (g, pts) = grid(3, 2);
        let ps = PointSet::new(&pts);
        let mut t = build_half_edges(&g, &ps).unwrap();
        let faces = enumerate_faces(&mut t);
        let w = detect_wrapper(&faces, &g, &ps).unwrap();
        let area = signed_area(&faces.faces[w].polygon(&g, &ps));
        assert_relative_eq!(area, 6.0, epsilon = 1e-12);
        assert_eq!(faces.faces[w].nodes.len(), 10);
    }

    #[test]
    fn degenerate_graphs_have_no_wrapper() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        let ps = PointSet::new(&pts);
        let mut t = build_half_edges(&g, &ps).unwrap();
        let faces = enumerate_faces(&mut t);
        assert_eq!(detect_wrapper(&faces, &g, &ps), None);
        assert_eq!(detect_wrapper(&FaceSet::default(), &g, &ps), None);
    }
}
