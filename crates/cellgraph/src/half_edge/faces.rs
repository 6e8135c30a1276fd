//! Face enumeration by tracing `next` links.

use super::types::{Face, FaceSet, HalfEdgeTable};

/// Partition the half-edges of `table` into closed traces and stamp each
/// consumed half with its face index.
///
/// A trace that hits a missing `next`, runs into a half consumed by another
/// trace, or exceeds `table.len()` steps is discarded; enumeration continues
/// with the next unvisited half. Leaf traces (fewer than three nodes) are kept
/// in the set so the face lengths still sum to the half-edge count; use
/// [`FaceSet::regions`] to skip them.
pub fn enumerate_faces(table: &mut HalfEdgeTable) -> FaceSet {
    let n = table.len();
    let mut visited = vec![false; n];
    let mut out = FaceSet::default();
    let mut trace: Vec<usize> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        trace.clear();
        let mut cur = start;
        let mut closed = false;
        while trace.len() < n {
            visited[cur] = true;
            trace.push(cur);
            match table.half_edges[cur].next {
                Some(nx) if nx == start => {
                    closed = true;
                    break;
                }
                Some(nx) if !visited[nx] => cur = nx,
                _ => break,
            }
        }
        if !closed {
            out.discarded_traces += 1;
            tracing::warn!(start, steps = trace.len(), "discarding open half-edge trace");
            continue;
        }
        let index = out.faces.len();
        for &h in &trace {
            table.half_edges[h].face = Some(index);
        }
        out.faces.push(Face {
            index,
            start,
            nodes: trace.iter().map(|&h| table.half_edges[h].origin).collect(),
        });
    }

    tracing::debug!(
        faces = out.faces.len(),
        discarded = out.discarded_traces,
        half_edges = n,
        "enumerated faces"
    );
    out
}
