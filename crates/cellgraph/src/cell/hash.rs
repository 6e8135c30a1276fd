//! Loop hashing for duplicate detection.
//!
//! A face and its reverse-direction trace describe the same physical loop, and
//! a loop has no preferred start. Both are collapsed by hashing a canonical
//! form: the lexicographically smallest rotation, over both directions, that
//! starts at the minimum node.

use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

use crate::graph::NodeId;

// Fixed seeds keep hashes stable across sessions of one build.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

#[inline]
fn hasher() -> ahash::AHasher {
    RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]).build_hasher()
}

/// Canonical form of a node loop (rotation- and direction-invariant).
pub fn canonical_nodes(nodes: &[NodeId]) -> Vec<NodeId> {
    let Some(&min) = nodes.iter().min() else {
        return Vec::new();
    };
    let reversed: Vec<NodeId> = nodes.iter().rev().copied().collect();
    let mut best: Vec<NodeId> = Vec::new();
    for seq in [nodes, reversed.as_slice()] {
        for k in (0..seq.len()).filter(|&k| seq[k] == min) {
            let cand: Vec<NodeId> = seq[k..].iter().chain(&seq[..k]).copied().collect();
            if best.is_empty() || cand < best {
                best = cand;
            }
        }
    }
    best
}

/// Hash of [`canonical_nodes`].
pub fn cell_hash(nodes: &[NodeId]) -> u64 {
    let mut h = hasher();
    canonical_nodes(nodes).hash(&mut h);
    h.finish()
}

/// Key of a directed start edge in the start-edge dedup set.
pub fn start_edge_key(from: NodeId, to: NodeId) -> u64 {
    let mut h = hasher();
    (from, to).hash(&mut h);
    h.finish()
}
