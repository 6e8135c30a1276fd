//! Validation limits and per-session shared state.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use ahash::AHashSet;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geom::{point_in_polygon, Winding};
use crate::graph::NodeId;

use super::hash::start_edge_key;
use super::types::Cell;

/// Inclusive range; an unset end is open.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limit<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Limit<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> Limit<T> {
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[inline]
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[inline]
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    #[inline]
    pub fn contains(&self, v: T) -> bool {
        self.min.map_or(true, |m| v >= m) && self.max.map_or(true, |m| v <= m)
    }
}

/// Reports whether a candidate polygon overlaps a registered hole.
pub trait HoleTester: Send + Sync {
    fn overlaps(&self, polygon: &[Vector2<f64>]) -> bool;
}

/// Holes given as points: a polygon overlaps when it contains any of them.
#[derive(Clone, Debug, Default)]
pub struct PointHoles {
    pub points: Vec<Vector2<f64>>,
}

impl PointHoles {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }
}

impl HoleTester for PointHoles {
    fn overlaps(&self, polygon: &[Vector2<f64>]) -> bool {
        self.points.iter().any(|&p| point_in_polygon(p, polygon))
    }
}

/// Limits, policies, and the shared state of one extraction session.
///
/// Create one per session, pass it by reference to every validation, drop it
/// (or call [`CellConstraints::reset_session`]) when the session ends. The
/// wrapper cell is owned by the caller; this only keeps a shared handle.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CellConstraints {
    /// Winding every accepted cell is normalized to.
    pub winding: Winding,
    pub convex_only: bool,
    pub concave_only: bool,
    pub keep_cells_with_leaves: bool,
    /// Insert each leaf node twice (zero-width excursion) when leaves are kept.
    pub duplicate_leaf_points: bool,
    /// Unique nodes per cell.
    pub point_count: Limit<usize>,
    pub segment_length: Limit<f64>,
    /// Diagonal of the world-space bounds.
    pub bounds_size: Limit<f64>,
    pub perimeter: Limit<f64>,
    pub area: Limit<f64>,
    pub compactness: Limit<f64>,
    /// Area difference under which a cell is classified as the wrapper, in
    /// projected area units. Graphs whose cells are smaller than this see every
    /// cell as the wrapper; scale it or set `relative_wrapper_tolerance`.
    pub wrapper_tolerance: f64,
    /// Read `wrapper_tolerance` as a fraction of the wrapper's area.
    pub relative_wrapper_tolerance: bool,
    #[serde(skip)]
    pub holes: Option<Arc<dyn HoleTester>>,
    #[serde(skip)]
    pub(crate) wrapper: Option<Arc<Cell>>,
    #[serde(skip)]
    pub(crate) unique_cells: RwLock<AHashSet<u64>>,
    #[serde(skip)]
    pub(crate) unique_start_edges: RwLock<AHashSet<u64>>,
}

impl Default for CellConstraints {
    fn default() -> Self {
        Self {
            winding: Winding::CounterClockwise,
            convex_only: false,
            concave_only: false,
            keep_cells_with_leaves: true,
            duplicate_leaf_points: false,
            point_count: Limit::at_least(3),
            segment_length: Limit::default(),
            bounds_size: Limit::default(),
            perimeter: Limit::default(),
            area: Limit::default(),
            compactness: Limit::default(),
            wrapper_tolerance: 0.1,
            relative_wrapper_tolerance: false,
            holes: None,
            wrapper: None,
            unique_cells: RwLock::default(),
            unique_start_edges: RwLock::default(),
        }
    }
}

impl fmt::Debug for CellConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellConstraints")
            .field("winding", &self.winding)
            .field("convex_only", &self.convex_only)
            .field("concave_only", &self.concave_only)
            .field("keep_cells_with_leaves", &self.keep_cells_with_leaves)
            .field("duplicate_leaf_points", &self.duplicate_leaf_points)
            .field("point_count", &self.point_count)
            .field("segment_length", &self.segment_length)
            .field("bounds_size", &self.bounds_size)
            .field("perimeter", &self.perimeter)
            .field("area", &self.area)
            .field("compactness", &self.compactness)
            .field("wrapper_tolerance", &self.wrapper_tolerance)
            .field("relative_wrapper_tolerance", &self.relative_wrapper_tolerance)
            .field("holes", &self.holes.is_some())
            .field("wrapper", &self.wrapper.as_ref().map(|w| w.area))
            .finish_non_exhaustive()
    }
}

impl CellConstraints {
    pub fn with_holes(mut self, holes: Arc<dyn HoleTester>) -> Self {
        self.holes = Some(holes);
        self
    }

    #[inline]
    pub fn wrapper(&self) -> Option<&Arc<Cell>> {
        self.wrapper.as_ref()
    }

    pub fn set_wrapper(&mut self, cell: Arc<Cell>) {
        self.wrapper = Some(cell);
    }

    pub fn clear_wrapper(&mut self) {
        self.wrapper = None;
    }

    /// Largest area difference from `wrapper_area` still classified as the wrapper.
    #[inline]
    pub fn wrapper_tolerance_for(&self, wrapper_area: f64) -> f64 {
        if self.relative_wrapper_tolerance {
            self.wrapper_tolerance * wrapper_area
        } else {
            self.wrapper_tolerance
        }
    }

    /// Record a cell hash; `false` if it was already claimed this session.
    pub fn try_claim_cell(&self, hash: u64) -> bool {
        claim(&self.unique_cells, hash)
    }

    /// Record a directed start edge; `false` if a walk already started there.
    pub fn try_claim_start_edge(&self, from: NodeId, to: NodeId) -> bool {
        claim(&self.unique_start_edges, start_edge_key(from, to))
    }

    pub fn is_cell_claimed(&self, hash: u64) -> bool {
        self.unique_cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&hash)
    }

    pub fn claimed_cells(&self) -> usize {
        self.unique_cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget dedup state and the wrapper; limits are kept.
    pub fn reset_session(&mut self) {
        self.unique_cells
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.unique_start_edges
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.wrapper = None;
    }
}

/// Membership under a read lock; escalate to a write lock only to insert.
/// `insert` reports the final answer, so two racing writers cannot both win.
fn claim(set: &RwLock<AHashSet<u64>>, key: u64) -> bool {
    {
        let seen = set.read().unwrap_or_else(PoisonError::into_inner);
        if seen.contains(&key) {
            return false;
        }
    }
    set.write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key)
}
