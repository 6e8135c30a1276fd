//! Cell data and validation outcomes.

use std::fmt;

use nalgebra::{Vector2, Vector3};

use crate::geom::{point_in_polygon, Aabb3, Winding};
use crate::graph::NodeId;

/// A closed polygonal region bounded by graph edges.
///
/// Populated once by the validator (or by [`Cell::from_nodes_unchecked`]) and
/// shared read-only afterwards. `nodes` index the caller's graph; `polygon`
/// holds the matching projected positions (leaf duplicates included).
#[derive(Clone, Debug)]
pub struct Cell {
    pub nodes: Vec<NodeId>,
    pub polygon: Vec<Vector2<f64>>,
    pub bounds: Aabb3,
    pub centroid: Vector3<f64>,
    pub perimeter: f64,
    /// Absolute area in the projected plane.
    pub area: f64,
    pub compactness: f64,
    pub is_convex: bool,
    pub is_clockwise: bool,
    pub is_closed_loop: bool,
    pub built_successfully: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            polygon: Vec::new(),
            bounds: Aabb3::empty(),
            centroid: Vector3::zeros(),
            perimeter: 0.0,
            area: 0.0,
            compactness: 0.0,
            is_convex: false,
            is_clockwise: false,
            is_closed_loop: false,
            built_successfully: false,
        }
    }
}

impl Cell {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        if self.is_clockwise {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Area with the sign of the stored winding.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        if self.is_clockwise {
            -self.area
        } else {
            self.area
        }
    }

    /// Projected containment test.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_polygon(p, &self.polygon)
    }
}

/// Outcome of validating one node loop.
///
/// Soft outcomes (limits, aspect, holes) leave a complete polygon on the cell,
/// so callers may keep it for containment queries. Structural outcomes do not
/// describe a usable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellResult {
    Success,
    Leaf,
    Duplicate,
    Hole,
    WrapperCell,
    WrongAspect,
    OutsidePointsLimit,
    OutsideSegmentsLimit,
    OutsideBoundsLimit,
    OutsidePerimeterLimit,
    OutsideAreaLimit,
    OutsideCompactnessLimit,
    OpenCell,
    Unknown,
}

impl CellResult {
    pub const ALL: [CellResult; 14] = [
        CellResult::Success,
        CellResult::Leaf,
        CellResult::Duplicate,
        CellResult::Hole,
        CellResult::WrapperCell,
        CellResult::WrongAspect,
        CellResult::OutsidePointsLimit,
        CellResult::OutsideSegmentsLimit,
        CellResult::OutsideBoundsLimit,
        CellResult::OutsidePerimeterLimit,
        CellResult::OutsideAreaLimit,
        CellResult::OutsideCompactnessLimit,
        CellResult::OpenCell,
        CellResult::Unknown,
    ];

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, CellResult::Success)
    }

    /// Rejected by a configured size/shape/hole constraint; geometry is valid.
    pub fn is_soft(self) -> bool {
        matches!(
            self,
            CellResult::Hole
                | CellResult::WrongAspect
                | CellResult::OutsidePointsLimit
                | CellResult::OutsideSegmentsLimit
                | CellResult::OutsideBoundsLimit
                | CellResult::OutsidePerimeterLimit
                | CellResult::OutsideAreaLimit
                | CellResult::OutsideCompactnessLimit
        )
    }

    /// Topologically unusable: leaf, duplicate, open, or unclassifiable.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            CellResult::Leaf | CellResult::Duplicate | CellResult::OpenCell | CellResult::Unknown
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellResult::Success => "success",
            CellResult::Leaf => "leaf",
            CellResult::Duplicate => "duplicate",
            CellResult::Hole => "hole",
            CellResult::WrapperCell => "wrapper_cell",
            CellResult::WrongAspect => "wrong_aspect",
            CellResult::OutsidePointsLimit => "outside_points_limit",
            CellResult::OutsideSegmentsLimit => "outside_segments_limit",
            CellResult::OutsideBoundsLimit => "outside_bounds_limit",
            CellResult::OutsidePerimeterLimit => "outside_perimeter_limit",
            CellResult::OutsideAreaLimit => "outside_area_limit",
            CellResult::OutsideCompactnessLimit => "outside_compactness_limit",
            CellResult::OpenCell => "open_cell",
            CellResult::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CellResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
