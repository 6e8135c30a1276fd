//! 2D polygon math and 3D bounds used by the cell pipeline.
//!
//! Purpose
//! - Keep the numeric predicates (shoelace area, turn signs, containment,
//!   angular deltas) in one place so the half-edge builder, the seed walk and
//!   the validator agree on orientation.
//!
//! Conventions
//! - Angles come from `atan2` in the projected plane, in (-π, π].
//! - Positive signed area means counter-clockwise order in a y-up frame.

mod bounds;
mod polygon;

pub use bounds::Aabb3;
pub use polygon::{
    angle_of, ccw_delta, compactness, cross, distance_to_segment, is_convex, point_in_polygon,
    signed_area, Winding,
};
