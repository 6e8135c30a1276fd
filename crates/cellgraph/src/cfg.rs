//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, not knobs. User-facing limits live in `CellConstraints`;
//!   these only guard predicates against floating-point noise.

/// Polygons with absolute area at or below this are degenerate.
pub(crate) const AREA_EPS: f64 = 1e-12;
/// Turns with |cross| at or below this are treated as collinear in convexity tests.
pub(crate) const TURN_EPS: f64 = 1e-12;
/// Relative tolerance under which two face areas count as tied during wrapper detection.
pub(crate) const WRAPPER_TIE_EPS: f64 = 1e-9;
