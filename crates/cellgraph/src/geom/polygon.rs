use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::TURN_EPS;

/// Orientation of a closed vertex sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    #[default]
    CounterClockwise,
}

impl Winding {
    /// Winding implied by a signed shoelace area (zero counts as counter-clockwise).
    #[inline]
    pub fn from_signed_area(area: f64) -> Self {
        if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    #[inline]
    pub fn is_clockwise(self) -> bool {
        matches!(self, Winding::Clockwise)
    }
}

/// Polar angle of a direction, with signed zeros folded to +0 so that
/// axis-aligned directions always map to the same end of (-π, π].
#[inline]
pub fn angle_of(d: Vector2<f64>) -> f64 {
    (d.y + 0.0).atan2(d.x + 0.0)
}

/// Counter-clockwise sweep from `from` to `to`, in (0, 2π].
///
/// Equal angles map to 2π: the walk only turns back on itself when nothing else is left.
#[inline]
pub fn ccw_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(std::f64::consts::TAU);
    if d <= 0.0 {
        std::f64::consts::TAU
    } else {
        d
    }
}

/// z-component of (b - a) × (c - a).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Shoelace area; positive for counter-clockwise order.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = poly[i];
        let q = poly[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Isoperimetric ratio `4π·A / P²`; 1 for a circle, 0 when the perimeter vanishes.
#[inline]
pub fn compactness(area: f64, perimeter: f64) -> f64 {
    if perimeter <= 0.0 {
        return 0.0;
    }
    4.0 * std::f64::consts::PI * area.abs() / (perimeter * perimeter)
}

/// Every non-collinear turn of the closed loop has the same sign.
///
/// Collinear and repeated vertices are skipped. Fewer than three vertices is
/// not convex.
pub fn is_convex(poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let turn = cross(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]);
        if turn.abs() <= TURN_EPS {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

/// Crossing-number containment test. Orientation-agnostic; boundary points
/// may land on either side.
pub fn point_in_polygon(p: Vector2<f64>, poly: &[Vector2<f64>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Euclidean distance from `p` to the segment `[a, b]`.
pub fn distance_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
