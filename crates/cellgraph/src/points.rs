//! Position arrays indexed by point (not node) index.

use nalgebra::{Vector2, Vector3};

use crate::error::{GraphError, GraphResult};

/// Borrowed view of the positions a graph's nodes refer to.
///
/// `projected` drives angles, area, winding and containment. `world`, when
/// present, drives bounds, centroid, segment lengths and perimeter; otherwise
/// the projected position is lifted to `z = 0`.
#[derive(Clone, Copy, Debug)]
pub struct PointSet<'a> {
    projected: &'a [Vector2<f64>],
    world: Option<&'a [Vector3<f64>]>,
}

impl<'a> PointSet<'a> {
    #[inline]
    pub fn new(projected: &'a [Vector2<f64>]) -> Self {
        Self {
            projected,
            world: None,
        }
    }

    /// Pair projected positions with their world counterparts.
    pub fn with_world(
        projected: &'a [Vector2<f64>],
        world: &'a [Vector3<f64>],
    ) -> GraphResult<Self> {
        if projected.len() != world.len() {
            return Err(GraphError::ProjectionMismatch {
                projected: projected.len(),
                world: world.len(),
            });
        }
        Ok(Self {
            projected,
            world: Some(world),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.projected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.projected.is_empty()
    }

    #[inline]
    pub fn projected(&self, point: usize) -> Vector2<f64> {
        self.projected[point]
    }

    #[inline]
    pub fn world(&self, point: usize) -> Vector3<f64> {
        match self.world {
            Some(w) => w[point],
            None => {
                let p = self.projected[point];
                Vector3::new(p.x, p.y, 0.0)
            }
        }
    }
}
