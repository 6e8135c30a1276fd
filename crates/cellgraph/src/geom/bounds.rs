use nalgebra::Vector3;

/// Axis-aligned box in world space. Starts inverted (empty) and grows by `extend`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb3 {
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector3::repeat(f64::INFINITY),
            max: Vector3::repeat(f64::NEG_INFINITY),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    #[inline]
    pub fn extend(&mut self, p: Vector3<f64>) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    /// Edge lengths along each axis (zero when empty).
    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.max - self.min
        }
    }

    /// Length of the box diagonal; the scalar checked against bounds limits.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    #[inline]
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        p.x >= self.min.x
            && p.y >= self.min.y
            && p.z >= self.min.z
            && p.x <= self.max.x
            && p.y <= self.max.y
            && p.z <= self.max.z
    }
}
