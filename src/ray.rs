use serde::{Deserialize, Serialize};

use crate::vec3::Vec3;

/// A ray, beginning at `origin` and extending along `direction`.
///
/// `direction` need not be a unit vector; the sphere test is invariant under
/// its scale.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// Finds the point along the ray at parameter `t`. Positive values of `t`
    /// represent positions forward from the origin, and negative values,
    /// behind the origin.
    pub fn point_at_parameter(&self, t: f64) -> Vec3 {
        self.origin + self.direction.scale(t)
    }
}
