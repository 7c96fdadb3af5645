use serde::{Deserialize, Serialize};

use crate::ray::Ray;
use crate::vec3::Vec3;

/// A sphere.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere. Expected to be non-negative; zero makes the
    /// sphere a point target.
    pub radius: f64,
}

/// A point where a ray strikes a sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit. Never negative, though it may be NaN for a
    /// ray with a zero-length direction.
    pub t: f64,
    /// The hit point, `origin + t * direction`.
    pub point: Vec3,
    /// The sphere that was hit.
    pub sphere: Sphere,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Sphere { center, radius }
    }

    /// Tests if `ray` strikes the sphere at or in front of its origin.
    ///
    /// Only the near root of the intersection quadratic is considered. If it
    /// lies behind the origin the result is `None`, even when the far root is
    /// in front; in particular a ray that starts inside the sphere never hits
    /// it. Likewise a ray starting on the surface hits at `t = 0` only if it
    /// points into the sphere.
    ///
    /// Degenerate input is not checked. A zero-length direction divides by
    /// zero and the resulting NaN or infinity flows into the hit point.
    #[inline]
    pub fn hit(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2. * a);
        if t < 0. {
            return None;
        }

        Some(Intersection {
            t,
            point: ray.point_at_parameter(t),
            sphere: *self,
        })
    }
}

/// Free-function form of `Sphere::hit`.
#[inline]
pub fn intersect(ray: &Ray, sphere: &Sphere) -> Option<Intersection> {
    sphere.hit(ray)
}
