use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// A three-vector of doubles, used both as a position and as a direction.
///
/// The components of the vector can be accessed tuple-style (`v.0`, `v.1`,
/// `v.2`) or through the `Axis` enum (`v[X]`, `v[Y]`, `v[Z]`), which requires
/// a `use raylaunch::vec3::Axis::*` statement.
///
/// In JSON a `Vec3` is a three-element array, `[x, y, z]`.
#[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3(pub f64, pub f64, pub f64);

impl Vec3 {
    /// Computes the dot product of two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.zip_with(other, core::ops::Mul::mul)
            .reduce(core::ops::Add::add)
    }

    /// Gets the length/magnitude of a vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Multiplies every component by `factor`. Same as `factor * self`.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        self.map(|x| x * factor)
    }

    /// Applies `f` to each element of the vector in turn, giving a new vector.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Vec3(f(self.0), f(self.1), f(self.2))
    }

    /// Combines each corresponding element of `self` and `other` by giving them
    /// as arguments to function `f`. The results are collected into a new
    /// vector.
    #[inline]
    pub fn zip_with(self, other: Vec3, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Vec3(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// Combines the elements of `self` using `f` until only one result remains.
    #[inline]
    pub fn reduce(self, f: impl Fn(f64, f64) -> f64) -> f64 {
        f(f(self.0, self.1), self.2)
    }
}

/// Broadcasts a single value to all vector lanes.
impl From<f64> for Vec3 {
    #[inline]
    fn from(v: f64) -> Self {
        Vec3(v, v, v)
    }
}

/// `scalar * vector`
impl std::ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

/// `vector + vector`, which is also how a displacement is applied to a point.
impl std::ops::Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Self::Output {
        self.zip_with(rhs, std::ops::Add::add)
    }
}

/// `vector - vector`
impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Self::Output {
        self.zip_with(rhs, std::ops::Sub::sub)
    }
}

/// `-vector`
impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(std::ops::Neg::neg)
    }
}

/// Allow `Vec3` to be produced by `Rng::gen`.
///
/// The resulting vector has each component in the half-open range `[0,1)`. Note
/// that this is *not* a unit vector.
impl rand::distributions::Distribution<Vec3> for rand::distributions::Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Names for vector lanes when used as a coordinate.
///
/// `Vec3` has an `Index` impl for `Axis`, so you can use `Axis` values to
/// select components from a `Vec3`:
///
/// ```
/// use raylaunch::vec3::{Vec3, Axis::*};
///
/// let v = Vec3(1., 2., 3.);
/// assert_eq!(v[X], 1.);
/// assert_eq!(v[Y], 2.);
/// assert_eq!(v[Z], 3.);
/// ```
#[derive(Copy, Clone, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

use Axis::*;

impl ::std::ops::Index<Axis> for Vec3 {
    type Output = f64;

    fn index(&self, idx: Axis) -> &Self::Output {
        match idx {
            X => &self.0,
            Y => &self.1,
            Z => &self.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        assert_eq!(Vec3(1., 2., 3.) + Vec3(0.5, -2., 4.), Vec3(1.5, 0., 7.));
    }

    #[test]
    fn scale_matches_scalar_multiplication() {
        let v = Vec3(1., -2., 0.25);
        assert_eq!(v.scale(4.), Vec3(4., -8., 1.));
        assert_eq!(4. * v, v.scale(4.));
    }

    #[test]
    fn dot_and_length() {
        let v = Vec3(3., 4., 0.);
        assert_eq!(v.dot(Vec3(1., 1., 1.)), 7.);
        assert_eq!(v.length(), 5.);
    }

    #[test]
    fn sub_and_neg() {
        let v = Vec3(1., 2., 3.);
        assert_eq!(v - v, Vec3::default());
        assert_eq!(-v, Vec3(-1., -2., -3.));
    }

    #[test]
    fn scaling_by_nan_propagates() {
        let v = Vec3(1., 0., 0.).scale(std::f64::NAN);
        assert!(v.0.is_nan() && v.1.is_nan() && v.2.is_nan());
    }
}
