#![deny(unsafe_code)]

#[macro_use]
extern crate log;

pub mod error;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vec3;

use rayon::prelude::*;

pub use crate::error::{LaunchError, SceneError};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::sphere::{intersect, Intersection, Sphere};
pub use crate::vec3::Vec3;

/// An `Intersection` along with the positions, in the launch's input slices,
/// of the ray and sphere that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaunchHit {
    pub ray: usize,
    pub sphere: usize,
    pub intersection: Intersection,
}

/// Tests every ray against every sphere, collecting the hits.
///
/// Pairs are visited ray-major, sphere-minor, and hits come out in that
/// order. Nothing is sorted or deduplicated, so a ray that hits three spheres
/// contributes three records.
pub fn launch(rays: &[Ray], spheres: &[Sphere]) -> Vec<Intersection> {
    strip(launch_indexed(rays, spheres))
}

/// Like `launch`, but remembers which ray and sphere each hit came from.
pub fn launch_indexed(rays: &[Ray], spheres: &[Sphere]) -> Vec<LaunchHit> {
    let hits: Vec<LaunchHit> = rays
        .iter()
        .enumerate()
        .flat_map(|(ri, ray)| hits_for_ray(ri, ray, spheres))
        .collect();
    log_summary(rays, spheres, &hits);
    hits
}

/// Parallel `launch`. Rays are split across the rayon pool; the output is
/// identical to the sequential version, order included.
pub fn par_launch(rays: &[Ray], spheres: &[Sphere]) -> Vec<Intersection> {
    strip(par_launch_indexed(rays, spheres))
}

/// Parallel `launch_indexed`.
pub fn par_launch_indexed(rays: &[Ray], spheres: &[Sphere]) -> Vec<LaunchHit> {
    let hits: Vec<LaunchHit> = rays
        .par_iter()
        .enumerate()
        .flat_map_iter(|(ri, ray)| hits_for_ray(ri, ray, spheres))
        .collect();
    log_summary(rays, spheres, &hits);
    hits
}

/// Checks that no ray has a zero-length direction and no sphere a negative
/// (or NaN) radius. Rays are checked first; the first offender is reported.
pub fn validate(rays: &[Ray], spheres: &[Sphere]) -> Result<(), LaunchError> {
    if let Some(ray) = rays.iter().position(|r| r.direction.dot(r.direction) == 0.) {
        return Err(LaunchError::ZeroDirection { ray });
    }
    if let Some(sphere) = spheres.iter().position(|s| !(s.radius >= 0.)) {
        return Err(LaunchError::NegativeRadius {
            sphere,
            radius: spheres[sphere].radius,
        });
    }
    Ok(())
}

/// `launch`, after rejecting degenerate input with `validate`.
pub fn try_launch(rays: &[Ray], spheres: &[Sphere]) -> Result<Vec<Intersection>, LaunchError> {
    validate(rays, spheres).map_err(|e| {
        warn!("{}", e);
        e
    })?;
    Ok(launch(rays, spheres))
}

fn hits_for_ray<'a>(
    ri: usize,
    ray: &'a Ray,
    spheres: &'a [Sphere],
) -> impl Iterator<Item = LaunchHit> + 'a {
    spheres.iter().enumerate().filter_map(move |(si, sphere)| {
        let intersection = sphere.hit(ray)?;
        trace!("ray {} hit sphere {} at t = {}", ri, si, intersection.t);
        Some(LaunchHit {
            ray: ri,
            sphere: si,
            intersection,
        })
    })
}

fn strip(hits: Vec<LaunchHit>) -> Vec<Intersection> {
    hits.into_iter().map(|h| h.intersection).collect()
}

fn log_summary(rays: &[Ray], spheres: &[Sphere], hits: &[LaunchHit]) {
    debug!(
        "launched {} rays at {} spheres: {} hits",
        rays.len(),
        spheres.len(),
        hits.len()
    );
}
