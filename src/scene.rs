use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vec3::Vec3;

/// The inputs to a launch: the rays to fire and the spheres to fire them at.
///
/// Scenes are stored as JSON:
///
/// ```json
/// {
///   "rays": [{"origin": [0, 0, 0], "direction": [1, 0, 0]}],
///   "spheres": [{"center": [1, 0, 0], "radius": 1}]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub rays: Vec<Ray>,
    #[serde(default)]
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Two rays along +X and +Y from the origin, and two unit spheres whose
    /// surfaces pass through the origin.
    pub fn demo() -> Self {
        Scene {
            rays: vec![
                Ray::new(Vec3(0., 0., 0.), Vec3(1., 0., 0.)),
                Ray::new(Vec3(0., 0., 0.), Vec3(0., 1., 0.)),
            ],
            spheres: vec![
                Sphere::new(Vec3(1., 0., 0.), 1.),
                Sphere::new(Vec3(0., 1., 0.), 1.),
            ],
        }
    }

    /// Rays from random points in the unit cube toward random directions,
    /// and spheres scattered through a 10-unit cube with radii below 1.
    pub fn random(rng: &mut impl Rng, n_rays: usize, n_spheres: usize) -> Self {
        let rays = (0..n_rays)
            .map(|_| {
                let origin = rng.gen::<Vec3>();
                let direction = 2. * rng.gen::<Vec3>() - Vec3::from(1.);
                Ray::new(origin, direction)
            })
            .collect();
        let spheres = (0..n_spheres)
            .map(|_| {
                let center = 10. * rng.gen::<Vec3>() - Vec3::from(5.);
                Sphere::new(center, rng.gen::<f64>())
            })
            .collect();
        Scene { rays, spheres }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, SceneError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let file = File::open(path)?;
        Scene::from_reader(BufReader::new(file))
    }
}
