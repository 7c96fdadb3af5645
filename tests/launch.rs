use rand::prelude::*;

use raylaunch::*;

#[test]
fn ray_along_x_touches_sphere_at_origin() {
    let ray = Ray::new(Vec3(0., 0., 0.), Vec3(1., 0., 0.));
    let sphere = Sphere::new(Vec3(1., 0., 0.), 1.);
    let hit = intersect(&ray, &sphere).expect("should hit");
    assert_eq!(hit.point, Vec3(0., 0., 0.));
    assert_eq!(hit.sphere, sphere);
}

#[test]
fn ray_along_y_grazes_sphere_on_x_axis() {
    // The origin lies on the sphere and the ray is tangent there: the
    // discriminant is exactly zero and the single root is t = 0.
    let ray = Ray::new(Vec3(0., 0., 0.), Vec3(0., 1., 0.));
    let sphere = Sphere::new(Vec3(1., 0., 0.), 1.);
    let hit = intersect(&ray, &sphere).expect("tangent at the origin");
    assert_eq!(hit.t, 0.);
    assert_eq!(hit.point, Vec3(0., 0., 0.));
}

#[test]
fn ray_along_y_misses_offset_sphere() {
    let ray = Ray::new(Vec3(0., 0., 0.), Vec3(0., 1., 0.));
    let sphere = Sphere::new(Vec3(1.5, 0., 0.), 1.);
    assert_eq!(intersect(&ray, &sphere), None);
}

#[test]
fn demo_scene_hits_every_pair_at_the_origin() {
    let scene = Scene::demo();
    let hits = launch_indexed(&scene.rays, &scene.spheres);

    let pairs: Vec<_> = hits.iter().map(|h| (h.ray, h.sphere)).collect();
    assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    for hit in &hits {
        assert_eq!(hit.intersection.point, Vec3(0., 0., 0.));
        assert_eq!(hit.intersection.sphere, scene.spheres[hit.sphere]);
    }
}

#[test]
fn tangent_ray_yields_one_record() {
    let rays = [Ray::new(Vec3(-5., 1., 0.), Vec3(1., 0., 0.))];
    let spheres = [Sphere::new(Vec3(0., 0., 0.), 1.)];
    let hits = launch(&rays, &spheres);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].point, Vec3(0., 1., 0.));
}

#[test]
fn origin_inside_sphere_is_a_miss() {
    // Known limitation: only the near root is considered.
    let rays = [Ray::new(Vec3(0.1, 0.2, 0.3), Vec3(0., 0., 1.))];
    let spheres = [Sphere::new(Vec3(0., 0., 0.), 3.)];
    assert!(launch(&rays, &spheres).is_empty());
}

#[test]
fn hits_are_reproducible_from_their_pair() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    let scene = Scene::random(&mut rng, 200, 40);

    let hits = launch_indexed(&scene.rays, &scene.spheres);
    assert!(!hits.is_empty());
    assert!(hits.len() <= scene.rays.len() * scene.spheres.len());
    for hit in &hits {
        let again = intersect(&scene.rays[hit.ray], &scene.spheres[hit.sphere]);
        assert_eq!(again, Some(hit.intersection));
        assert!(hit.intersection.t >= 0.);
    }
}

#[test]
fn hit_points_lie_on_their_sphere() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let scene = Scene::random(&mut rng, 200, 40);

    for hit in launch(&scene.rays, &scene.spheres) {
        let s = hit.sphere;
        let distance = (hit.point - s.center).length();
        assert!(
            (distance - s.radius).abs() < 1e-9,
            "{:?} is {} from the center of {:?}",
            hit.point,
            distance,
            s
        );
    }
}

#[test]
fn parallel_launch_matches_sequential() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let scene = Scene::random(&mut rng, 500, 25);

    assert_eq!(
        par_launch_indexed(&scene.rays, &scene.spheres),
        launch_indexed(&scene.rays, &scene.spheres)
    );
    assert_eq!(
        par_launch(&scene.rays, &scene.spheres),
        launch(&scene.rays, &scene.spheres)
    );
}

#[test]
fn try_launch_rejects_degenerate_scene() {
    let mut scene = Scene::demo();
    scene.spheres.push(Sphere::new(Vec3(3., 3., 3.), -1.));
    assert_eq!(
        try_launch(&scene.rays, &scene.spheres),
        Err(LaunchError::NegativeRadius {
            sphere: 2,
            radius: -1.
        })
    );

    scene.rays.push(Ray::new(Vec3(1., 1., 1.), Vec3(0., 0., 0.)));
    assert_eq!(
        try_launch(&scene.rays, &scene.spheres),
        Err(LaunchError::ZeroDirection { ray: 2 })
    );
}
