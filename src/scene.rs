use crate::bounds::Aabb3f;
use crate::primitive::Primitive;
use crate::ray::Ray;

/// Everything a render can hit, behind a single root primitive.
pub struct Scene {
    root: Box<dyn Primitive>,
}

impl Scene {
    pub fn new(root: Box<dyn Primitive>) -> Self {
        Self { root }
    }

    #[inline]
    pub fn world_bounds(&self) -> Aabb3f {
        self.root.world_bounds()
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray) -> bool {
        self.root.intersect(ray)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::{create_triangles, unit_cube};
    use crate::primitive::{create_geometric_primitives, AggregatePrimitive};
    use crate::test_util::assert_aabb_eq;
    use crate::transform::Transform;
    use crate::vec3::{Point3f, Vec3f};

    fn cube_scene(object_to_world: Transform) -> Scene {
        let cube = unit_cube(Arc::new(object_to_world));
        let primitives = create_geometric_primitives(create_triangles(&cube));
        Scene::new(Box::new(AggregatePrimitive::new(primitives)))
    }

    #[test]
    fn world_bounds() {
        let scene = cube_scene(Transform::translate(Vec3f::new(5.0, 5.0, 5.0)));
        assert_aabb_eq(scene.world_bounds(), 4.5, 4.5, 4.5, 5.5, 5.5, 5.5);

        let scene = cube_scene(Transform::scale(2.0, 1.0, 4.0));
        assert_aabb_eq(scene.world_bounds(), -1.0, -0.5, -2.0, 1.0, 0.5, 2.0);
    }

    #[test]
    fn rotated_bounds_grow() {
        let scene = cube_scene(Transform::rotate_z(std::f64::consts::PI / 4.0));
        let half = (2.0f64).sqrt() / 2.0;
        assert_aabb_eq(scene.world_bounds(), -half, -half, -0.5, half, half, 0.5);
    }

    #[test]
    fn rays_from_inside_hit_both_ways() {
        let scene = cube_scene(Transform::translate(Vec3f::new(5.0, 5.0, 5.0)));
        let origin = Point3f::new(5.2, 4.8, 5.2);

        assert!(scene.intersect(&Ray::new(origin, Vec3f::new(0.0, 0.0, -1.0))));
        assert!(scene.intersect(&Ray::new(origin, Vec3f::new(0.0, 0.0, 1.0))));
    }

    #[test]
    fn rays_from_outside() {
        let scene = cube_scene(Transform::translate(Vec3f::new(5.0, 5.0, 5.0)));

        // Enters the cube through the -y face at t ~ 0.918.
        let towards = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::new(5.1, 4.9, 5.2));
        assert!(scene.intersect(&towards));
        assert!(!scene.intersect(&towards.with_max_t(0.9)));
        assert!(!scene.intersect(&Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::new(-1.0, -1.0, -1.0))));
        assert!(!scene.intersect(&Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::new(1.0, 0.0, 0.0))));
    }

    #[test]
    fn shared_across_threads() {
        let scene = Arc::new(cube_scene(Transform::identity()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let scene = Arc::clone(&scene);
                std::thread::spawn(move || {
                    let origin = Point3f::new(0.1 * i as f64 - 0.2, 0.1, -3.0);
                    scene.intersect(&Ray::new(origin, Vec3f::new(0.0, 0.0, 1.0)))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
