use crate::camera::Camera;
use crate::ray::Ray;
use crate::transform::Transform;
use crate::vec2::Point2f;
use crate::vec3::{Point3f, Vec3f};

const NEAR_PLANE: f64 = 0.01;
const FAR_PLANE: f64 = 1000.0;

/// Pinhole camera projecting through a perspective transform.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    world_to_camera: Transform,
    camera_to_screen: Transform,
    screen_to_raster: Transform,
    raster_to_camera: Transform,
}

impl PerspectiveCamera {
    /// `fov` is in degrees. The screen window `[screen_min, screen_max]` is
    /// mapped onto a raster of `width` x `height` pixels with y pointing down.
    pub fn new(
        world_to_camera: Transform,
        fov: f64,
        screen_min: Point2f,
        screen_max: Point2f,
        width: u32,
        height: u32,
    ) -> Self {
        let camera_to_screen = Transform::perspective(fov, NEAR_PLANE, FAR_PLANE);

        let screen_to_raster = Transform::scale(width as f64, height as f64, 1.0)
            * Transform::scale(1.0 / (screen_max.x - screen_min.x), 1.0 / (screen_min.y - screen_max.y), 1.0)
            * Transform::translate(Vec3f::new(-screen_min.x, -screen_max.y, 0.0));
        let raster_to_camera = camera_to_screen.inverse() * screen_to_raster.inverse();

        Self {
            world_to_camera,
            camera_to_screen,
            screen_to_raster,
            raster_to_camera,
        }
    }

    pub fn camera_to_screen(&self) -> &Transform {
        &self.camera_to_screen
    }

    pub fn screen_to_raster(&self) -> &Transform {
        &self.screen_to_raster
    }
}

impl Camera for PerspectiveCamera {
    fn generate_ray(&self, film_location: Point2f) -> (f64, Ray) {
        let p = self.raster_to_camera.apply(&Point3f::new(film_location.x, film_location.y, 0.0));
        let ray = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::from(p).normalize());

        (1.0, self.world_to_camera.inverse().apply(&ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_point3_eq, assert_vec3_eq};

    fn camera(position: Point3f, up: Vec3f) -> PerspectiveCamera {
        let world_to_camera = Transform::look_at(position, Point3f::new(0.0, 0.0, 0.0), up);
        PerspectiveCamera::new(world_to_camera, 45.0, Point2f::new(-1.0, -1.0), Point2f::new(1.0, 1.0), 32, 32)
    }

    #[test]
    fn screen_corners_map_to_raster_corners() {
        let camera = camera(Point3f::new(5.0, 5.0, 5.0), Vec3f::new(0.0, 0.0, 1.0));
        let s2r = camera.screen_to_raster();

        assert_point3_eq(s2r.apply(&Point3f::new(-1.0, 1.0, 0.0)), 0.0, 0.0, 0.0);
        assert_point3_eq(s2r.apply(&Point3f::new(1.0, -1.0, 0.0)), 32.0, 32.0, 0.0);
        assert_point3_eq(s2r.apply(&Point3f::new(0.0, 0.0, 0.5)), 16.0, 16.0, 0.5);
    }

    #[test]
    fn generate_ray() {
        let camera = camera(Point3f::new(5.01, 5.0, 0.0), Vec3f::new(0.0, 0.0, 1.0));
        let (weight, ray) = camera.generate_ray(Point2f::new(15.0, 18.0));

        assert_eq!(1.0, weight);
        assert_eq!(f64::INFINITY, ray.max_t());
        assert_point3_eq(ray.origin, 5.01, 5.0, 0.0);
        assert_vec3_eq(ray.direction, -0.7248868, -0.6869259, -0.0516902);
    }

    #[test]
    fn center_ray_looks_at_target() {
        let camera = camera(Point3f::new(0.0, 0.0, -4.0), Vec3f::new(0.0, 1.0, 0.0));
        let (_, ray) = camera.generate_ray(Point2f::new(16.0, 16.0));

        assert_point3_eq(ray.origin, 0.0, 0.0, -4.0);
        assert_vec3_eq(ray.direction, 0.0, 0.0, 1.0);
    }
}
