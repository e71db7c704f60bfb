use crate::bounds::Aabb3f;
use crate::ray::Ray;
use crate::transform::Transform;

mod cube;
mod mesh;

pub use self::cube::unit_cube;
pub use self::mesh::{create_mesh, create_triangles, Mesh, Triangle, Vertex};

/// A surface that rays can hit.
///
/// Shapes are authored in object space and placed into the world by their
/// object-to-world transform. Queries take world-space rays.
pub trait Shape: Send + Sync {
    fn object_bounds(&self) -> Aabb3f;
    fn world_bounds(&self) -> Aabb3f;

    /// Whether the ray hits the surface within `[0, ray.max_t()]`.
    fn intersect(&self, ray: &Ray) -> bool;

    fn object_to_world(&self) -> &Transform;

    fn world_to_object(&self) -> Transform {
        self.object_to_world().inverse()
    }

    /// Whether the object-to-world transform flips the winding order.
    fn swaps_handedness(&self) -> bool;
}
