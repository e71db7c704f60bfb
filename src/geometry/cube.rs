use std::sync::Arc;

use crate::geometry::mesh::{create_mesh, Mesh, Vertex};
use crate::transform::Transform;
use crate::vec3::{Normal3f, Point3f};

/// Faces in order -z, +z, -x, +x, -y, +y, two triangles each, flat normals.
const CUBE: [([f64; 3], [f64; 3]); 36] = [
    ([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    ([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    ([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    ([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    ([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    ([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    ([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    ([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    ([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    ([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    ([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    ([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    ([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    ([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    ([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    ([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    ([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    ([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    ([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    ([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    ([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    ([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    ([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    ([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    ([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    ([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    ([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    ([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    ([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    ([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    ([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    ([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    ([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    ([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    ([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    ([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
];

/// An axis-aligned cube with side 1 centered at the object origin.
pub fn unit_cube(object_to_world: Arc<Transform>) -> Arc<Mesh> {
    let vertices = CUBE
        .iter()
        .map(|&(p, n)| Vertex::new(Point3f::new(p[0], p[1], p[2]), Normal3f::new(n[0], n[1], n[2])))
        .collect();
    let indices = (0..CUBE.len() as u32).collect();

    create_mesh(vertices, indices, object_to_world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{create_triangles, Shape};
    use crate::ray::Ray;
    use crate::test_util::assert_aabb_eq;
    use crate::vec3::Vec3f;

    #[test]
    fn twelve_triangles() {
        let cube = unit_cube(Arc::new(Transform::identity()));
        assert_eq!(36, cube.vertex_count());
        assert_eq!(12, cube.triangle_count());
    }

    #[test]
    fn faces_are_flat_and_outward() {
        let cube = unit_cube(Arc::new(Transform::identity()));
        for face in 0..cube.triangle_count() {
            let normal = cube.vertex(face, 0).normal;
            for n in 0..3 {
                let v = cube.vertex(face, n);
                assert_eq!(normal, v.normal);
                assert_eq!(0.5, Vec3f::from(v.position).dot(&Vec3f::from(normal)));
            }
        }
    }

    #[test]
    fn translated_front_face() {
        let cube = unit_cube(Arc::new(Transform::translate(Vec3f::new(5.0, 5.0, 5.0))));
        let triangles = create_triangles(&cube);
        let front = &triangles[0];

        assert_aabb_eq(front.world_bounds(), 4.5, 4.5, 4.5, 5.5, 5.5, 4.5);
        assert!(front.intersect(&Ray::new(Point3f::new(5.2, 4.8, 5.2), Vec3f::new(0.0, 0.0, -1.0))));
        assert!(!front.intersect(&Ray::new(Point3f::new(5.2, 4.8, 5.2), Vec3f::new(0.0, 0.0, 1.0))));
    }
}
