//! Indexed triangle meshes and the triangles viewing them.

use std::sync::Arc;

use tracing::debug;

use crate::bounds::Aabb3f;
use crate::geometry::Shape;
use crate::ray::Ray;
use crate::transform::Transform;
use crate::vec3::{Normal3f, Point3f, Vec3f};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Point3f,
    pub normal: Normal3f,
}

impl Vertex {
    pub fn new(position: Point3f, normal: Normal3f) -> Self {
        Self { position, normal }
    }
}

/// Vertex and index buffers shared by all triangles of one model.
#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    object_to_world: Arc<Transform>,
    /// Vertex positions already moved into world space.
    world_positions: Vec<Point3f>,
    swaps_handedness: bool,
}

/// Validates the buffers and builds a mesh placed by `object_to_world`.
///
/// Panics if the index count is not a multiple of 3 or an index points past
/// the vertex buffer.
pub fn create_mesh(vertices: Vec<Vertex>, indices: Vec<u32>, object_to_world: Arc<Transform>) -> Arc<Mesh> {
    assert!(indices.len() % 3 == 0, "index count {} is not a multiple of 3", indices.len());
    if let Some(index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        panic!("vertex index {} out of range, mesh has {} vertices", index, vertices.len());
    }

    let world_positions = vertices.iter().map(|v| object_to_world.apply(&v.position)).collect();
    let swaps_handedness = object_to_world.swaps_handedness();

    debug!(vertices = vertices.len(), triangles = indices.len() / 3, swaps_handedness, "created mesh");

    Arc::new(Mesh {
        vertices,
        indices,
        object_to_world,
        world_positions,
        swaps_handedness,
    })
}

/// One triangle view per face of `mesh`.
pub fn create_triangles(mesh: &Arc<Mesh>) -> Vec<Arc<Triangle>> {
    (0..mesh.triangle_count())
        .map(|face| Arc::new(Triangle::new(Arc::clone(mesh), face)))
        .collect()
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The `n`-th vertex of triangle `face`.
    pub fn vertex(&self, face: usize, n: usize) -> &Vertex {
        &self.vertices[self.index(face, n)]
    }

    pub fn world_position(&self, face: usize, n: usize) -> Point3f {
        self.world_positions[self.index(face, n)]
    }

    pub fn object_to_world(&self) -> &Transform {
        &self.object_to_world
    }

    fn index(&self, face: usize, n: usize) -> usize {
        assert!(n < 3, "triangle vertex out of range: {}", n);
        assert!(face < self.triangle_count(), "face {} out of range, mesh has {}", face, self.triangle_count());

        self.indices[3 * face + n] as usize
    }
}

/// A single face of a mesh. Holds no geometry of its own.
#[derive(Clone, Debug)]
pub struct Triangle {
    mesh: Arc<Mesh>,
    face: usize,
}

impl Triangle {
    pub fn new(mesh: Arc<Mesh>, face: usize) -> Self {
        assert!(face < mesh.triangle_count(), "face {} out of range, mesh has {}", face, mesh.triangle_count());
        Self { mesh, face }
    }

    #[inline]
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    #[inline]
    pub fn vertex(&self, n: usize) -> &Vertex {
        self.mesh.vertex(self.face, n)
    }

    fn world_positions(&self) -> [Point3f; 3] {
        [
            self.mesh.world_position(self.face, 0),
            self.mesh.world_position(self.face, 1),
            self.mesh.world_position(self.face, 2),
        ]
    }
}

impl Shape for Triangle {
    fn object_bounds(&self) -> Aabb3f {
        Aabb3f::new(self.vertex(0).position, self.vertex(1).position).union_point(&self.vertex(2).position)
    }

    fn world_bounds(&self) -> Aabb3f {
        let [p0, p1, p2] = self.world_positions();
        Aabb3f::new(p0, p1).union_point(&p2)
    }

    /// Watertight test: moves the ray origin to zero, permutes the axes so the
    /// direction is dominant in z, and shears it onto +z. Hit testing is then a
    /// 2D sign check of the edge functions at the origin.
    fn intersect(&self, ray: &Ray) -> bool {
        let d = ray.direction;
        let kz = d.abs().max_dimension();
        let kx = (kz + 1) % 3;
        let ky = (kx + 1) % 3;

        let d = d.permute(kx, ky, kz);
        if d.z == 0.0 {
            return false;
        }

        let origin = Vec3f::from(ray.origin);
        let [p0, p1, p2] = self.world_positions();
        let p0 = (p0 - origin).permute(kx, ky, kz);
        let p1 = (p1 - origin).permute(kx, ky, kz);
        let p2 = (p2 - origin).permute(kx, ky, kz);

        let sx = -d.x / d.z;
        let sy = -d.y / d.z;
        let sz = 1.0 / d.z;

        let (x0, y0) = (p0.x + sx * p0.z, p0.y + sy * p0.z);
        let (x1, y1) = (p1.x + sx * p1.z, p1.y + sy * p1.z);
        let (x2, y2) = (p2.x + sx * p2.z, p2.y + sy * p2.z);

        let e0 = x1 * y2 - y1 * x2;
        let e1 = x2 * y0 - y2 * x0;
        let e2 = x0 * y1 - y0 * x1;

        // A zero edge function means the ray passes through an edge or vertex,
        // which counts as a hit.
        if (e0 < 0.0 || e1 < 0.0 || e2 < 0.0) && (e0 > 0.0 || e1 > 0.0 || e2 > 0.0) {
            return false;
        }

        let det = e0 + e1 + e2;
        if det == 0.0 {
            return false;
        }

        // Distance scaled by det, so the range check needs no division.
        let t_scaled = e0 * p0.z * sz + e1 * p1.z * sz + e2 * p2.z * sz;
        let max_t = ray.max_t();

        if det < 0.0 && (t_scaled >= 0.0 || t_scaled < max_t * det) {
            return false;
        }
        if det > 0.0 && (t_scaled <= 0.0 || t_scaled > max_t * det) {
            return false;
        }

        true
    }

    fn object_to_world(&self) -> &Transform {
        self.mesh.object_to_world()
    }

    fn swaps_handedness(&self) -> bool {
        self.mesh.swaps_handedness
    }
}
