//! Geometry core of a small offline ray tracer: vector algebra, affine
//! transforms, watertight ray-triangle intersection and the primitive
//! hierarchy a scene is built from.

#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

pub mod bounds;
pub mod camera;
pub mod config;
pub mod filter;
pub mod geometry;
pub mod matrix;
pub mod primitive;
pub mod ray;
pub mod scalar;
pub mod scene;
pub mod transform;
pub mod vec2;
pub mod vec3;
pub mod vec4;

#[cfg(test)]
mod test_util;

pub use crate::bounds::{Aabb3, Aabb3f, Aabb3i};
pub use crate::camera::{Camera, Film, PerspectiveCamera, Pixel};
pub use crate::config::RenderConfig;
pub use crate::filter::{BoxFilter, Filter};
pub use crate::geometry::{create_mesh, create_triangles, unit_cube, Mesh, Shape, Triangle, Vertex};
pub use crate::matrix::Matrix4x4;
pub use crate::primitive::{create_geometric_primitives, Accelerator, AggregatePrimitive, GeometricPrimitive, LinearScan, Primitive};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::transform::{Transform, Transformable};
pub use crate::vec2::{Point2, Point2f, Point2i, Vec2, Vec2f, Vec2i};
pub use crate::vec3::{Normal3, Normal3f, Point3, Point3f, Point3i, Vec3, Vec3f, Vec3i};
pub use crate::vec4::Vec4;
