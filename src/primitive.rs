//! Primitives tie shapes into the scene and group them into aggregates.

use std::sync::Arc;

use tracing::debug;

use crate::bounds::Aabb3f;
use crate::geometry::{Shape, Triangle};
use crate::ray::Ray;

pub trait Primitive: Send + Sync {
    fn world_bounds(&self) -> Aabb3f;
    fn intersect(&self, ray: &Ray) -> bool;
}

/// A primitive backed by exactly one shape.
pub struct GeometricPrimitive {
    shape: Arc<dyn Shape>,
}

impl GeometricPrimitive {
    pub fn new(shape: Arc<dyn Shape>) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }
}

impl Primitive for GeometricPrimitive {
    #[inline]
    fn world_bounds(&self) -> Aabb3f {
        self.shape.world_bounds()
    }

    #[inline]
    fn intersect(&self, ray: &Ray) -> bool {
        self.shape.intersect(ray)
    }
}

pub fn create_geometric_primitives(triangles: Vec<Arc<Triangle>>) -> Vec<Arc<dyn Primitive>> {
    triangles
        .into_iter()
        .map(|triangle| Arc::new(GeometricPrimitive::new(triangle)) as Arc<dyn Primitive>)
        .collect()
}

/// Strategy an aggregate uses to answer intersection queries over its
/// children.
pub trait Accelerator: Send + Sync {
    fn intersect(&self, primitives: &[Arc<dyn Primitive>], bounds: &Aabb3f, ray: &Ray) -> bool;
}

/// Tests every child in order and stops at the first hit.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl Accelerator for LinearScan {
    fn intersect(&self, primitives: &[Arc<dyn Primitive>], _bounds: &Aabb3f, ray: &Ray) -> bool {
        primitives.iter().any(|p| p.intersect(ray))
    }
}

/// A group of primitives that answers queries as one.
pub struct AggregatePrimitive {
    primitives: Vec<Arc<dyn Primitive>>,
    bounds: Aabb3f,
    accelerator: Box<dyn Accelerator>,
}

impl AggregatePrimitive {
    /// Panics if `primitives` is empty.
    pub fn new(primitives: Vec<Arc<dyn Primitive>>) -> Self {
        Self::with_accelerator(primitives, Box::new(LinearScan))
    }

    pub fn with_accelerator(primitives: Vec<Arc<dyn Primitive>>, accelerator: Box<dyn Accelerator>) -> Self {
        assert!(!primitives.is_empty(), "aggregate needs at least one primitive");

        let bounds = primitives
            .iter()
            .fold(Aabb3f::empty(), |bounds, p| bounds.union(&p.world_bounds()));

        debug!(primitives = primitives.len(), ?bounds, "created aggregate");

        Self {
            primitives,
            bounds,
            accelerator,
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }
}

impl Primitive for AggregatePrimitive {
    #[inline]
    fn world_bounds(&self) -> Aabb3f {
        self.bounds
    }

    fn intersect(&self, ray: &Ray) -> bool {
        self.accelerator.intersect(&self.primitives, &self.bounds, ray)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::geometry::{create_triangles, unit_cube};
    use crate::test_util::assert_aabb_eq;
    use crate::transform::Transform;
    use crate::vec3::{Point3f, Vec3f};

    fn cube_primitives(offset: Vec3f) -> Vec<Arc<dyn Primitive>> {
        let cube = unit_cube(Arc::new(Transform::translate(offset)));
        create_geometric_primitives(create_triangles(&cube))
    }

    /// Counts the queries it sees and answers with a fixed value.
    struct Probe {
        hit: bool,
        calls: AtomicUsize,
    }

    impl Probe {
        fn new(hit: bool) -> Arc<Probe> {
            Arc::new(Probe {
                hit,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Primitive for Probe {
        fn world_bounds(&self) -> Aabb3f {
            Aabb3f::from_point(Point3f::new(0.0, 0.0, 0.0))
        }

        fn intersect(&self, _ray: &Ray) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.hit
        }
    }

    struct NeverHit;

    impl Accelerator for NeverHit {
        fn intersect(&self, _primitives: &[Arc<dyn Primitive>], _bounds: &Aabb3f, _ray: &Ray) -> bool {
            false
        }
    }

    fn any_ray() -> Ray {
        Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn geometric_primitives_from_cube() {
        let primitives = cube_primitives(Vec3f::new(0.0, 0.0, 0.0));
        assert_eq!(12, primitives.len());
    }

    #[test]
    fn aggregate_bounds() {
        let aggregate = AggregatePrimitive::new(cube_primitives(Vec3f::new(5.0, 5.0, 5.0)));
        assert_eq!(12, aggregate.len());
        assert_aabb_eq(aggregate.world_bounds(), 4.5, 4.5, 4.5, 5.5, 5.5, 5.5);
    }

    #[test]
    fn aggregate_bounds_ignore_order() {
        let mut primitives = cube_primitives(Vec3f::new(0.0, 0.0, 0.0));
        primitives.extend(cube_primitives(Vec3f::new(2.0, -3.0, 1.0)));
        let forward = AggregatePrimitive::new(primitives.clone()).world_bounds();

        primitives.reverse();
        assert_eq!(forward, AggregatePrimitive::new(primitives).world_bounds());
        assert_aabb_eq(forward, -0.5, -3.5, -0.5, 2.5, 0.5, 1.5);
    }

    #[test]
    #[should_panic]
    fn empty_aggregate() {
        AggregatePrimitive::new(Vec::new());
    }

    #[test]
    fn linear_scan_stops_at_first_hit() {
        let (miss, hit, after) = (Probe::new(false), Probe::new(true), Probe::new(false));
        let primitives: Vec<Arc<dyn Primitive>> = vec![miss.clone(), hit.clone(), after.clone()];
        let aggregate = AggregatePrimitive::new(primitives);

        assert!(aggregate.intersect(&any_ray()));
        assert_eq!(1, miss.calls.load(Ordering::SeqCst));
        assert_eq!(1, hit.calls.load(Ordering::SeqCst));
        assert_eq!(0, after.calls.load(Ordering::SeqCst));
    }

    #[test]
    fn linear_scan_misses() {
        let primitives: Vec<Arc<dyn Primitive>> = vec![Probe::new(false), Probe::new(false)];
        let aggregate = AggregatePrimitive::new(primitives);
        assert!(!aggregate.intersect(&any_ray()));
    }

    #[test]
    fn custom_accelerator_keeps_bounds() {
        let aggregate =
            AggregatePrimitive::with_accelerator(cube_primitives(Vec3f::new(5.0, 5.0, 5.0)), Box::new(NeverHit));

        assert_aabb_eq(aggregate.world_bounds(), 4.5, 4.5, 4.5, 5.5, 5.5, 5.5);
        assert!(!aggregate.intersect(&Ray::new(Point3f::new(5.0, 5.0, 0.0), Vec3f::new(0.0, 0.0, 1.0))));
    }

    #[test]
    fn nested_aggregates() {
        let inner: Arc<dyn Primitive> = Arc::new(AggregatePrimitive::new(cube_primitives(Vec3f::new(5.0, 5.0, 5.0))));
        let outer = AggregatePrimitive::new(vec![inner]);

        assert!(outer.intersect(&Ray::new(Point3f::new(5.0, 5.0, 0.0), Vec3f::new(0.0, 0.0, 1.0))));
        assert!(!outer.intersect(&Ray::new(Point3f::new(0.0, 0.0, 0.0), Vec3f::new(0.0, 0.0, 1.0))));
    }
}
