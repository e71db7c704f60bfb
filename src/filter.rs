use crate::vec2::{Point2f, Vec2f};

/// Reconstruction filter weighting a sample by its offset from the pixel
/// center. `Film::add_sample` drops samples further away than `radius`.
pub trait Filter: Send + Sync {
    fn radius(&self) -> Vec2f;
    fn evaluate(&self, p: Point2f) -> f64;
}

/// Weighs every sample within the radius equally.
#[derive(Copy, Clone, Debug)]
pub struct BoxFilter {
    radius: Vec2f,
    inv_radius: Vec2f,
}

impl BoxFilter {
    pub fn new(radius: Vec2f) -> Self {
        assert!(radius.x > 0.0 && radius.y > 0.0, "filter radius must be positive, got {:?}", radius);

        Self {
            radius,
            inv_radius: Vec2f::new(1.0 / radius.x, 1.0 / radius.y),
        }
    }

    #[inline]
    pub fn inv_radius(&self) -> Vec2f {
        self.inv_radius
    }
}

impl Filter for BoxFilter {
    #[inline]
    fn radius(&self) -> Vec2f {
        self.radius
    }

    #[inline]
    fn evaluate(&self, _p: Point2f) -> f64 {
        1.0
    }
}

#[test]
fn box_filter() {
    let filter = BoxFilter::new(Vec2f::new(2.0, 0.5));

    assert_eq!(Vec2f::new(2.0, 0.5), filter.radius());
    assert_eq!(Vec2f::new(0.5, 2.0), filter.inv_radius());
    assert_eq!(1.0, filter.evaluate(Point2f::new(0.0, 0.0)));
    assert_eq!(1.0, filter.evaluate(Point2f::new(-1.5, 0.25)));
}

#[test]
#[should_panic]
fn box_filter_zero_radius() {
    BoxFilter::new(Vec2f::new(0.0, 1.0));
}
