use crate::ray::Ray;
use crate::vec2::Point2f;

mod film;
mod perspective;

pub use self::film::{Film, Pixel};
pub use self::perspective::PerspectiveCamera;

pub trait Camera: Send + Sync {
    /// Builds the world-space ray through a raster position of the film,
    /// together with the weight its sample should get.
    fn generate_ray(&self, film_location: Point2f) -> (f64, Ray);
}
