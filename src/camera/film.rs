//! The image sensor: accumulates weighted samples and writes them out.

use std::path::Path;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::filter::Filter;
use crate::vec2::Point2f;

/// Running sums of the samples that landed on one pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub weight_sum: f64,
}

pub struct Film {
    width: u32,
    height: u32,
    filter: Box<dyn Filter>,
    /// Row-major, `(0, 0)` is the top left corner.
    pixels: Vec<Pixel>,
}

impl Film {
    pub fn new(width: u32, height: u32, filter: Box<dyn Filter>) -> Self {
        assert!(width > 0 && height > 0, "film must not be empty, got {}x{}", width, height);

        Self {
            width,
            height,
            filter,
            pixels: vec![Pixel::default(); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn filter(&self) -> &dyn Filter {
        self.filter.as_ref()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn clear(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = Pixel::default();
        }
    }

    /// Adds a sample at continuous film coordinates. The far edges
    /// (`x == width`, `y == height`) belong to the last column and row.
    ///
    /// The sample is scaled by the filter evaluated at its offset from the
    /// pixel center, and dropped if that offset is outside the filter radius.
    pub fn add_sample(&mut self, x: f64, y: f64, color: Rgb<f64>, weight: f64) {
        assert!(x >= 0.0 && x <= self.width as f64, "sample x = {} outside film", x);
        assert!(y >= 0.0 && y <= self.height as f64, "sample y = {} outside film", y);
        let Rgb([r, g, b]) = color;
        assert!(r >= 0.0 && g >= 0.0 && b >= 0.0, "negative sample color {:?}", color);

        let px = (x as u32).min(self.width - 1);
        let py = (y as u32).min(self.height - 1);

        let offset = Point2f::new(x - (px as f64 + 0.5), y - (py as f64 + 0.5));
        let radius = self.filter.radius();
        if offset.x.abs() > radius.x || offset.y.abs() > radius.y {
            return;
        }
        let filter_weight = self.filter.evaluate(offset);

        let pixel = &mut self.pixels[(py * self.width + px) as usize];
        pixel.r += r * filter_weight;
        pixel.g += g * filter_weight;
        pixel.b += b * filter_weight;
        pixel.weight_sum += weight * filter_weight;
    }

    /// Averages every pixel by its weight and maps `[0, 1]` onto `0..=255`.
    /// Pixels without weight come out black.
    pub fn to_image(&self) -> RgbImage {
        let to_byte = |c: f64, w: f64| (c / w * 255.0).max(0.0).min(255.0) as u8;

        RgbImage::from_fn(self.width, self.height, |x, y| {
            let p = self.pixels[(y * self.width + x) as usize];
            if p.weight_sum > 0.0 {
                Rgb([to_byte(p.r, p.weight_sum), to_byte(p.g, p.weight_sum), to_byte(p.b, p.weight_sum)])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_image().save_with_format(path, ImageFormat::Png)
    }
}
