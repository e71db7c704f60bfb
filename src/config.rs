use std::error::Error;
use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::vec3::{Point3f, Vec3f};

/// Parameters of an orbit render around a target point.
///
/// Every field is optional in JSON, missing ones keep their default.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees.
    pub fov: f64,
    /// Number of images, evenly spaced along one full orbit.
    pub frames: u32,
    pub orbit_radius: f64,
    pub eye_height: f64,
    pub target: Point3f,
    pub up: Vec3f,
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            fov: 45.0,
            frames: 20,
            orbit_radius: 2.0,
            eye_height: 2.0,
            target: Point3f::new(0.0, 0.0, 0.0),
            up: Vec3f::new(0.0, 1.0, 0.0),
            output_dir: PathBuf::from("gif"),
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config: RenderConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;

        Ok(config)
    }

    /// Rejects values the renderer cannot work with, so they surface as an
    /// error here instead of a panic deep inside the camera or the film.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("image must not be empty, got {}x{}", self.width, self.height).into());
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(format!("fov must lie in (0, 180) degrees, got {}", self.fov).into());
        }
        if self.up.length_squared() == 0.0 {
            return Err("up vector must not be zero".into());
        }
        let up = self.up.normalize();
        for frame in 0..self.frames {
            let view = self.target - self.eye(frame);
            if view.length_squared() == 0.0 || up.cross(&view.normalize()).length_squared() < 1e-12 {
                return Err(format!("frame {} looks along the up vector {:?}", frame, self.up).into());
            }
        }

        Ok(())
    }

    /// Eye position of frame `index` on the orbit. The small x offset keeps
    /// the eye off the up axis when the orbit radius is zero.
    pub fn eye(&self, index: u32) -> Point3f {
        let theta = 2.0 * PI * index as f64 / self.frames as f64;
        self.target
            + Vec3f::new(
                theta.sin() * self.orbit_radius + 0.01,
                self.eye_height,
                theta.cos() * self.orbit_radius,
            )
    }

    /// Where frame `index` is written, `00.png`, `01.png` and so on.
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.output_dir.join(format!("{:02}.png", index))
    }
}
