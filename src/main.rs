use std::error::Error;
use std::fs;
use std::sync::Arc;
use std::time::Instant;

use image::Rgb;
use tracing::{info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prism::{
    create_geometric_primitives, create_triangles, unit_cube, AggregatePrimitive, BoxFilter, Camera, Film,
    PerspectiveCamera, Point2f, RenderConfig, Scene, Transform, Vec2f,
};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading config");
            RenderConfig::load(&path)?
        }
        None => {
            info!("no config given, using defaults");
            RenderConfig::default()
        }
    };

    let cube = unit_cube(Arc::new(Transform::identity()));
    let primitives = create_geometric_primitives(create_triangles(&cube));
    let scene = Scene::new(Box::new(AggregatePrimitive::new(primitives)));
    info!(bounds = ?scene.world_bounds(), "scene ready");

    fs::create_dir_all(&config.output_dir)?;

    let mut film = Film::new(config.width, config.height, Box::new(BoxFilter::new(Vec2f::new(1.0, 1.0))));

    for frame in 0..config.frames {
        let now = Instant::now();

        let eye = config.eye(frame);
        let world_to_camera = Transform::look_at(eye, config.target, config.up);
        let camera = PerspectiveCamera::new(
            world_to_camera,
            config.fov,
            Point2f::new(-1.0, -1.0),
            Point2f::new(1.0, 1.0),
            config.width,
            config.height,
        );

        film.clear();
        let mut hits = 0;
        for y in 0..config.height {
            for x in 0..config.width {
                let (weight, ray) = camera.generate_ray(Point2f::new(x as f64, y as f64));
                if scene.intersect(&ray) {
                    film.add_sample(x as f64, y as f64, Rgb([1.0, 1.0, 1.0]), weight);
                    hits += 1;
                }
            }
        }
        trace!(frame, hits, "sampled frame");

        let path = config.frame_path(frame);
        film.save_png(&path)?;

        info!(
            frame,
            ?eye,
            path = %path.display(),
            "finished, elapsed: {:.3} ms",
            now.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
