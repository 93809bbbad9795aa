//! Mira binary: opens a window and renders a demo mesh scene.

use glam::Vec3;
use mira::scene::{SceneData, Sides};
use mira::{Options, Viewer};

/// A staircase of colored slabs resting on the grid plane.
fn demo_scene() -> SceneData {
    let mut data = SceneData::new();

    for i in 0..4 {
        let x = 150.0 * i as f32;
        let height = 60.0 * (i + 1) as f32;
        // Top rectangle wound so the face normal points down; the slab
        // extends from z = height to the grid plane.
        data.add_cuboid(
            Vec3::new(x, 100.0, height),
            Vec3::new(x, -100.0, height),
            Vec3::new(x + 150.0, 100.0, height),
            Vec3::new(x + 150.0, -100.0, height),
            height,
            0.15 * i as f32,
            0.1 * i as f32,
            Sides::ALL,
        );
    }

    data
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let result = Viewer::builder()
        .with_title("Mira")
        .with_options(options)
        .with_mesh(demo_scene())
        .build()
        .run();

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
