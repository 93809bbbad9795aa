//! Reference-grid and coordinate-axes line generation.
//!
//! The grid lies in the world x-y plane; the axes are x red, y green,
//! z blue, each with a small arrowhead at its positive end. Both
//! generators return plain vertex lists so the host can pack them into
//! one buffer and draw them as contiguous ranges.

use glam::Vec3;

use super::{SceneData, Vertex};

/// Grid line color.
const GRID_COLOR: Vec3 = Vec3::new(0.7, 0.7, 0.7);

/// Arrowhead size relative to the axis tips.
const ARROW_SIZE: f32 = 10.0;

/// Number of vertices emitted by [`build_axes`]: three axes of three
/// segments each (shaft plus two arrowhead strokes), two vertices per
/// segment.
pub const AXES_VERTEX_COUNT: usize = 18;

/// Lines covering the square `[-extent, extent]²` in the z = 0 plane,
/// spaced `step` apart in both directions.
pub fn build_grid(extent: f32, step: f32) -> Vec<Vertex> {
    if step <= 0.0 || extent <= 0.0 {
        log::warn!("ignoring degenerate grid: extent {extent}, step {step}");
        return Vec::new();
    }

    let mut data = SceneData::new();

    let steps = (extent / step) as i32;
    for i in -steps..=steps {
        let offset = i as f32 * step;

        // parallel to x
        data.add_line(
            Vec3::new(-extent, offset, 0.0),
            Vec3::new(extent, offset, 0.0),
            GRID_COLOR,
        );

        // parallel to y
        data.add_line(
            Vec3::new(offset, -extent, 0.0),
            Vec3::new(offset, extent, 0.0),
            GRID_COLOR,
        );
    }

    data.lines().to_vec()
}

/// The three coordinate axes, `length` long, with arrowheads.
pub fn build_axes(length: f32) -> Vec<Vertex> {
    let mut data = SceneData::new();

    // x (red)
    let color = Vec3::new(1.0, 0.0, 0.0);
    data.add_line(
        Vec3::new(-length, 0.0, 0.0),
        Vec3::new(length, 0.0, 0.0),
        color,
    );
    data.add_line(
        Vec3::new(length, 0.0, 0.0),
        Vec3::new(length - ARROW_SIZE, ARROW_SIZE / 2.0, 0.0),
        color,
    );
    data.add_line(
        Vec3::new(length, 0.0, 0.0),
        Vec3::new(length - ARROW_SIZE, -ARROW_SIZE / 2.0, 0.0),
        color,
    );

    // y (green)
    let color = Vec3::new(0.0, 1.0, 0.0);
    data.add_line(
        Vec3::new(0.0, -length, 0.0),
        Vec3::new(0.0, length, 0.0),
        color,
    );
    data.add_line(
        Vec3::new(0.0, length, 0.0),
        Vec3::new(ARROW_SIZE / 2.0, length - ARROW_SIZE, 0.0),
        color,
    );
    data.add_line(
        Vec3::new(0.0, length, 0.0),
        Vec3::new(-ARROW_SIZE / 2.0, length - ARROW_SIZE, 0.0),
        color,
    );

    // z (blue)
    let color = Vec3::new(0.0, 0.0, 1.0);
    data.add_line(
        Vec3::new(0.0, 0.0, -length),
        Vec3::new(0.0, 0.0, length),
        color,
    );
    data.add_line(
        Vec3::new(0.0, 0.0, length),
        Vec3::new(ARROW_SIZE / 2.0, 0.0, length - ARROW_SIZE),
        color,
    );
    data.add_line(
        Vec3::new(0.0, 0.0, length),
        Vec3::new(-ARROW_SIZE / 2.0, 0.0, length - ARROW_SIZE),
        color,
    );

    data.lines().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lies_in_ground_plane() {
        let vertices = build_grid(2000.0, 100.0);

        // 41 rows and 41 columns, two vertices per line.
        assert_eq!(vertices.len(), 2 * (41 + 41));
        for vertex in &vertices {
            assert_eq!(vertex.position[2], 0.0);
        }
    }

    #[test]
    fn grid_spans_the_full_extent() {
        let vertices = build_grid(500.0, 100.0);
        let max = vertices
            .iter()
            .flat_map(|v| [v.position[0], v.position[1]])
            .fold(f32::MIN, f32::max);
        assert_eq!(max, 500.0);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(build_grid(2000.0, 0.0).is_empty());
        assert!(build_grid(-1.0, 100.0).is_empty());
    }

    #[test]
    fn axes_have_fixed_vertex_count() {
        let vertices = build_axes(250.0);
        assert_eq!(vertices.len(), AXES_VERTEX_COUNT);
    }

    #[test]
    fn axes_are_colored_per_axis() {
        let vertices = build_axes(250.0);
        // first segment red, middle green, last blue
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[6].color, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[17].color, [0.0, 0.0, 1.0]);
    }
}
