//! Scene vertex data: interleaved position+color vertices for triangle
//! and line geometry, with helpers for building meshes out of simple
//! primitives.

/// Reference grid and coordinate-axes generation.
pub mod grid;

use glam::Vec3;

/// A colored vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Create a vertex from a position and color.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    /// The wgpu vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Which faces of a cuboid to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides(u8);

impl Sides {
    /// No faces.
    pub const NONE: Self = Self(0);
    /// The left face.
    pub const LEFT: Self = Self(1 << 0);
    /// The right face.
    pub const RIGHT: Self = Self(1 << 1);
    /// The front face.
    pub const FRONT: Self = Self(1 << 2);
    /// The back face.
    pub const BACK: Self = Self(1 << 3);
    /// The top face.
    pub const TOP: Self = Self(1 << 4);
    /// The bottom face.
    pub const BOTTOM: Self = Self(1 << 5);
    /// All six faces.
    pub const ALL: Self = Self(0x3f);

    /// `true` if every face in `other` is included in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Sides {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Vertex arrays for one scene: triangles (the mesh) and lines.
///
/// Front faces are wound counter-clockwise as seen on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneData {
    triangles: Vec<Vertex>,
    lines: Vec<Vertex>,
}

impl SceneData {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The triangle vertices, three per face.
    pub fn triangles(&self) -> &[Vertex] {
        &self.triangles
    }

    /// The line vertices, two per segment.
    pub fn lines(&self) -> &[Vertex] {
        &self.lines
    }

    /// Append a line segment.
    pub fn add_line(&mut self, a: Vec3, b: Vec3, color: Vec3) {
        self.lines.push(Vertex::new(a, color));
        self.lines.push(Vertex::new(b, color));
    }

    /// Append a uniformly colored triangle.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Vec3) {
        self.triangles.push(Vertex::new(a, color));
        self.triangles.push(Vertex::new(b, color));
        self.triangles.push(Vertex::new(c, color));
    }

    /// Append a cuboid described by its top rectangle and a thickness.
    ///
    /// The bottom rectangle lies along the top face's normal, scaled by
    /// `thickness`. Top and bottom are green/red with `frac_green`
    /// removed and `frac_blue` added; the remaining faces are blue
    /// (right/front) and yellow (left/back). `sides` selects which faces
    /// to emit.
    pub fn add_cuboid(
        &mut self,
        u1_left: Vec3,
        u1_right: Vec3,
        u2_left: Vec3,
        u2_right: Vec3,
        thickness: f32,
        frac_green: f32,
        frac_blue: f32,
        sides: Sides,
    ) {
        let normal = (u2_left - u1_left)
            .cross(u1_right - u1_left)
            .normalize()
            * thickness;

        // lower rectangle from the upper one and the face normal
        let l1_left = u1_left + normal;
        let l1_right = u1_right + normal;
        let l2_left = u2_left + normal;
        let l2_right = u2_right + normal;

        if sides.contains(Sides::TOP) {
            let color = Vec3::new(0.0, 1.0 - frac_green, frac_blue);
            self.add_triangle(u1_left, u1_right, u2_left, color);
            self.add_triangle(u1_right, u2_right, u2_left, color);
        }

        if sides.contains(Sides::RIGHT) {
            let color = Vec3::new(0.0, 0.0, 1.0);
            self.add_triangle(u1_right, l1_right, u2_right, color);
            self.add_triangle(l1_right, l2_right, u2_right, color);
        }

        if sides.contains(Sides::FRONT) {
            let color = Vec3::new(0.0, 0.0, 1.0);
            self.add_triangle(u2_left, u2_right, l2_right, color);
            self.add_triangle(u2_left, l2_right, l2_left, color);
        }

        if sides.contains(Sides::LEFT) {
            let color = Vec3::new(1.0, 1.0, 0.0);
            self.add_triangle(u1_left, u2_left, l1_left, color);
            self.add_triangle(l1_left, u2_left, l2_left, color);
        }

        if sides.contains(Sides::BACK) {
            let color = Vec3::new(1.0, 1.0, 0.0);
            self.add_triangle(u1_right, u1_left, l1_left, color);
            self.add_triangle(u1_right, l1_left, l1_right, color);
        }

        if sides.contains(Sides::BOTTOM) {
            let color = Vec3::new(1.0 - frac_green, 0.0, frac_blue);
            self.add_triangle(l1_left, l2_left, l1_right, color);
            self.add_triangle(l1_right, l2_left, l2_right, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_line_appends_two_vertices() {
        let mut data = SceneData::new();
        data.add_line(Vec3::ZERO, Vec3::X, Vec3::ONE);
        assert_eq!(data.lines().len(), 2);
        assert_eq!(data.lines()[1].position, [1.0, 0.0, 0.0]);
        assert!(data.triangles().is_empty());
    }

    #[test]
    fn add_triangle_shares_one_color() {
        let mut data = SceneData::new();
        data.add_triangle(
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Vec3::new(0.5, 0.25, 0.125),
        );
        assert_eq!(data.triangles().len(), 3);
        for vertex in data.triangles() {
            assert_eq!(vertex.color, [0.5, 0.25, 0.125]);
        }
    }

    #[test]
    fn cuboid_emits_two_triangles_per_side() {
        let top = [
            Vec3::new(0.0, 10.0, 5.0),
            Vec3::new(0.0, -10.0, 5.0),
            Vec3::new(20.0, 10.0, 5.0),
            Vec3::new(20.0, -10.0, 5.0),
        ];

        let mut all = SceneData::new();
        all.add_cuboid(
            top[0], top[1], top[2], top[3], 5.0, 0.2, 0.3, Sides::ALL,
        );
        assert_eq!(all.triangles().len(), 12 * 3);

        let mut lid = SceneData::new();
        lid.add_cuboid(
            top[0], top[1], top[2], top[3], 5.0, 0.2, 0.3, Sides::TOP,
        );
        assert_eq!(lid.triangles().len(), 2 * 3);

        let mut shell = SceneData::new();
        shell.add_cuboid(
            top[0],
            top[1],
            top[2],
            top[3],
            5.0,
            0.2,
            0.3,
            Sides::LEFT | Sides::RIGHT,
        );
        assert_eq!(shell.triangles().len(), 4 * 3);
    }

    #[test]
    fn cuboid_bottom_offsets_along_normal() {
        // Top rectangle in the z = 5 plane, wound so the face normal
        // points down.
        let mut data = SceneData::new();
        data.add_cuboid(
            Vec3::new(0.0, 10.0, 5.0),
            Vec3::new(0.0, -10.0, 5.0),
            Vec3::new(20.0, 10.0, 5.0),
            Vec3::new(20.0, -10.0, 5.0),
            5.0,
            0.0,
            0.0,
            Sides::BOTTOM,
        );
        for vertex in data.triangles() {
            assert_eq!(vertex.position[2], 0.0);
        }
    }

    #[test]
    fn sides_mask_composes() {
        let mask = Sides::TOP | Sides::BOTTOM;
        assert!(mask.contains(Sides::TOP));
        assert!(mask.contains(Sides::BOTTOM));
        assert!(!mask.contains(Sides::LEFT));
        assert!(Sides::ALL.contains(mask));
        assert!(!Sides::NONE.contains(Sides::TOP));
    }
}
