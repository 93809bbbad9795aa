use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Grid/axes visibility and geometry, plus the clear color.
pub struct DisplayOptions {
    /// Draw the reference grid.
    pub show_grid: bool,
    /// Draw the coordinate axes.
    pub show_axes: bool,
    /// Background clear color (linear RGB).
    pub background: [f32; 3],
    /// Half-width of the square grid, in world units.
    pub grid_extent: f32,
    /// Spacing between grid lines, in world units.
    pub grid_step: f32,
    /// Length of each coordinate axis, in world units.
    pub axis_length: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            background: [0.0, 0.0, 0.0],
            grid_extent: 2000.0,
            grid_step: 100.0,
            axis_length: 250.0,
        }
    }
}
