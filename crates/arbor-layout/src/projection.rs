//! Grid-to-pixel projection.

use glam::DVec2;

use arbor_core::GridPoint;

use crate::Layout;

/// Maps grid coordinates to pixel space.
///
/// The scale divides the canvas evenly among the grid columns and rows; the
/// half-cell offset centers each node in its cell. Both are computed once
/// from the layout's total extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: DVec2,
    offset: DVec2,
}

impl Projection {
    /// Build the projection for a canvas of the given pixel dimensions.
    pub fn new<K>(canvas_width: f64, canvas_height: f64, layout: &Layout<K>) -> Self {
        let scale = DVec2::new(
            canvas_width / f64::from(layout.width()),
            canvas_height / f64::from(layout.height()),
        );
        Self {
            scale,
            offset: scale / 2.0,
        }
    }

    /// Project a grid point into pixel space.
    pub fn project(&self, point: GridPoint) -> DVec2 {
        self.scale * DVec2::new(f64::from(point.x), f64::from(point.y)) + self.offset
    }

    /// Pixel width of one grid column.
    pub fn cell_width(&self) -> f64 {
        self.scale.x
    }

    /// Pixel height of one grid row.
    pub fn cell_height(&self) -> f64 {
        self.scale.y
    }
}
