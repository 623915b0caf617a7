//! The abstract drawing surface and the render walk.

use std::fmt::Display;

use glam::DVec2;

use arbor_core::{ExportError, LabelStyle};
use arbor_layout::{Layout, Projection};

/// Abstract drawing capabilities required by the render walk.
///
/// Implementations own all knowledge of markup, colors, and pixel units
/// beyond raw positions.
pub trait Canvas {
    /// Draw the background frame once, before anything else.
    fn frame(&mut self, width: f64, height: f64);

    /// Draw a connecting line between a parent and a child position.
    fn edge(&mut self, from: DVec2, to: DVec2);

    /// Draw a node label centered at the given position.
    fn label(&mut self, at: DVec2, text: &str);
}

/// Options for rendering a layout onto a canvas.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Label font size in pixels; also used to keep edge endpoints clear of
    /// the label glyphs.
    pub font_size: f64,
    /// Node label formatting.
    pub labels: LabelStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            font_size: 15.0,
            labels: LabelStyle::Plain,
        }
    }
}

impl RenderOptions {
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }
}

/// Render a layout onto a canvas: frame first, then every edge, then every
/// label on top.
pub fn render<K: Display, C: Canvas>(
    layout: &Layout<K>,
    options: &RenderOptions,
    canvas: &mut C,
) -> Result<(), ExportError> {
    if options.canvas_width == 0 || options.canvas_height == 0 {
        return Err(ExportError::InvalidCanvas {
            width: options.canvas_width,
            height: options.canvas_height,
        });
    }

    let width = f64::from(options.canvas_width);
    let height = f64::from(options.canvas_height);
    let projection = Projection::new(width, height, layout);

    canvas.frame(width, height);

    for (parent, child) in layout.edges() {
        let from = projection.project(parent);
        let to = projection.project(child);
        // Start below the parent label and stop above the child label.
        canvas.edge(
            DVec2::new(from.x, from.y + options.font_size / 2.0),
            DVec2::new(to.x, to.y - options.font_size),
        );
    }

    for node in layout.nodes() {
        let at = projection.project(node.pos);
        canvas.label(at, &options.labels.format(&node.key, node.pos));
    }

    Ok(())
}
