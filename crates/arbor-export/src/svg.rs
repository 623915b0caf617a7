//! SVG canvas implementation.

use std::fmt::Display;

use glam::DVec2;

use arbor_core::{Color, ExportError};
use arbor_layout::Layout;

use crate::canvas::{render, Canvas, RenderOptions};

const EDGE_COLOR: Color = Color::RED;
const EDGE_WIDTH: u32 = 2;
const FRAME_FILL: Color = Color::WHITE;
const FRAME_STROKE: Color = Color::BLACK;
const FRAME_STROKE_WIDTH: u32 = 2;
const LABEL_FILL: &str = "black";

/// A [`Canvas`] that builds an SVG document string.
#[derive(Debug)]
pub struct SvgCanvas {
    svg: String,
    text_style: String,
    line_style: String,
    rect_style: String,
}

impl SvgCanvas {
    /// Open an SVG document for the given render options.
    pub fn new(options: &RenderOptions) -> Self {
        let width = options.canvas_width;
        let height = options.canvas_height;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n",
        ));

        Self {
            svg,
            text_style: format!(
                "text-anchor:middle;font-size:{}px;fill:{}",
                options.font_size, LABEL_FILL
            ),
            line_style: format!("stroke:{EDGE_COLOR};stroke-width:{EDGE_WIDTH}"),
            rect_style: format!(
                "fill:{FRAME_FILL};stroke-width:{FRAME_STROKE_WIDTH};stroke:{FRAME_STROKE}"
            ),
        }
    }

    /// Close the document and return the markup.
    pub fn finish(mut self) -> String {
        self.svg.push_str("</svg>\n");
        self.svg
    }
}

impl Canvas for SvgCanvas {
    fn frame(&mut self, width: f64, height: f64) {
        self.svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" style=\"{}\" />\n",
            width, height, self.rect_style
        ));
    }

    fn edge(&mut self, from: DVec2, to: DVec2) {
        self.svg.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\" />\n",
            from.x, from.y, to.x, to.y, self.line_style
        ));
    }

    fn label(&mut self, at: DVec2, text: &str) {
        self.svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" style=\"{}\">{}</text>\n",
            at.x,
            at.y,
            self.text_style,
            escape_xml(text)
        ));
    }
}

/// Export a layout to an SVG document string.
pub fn export_svg<K: Display>(
    layout: &Layout<K>,
    options: &RenderOptions,
) -> Result<String, ExportError> {
    let mut canvas = SvgCanvas::new(options);
    render(layout, options, &mut canvas)?;
    Ok(canvas.finish())
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
