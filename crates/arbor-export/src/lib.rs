//! Rendering and export for arbor layouts.
//!
//! The render walk only knows three abstract drawing capabilities, expressed
//! by the [`Canvas`] trait: a background frame, an edge between two pixel
//! positions, and a label at a pixel position. Concrete markup emission
//! lives behind that boundary; [`SvgCanvas`] is the vector-graphics
//! implementation.

mod canvas;
mod svg;

pub use canvas::{render, Canvas, RenderOptions};
pub use svg::{export_svg, SvgCanvas};

pub use arbor_core::ExportError;
