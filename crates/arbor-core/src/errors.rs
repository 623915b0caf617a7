//! Error types for the arbor pipeline.

use thiserror::Error;

/// Top-level error type covering every pipeline stage.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while reading the input key sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A token that is not a valid integer. Malformed input is rejected
    /// rather than coerced to zero.
    #[error("invalid integer {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("empty input: at least one key is required")]
    Empty,
}

/// Errors during layout computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout needs at least one node to derive a nonzero grid extent.
    #[error("cannot lay out an empty tree")]
    EmptyTree,
}

/// Errors during rendering and output.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("canvas must have nonzero area, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}
