//! Layout computation for arbor trees.
//!
//! This crate turns tree topology into drawable grid coordinates, then maps
//! the grid into pixel space.
//!
//! # Architecture
//!
//! 1. **Position assignment**: an in-order traversal gives every node the
//!    next unused horizontal coordinate and a vertical coordinate equal to
//!    its depth, so coordinates equal in-order rank and no two nodes share a
//!    column.
//! 2. **Projection**: pixel scale and offset are derived once from the
//!    layout's total extent; they are global quantities, so layout always
//!    runs to completion before any drawing.
//!
//! # Example
//!
//! ```
//! use arbor_layout::compute_layout;
//! use arbor_tree::AvlTree;
//!
//! let tree: AvlTree<i64> = [2, 1, 3].into_iter().collect();
//! let layout = compute_layout(&tree)?;
//!
//! assert_eq!(layout.width(), 3);
//! assert_eq!(layout.height(), 2);
//! # Ok::<(), arbor_core::LayoutError>(())
//! ```

mod layout;
mod projection;

pub use layout::{compute_layout, Layout, PositionedNode};
pub use projection::Projection;

pub use arbor_core::LayoutError;
