//! In-order position assignment.

use arbor_core::{GridPoint, LayoutError};
use arbor_tree::{AvlTree, NodeRef};

/// A node with its assigned grid position and, except for the root, the
/// position of its parent (for edge drawing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionedNode<K> {
    pub key: K,
    pub pos: GridPoint,
    pub parent: Option<GridPoint>,
}

/// The computed layout: grid extent plus every positioned node in in-order
/// (left-to-right) order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout<K> {
    width: u32,
    height: u32,
    nodes: Vec<PositionedNode<K>>,
}

impl<K> Layout<K> {
    /// Grid width: the node count, since every node occupies its own column.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height: the tree height, since the vertical coordinate is depth.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positioned nodes in in-order (ascending x) order.
    pub fn nodes(&self) -> impl Iterator<Item = &PositionedNode<K>> {
        self.nodes.iter()
    }

    /// Parent/child edge pairs, one per non-root node.
    pub fn edges(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.parent.map(|parent| (parent, node.pos)))
    }
}

/// Compute the layout for a tree.
///
/// Every visited node receives the next unused horizontal coordinate
/// (starting at 0, so x equals in-order rank) and a vertical coordinate
/// equal to its depth from the root. The empty tree has no drawable extent
/// and is rejected.
pub fn compute_layout<K: Copy>(tree: &AvlTree<K>) -> Result<Layout<K>, LayoutError> {
    let root = tree.root().ok_or(LayoutError::EmptyTree)?;

    let mut nodes = Vec::with_capacity(tree.len());
    let mut next_x = 0;
    place(root, 0, &mut next_x, &mut nodes);

    Ok(Layout {
        width: next_x,
        height: tree.height(),
        nodes,
    })
}

/// Place a subtree; returns the index of its root in `out`.
///
/// Children are patched with the parent position after the parent is placed,
/// since in-order visiting reaches a left child before its parent.
fn place<K: Copy>(
    node: NodeRef<'_, K>,
    depth: u32,
    next_x: &mut u32,
    out: &mut Vec<PositionedNode<K>>,
) -> usize {
    let left = node.left().map(|child| place(child, depth + 1, next_x, out));

    let pos = GridPoint::new(*next_x, depth);
    *next_x += 1;
    let index = out.len();
    out.push(PositionedNode {
        key: *node.key(),
        pos,
        parent: None,
    });

    let right = node.right().map(|child| place(child, depth + 1, next_x, out));

    if let Some(child) = left {
        out[child].parent = Some(pos);
    }
    if let Some(child) = right {
        out[child].parent = Some(pos);
    }
    index
}
