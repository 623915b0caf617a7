//! Tree nodes and rotation logic.

pub(crate) type Link<K> = Option<Box<AvlNode<K>>>;

/// A single tree node owning its children.
#[derive(Debug)]
pub(crate) struct AvlNode<K> {
    pub(crate) key: K,
    /// Cached subtree height: a leaf has height 1.
    pub(crate) height: u32,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> AvlNode<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recompute this node's cached height from its children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`. Values outside {-2..2} cannot occur
    /// while the balance invariant holds.
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

/// Height of an optional subtree: an empty link has height 0.
pub(crate) fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Left rotation: the right child becomes the subtree root, the old root
/// becomes its left child, and the pivot's former left subtree is handed to
/// the old root as its new right subtree.
fn rotate_left<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut pivot = node.right.take().expect("left rotation requires a right child");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror image of [`rotate_left`].
fn rotate_right<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let mut pivot = node.left.take().expect("right rotation requires a left child");
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Restore the balance invariant at `link` after a single insertion below it.
///
/// A balance factor of +2 is the left-left or left-right case: when the left
/// child leans right, a pre-rotation of that child reduces left-right to
/// left-left, and a single right rotation finishes. -2 is the mirror image.
/// Children of `link` are assumed to be balanced already.
pub(crate) fn rebalance<K>(link: &mut Link<K>) {
    let factor = match link {
        Some(node) => node.balance_factor(),
        None => return,
    };
    if factor.abs() < 2 {
        return;
    }

    let mut node = link.take().expect("unbalanced link is nonempty");
    if factor == 2 {
        let mut left = node.left.take().expect("left-heavy node has a left child");
        if height(&left.left) < height(&left.right) {
            left = rotate_left(left);
        }
        node.left = Some(left);
        node = rotate_right(node);
    } else {
        let mut right = node.right.take().expect("right-heavy node has a right child");
        if height(&right.right) < height(&right.left) {
            right = rotate_right(right);
        }
        node.right = Some(right);
        node = rotate_left(node);
    }
    *link = Some(node);
}
