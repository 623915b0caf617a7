//! Self-balancing binary search tree for the arbor pipeline.
//!
//! The tree maintains the AVL invariant: after every insertion the height
//! difference between the left and right subtree of any node is in
//! {-1, 0, +1}. Lookups and insertions are therefore `O(log n)`.
//!
//! # Architecture
//!
//! 1. **Ownership**: every node exclusively owns its children
//!    (`Option<Box<..>>`); there are no parent back-references and no shared
//!    aliases. Rotations move `Box` ownership rather than copying nodes.
//! 2. **Cached heights**: each node stores its subtree height and updates it
//!    in `O(1)` on the insertion unwind path and inside rotations.
//! 3. **Read-only views**: downstream consumers walk the topology through
//!    [`NodeRef`] without access to the owning links.
//!
//! # Example
//!
//! ```
//! use arbor_tree::AvlTree;
//!
//! let tree: AvlTree<i64> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.contains(&4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! ```

mod node;
mod tree;

pub use tree::{AvlTree, Iter, NodeRef};
