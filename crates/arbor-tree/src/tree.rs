//! The tree API: insertion, lookup, and traversal.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::node::{height, rebalance, AvlNode, Link};

/// A self-balancing binary search tree over totally ordered keys.
///
/// Duplicate keys are rejected: inserting a key that is already present is a
/// no-op. There is no removal operation.
#[derive(Debug, Default)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> AvlTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Tree height: 0 for the empty tree, 1 for a single leaf.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Borrowed view of the root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.as_deref().map(|node| NodeRef { node })
    }

    /// In-order iterator over the keys, ascending.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: SmallVec::new(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<K: Ord> AvlTree<K> {
    /// Insert a key, rebalancing every ancestor on the unwind path.
    ///
    /// Returns `true` if the key was inserted, `false` if it was already
    /// present (the tree is left untouched, no rebalancing is triggered).
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = insert_into(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Standard BST descent; `false` on the empty tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

fn insert_into<K: Ord>(link: &mut Link<K>, key: K) -> bool {
    let Some(node) = link else {
        *link = Some(Box::new(AvlNode::new(key)));
        return true;
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => insert_into(&mut node.left, key),
        Ordering::Greater => insert_into(&mut node.right, key),
        Ordering::Equal => return false,
    };

    if inserted {
        node.update_height();
        rebalance(link);
    }
    inserted
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed view of a node and the subtree below it.
///
/// Traversal is always root-down: the view exposes children but no parent.
#[derive(Debug)]
pub struct NodeRef<'a, K> {
    node: &'a AvlNode<K>,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Height of the subtree rooted here (a leaf has height 1).
    pub fn height(&self) -> u32 {
        self.node.height
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.node.left.as_deref().map(|node| NodeRef { node })
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.node.right.as_deref().map(|node| NodeRef { node })
    }

    /// `height(left) - height(right)` for this node.
    pub fn balance_factor(&self) -> i32 {
        self.node.balance_factor()
    }
}

/// In-order borrowing iterator.
///
/// Keeps the left spine on an inline stack; depth is bounded by the tree
/// height, which the balance invariant keeps logarithmic.
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: SmallVec<[&'a AvlNode<K>; 16]>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut current: Option<&'a AvlNode<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Recursively verify BST ordering, the balance invariant, and cached
    /// height consistency for every node.
    fn check_invariants<K: Ord>(node: Option<NodeRef<'_, K>>) -> u32 {
        let Some(node) = node else { return 0 };

        if let Some(left) = node.left() {
            assert!(left.key() < node.key(), "left child must be smaller");
        }
        if let Some(right) = node.right() {
            assert!(right.key() > node.key(), "right child must be larger");
        }

        let left_height = check_invariants(node.left());
        let right_height = check_invariants(node.right());
        let computed = 1 + left_height.max(right_height);

        assert_eq!(node.height(), computed, "cached height must match");
        let factor = left_height as i32 - right_height as i32;
        assert!(
            (-1..=1).contains(&factor),
            "balance factor {factor} out of range"
        );
        computed
    }

    fn in_order<K: Ord + Copy>(tree: &AvlTree<K>) -> Vec<K> {
        tree.iter().copied().collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree: AvlTree<i64> = AvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(!tree.contains(&42));
        assert!(tree.root().is_none());
        assert_eq!(in_order(&tree), Vec::<i64>::new());
    }

    #[test]
    fn test_single_node() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(42));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert!(tree.contains(&42));
        check_invariants(tree.root());
    }

    #[test]
    fn test_scenario_mixed_sequence() {
        let tree: AvlTree<i64> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(tree.height(), 3);
        check_invariants(tree.root());
    }

    #[test]
    fn test_scenario_ascending_run() {
        // Worst case for an unbalanced BST; rotations keep the height at 3.
        let tree: AvlTree<i64> = (1..=7).collect();
        assert_eq!(tree.height(), 3);
        assert_eq!(in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
        check_invariants(tree.root());
    }

    #[test]
    fn test_descending_run() {
        let tree: AvlTree<i64> = (1..=7).rev().collect();
        assert_eq!(tree.height(), 3);
        assert_eq!(in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
        check_invariants(tree.root());
    }

    #[test]
    fn test_left_right_and_right_left_cases() {
        // 3, 1, 2 forces a left-right double rotation at the root.
        let tree: AvlTree<i64> = [3, 1, 2].into_iter().collect();
        assert_eq!(tree.height(), 2);
        assert_eq!(*tree.root().unwrap().key(), 2);
        check_invariants(tree.root());

        // 1, 3, 2 forces the mirrored right-left case.
        let tree: AvlTree<i64> = [1, 3, 2].into_iter().collect();
        assert_eq!(tree.height(), 2);
        assert_eq!(*tree.root().unwrap().key(), 2);
        check_invariants(tree.root());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree: AvlTree<i64> = [5, 3, 8].into_iter().collect();
        let before = in_order(&tree);
        let height_before = tree.height();

        assert!(!tree.insert(5));
        assert!(!tree.insert(3));

        assert_eq!(tree.len(), 3);
        assert_eq!(in_order(&tree), before);
        assert_eq!(tree.height(), height_before);
        check_invariants(tree.root());
    }

    #[test]
    fn test_contains_present_and_absent() {
        let keys = [5i64, 3, 8, 1, 4, 7, 9];
        let tree: AvlTree<i64> = keys.into_iter().collect();
        for key in keys {
            assert!(tree.contains(&key));
        }
        for key in [0, 2, 6, 10, -1] {
            assert!(!tree.contains(&key));
        }
    }

    #[test]
    fn test_height_stays_logarithmic() {
        let tree: AvlTree<i64> = (0..1024).collect();
        assert_eq!(tree.len(), 1024);
        // A 1024-node AVL tree can be at most ~1.44 * log2(n) deep.
        assert!(tree.height() <= 14, "height {} too large", tree.height());
        check_invariants(tree.root());
    }

    proptest! {
        #[test]
        fn prop_in_order_is_sorted_dedup(keys in proptest::collection::vec(-1000i64..1000, 0..200)) {
            let tree: AvlTree<i64> = keys.iter().copied().collect();

            let mut expected = keys.clone();
            expected.sort_unstable();
            expected.dedup();

            prop_assert_eq!(in_order(&tree), expected);
        }

        #[test]
        fn prop_invariants_hold_after_every_insert(keys in proptest::collection::vec(-500i64..500, 1..100)) {
            let mut tree = AvlTree::new();
            for &key in &keys {
                tree.insert(key);
                check_invariants(tree.root());
            }
        }

        #[test]
        fn prop_contains_matches_input(keys in proptest::collection::vec(-100i64..100, 0..80)) {
            let tree: AvlTree<i64> = keys.iter().copied().collect();
            for probe in -100i64..100 {
                prop_assert_eq!(tree.contains(&probe), keys.contains(&probe));
            }
        }
    }
}
