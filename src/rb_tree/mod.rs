use alloc::vec::Vec;
use core::{cmp::Ordering, fmt::Debug, iter::FusedIterator};

mod insert;
mod node;
mod remove;
mod rotate;
mod verify;

pub use node::{Color, NodeRef};
use node::Node;

/// Sentinel index standing in for an absent node (the implicit black nil leaf)
pub(crate) const NIL: usize = usize::MAX;

/// A Red-Black tree holding unique, totally ordered keys.
///
/// Insertions, removals and lookups are O(log n) with a bounded number of
/// rotations per update. Nodes live in a flat arena and refer to each other by
/// index, so parent back-links never own anything. Slots freed by removals are
/// recycled through a free list before the arena grows.
///
/// Key features:
/// - Duplicate keys are rejected, never stored
/// - Both rebalancing passes are iterative and climb parent indices
/// - Absent children count as black through a single helper
/// - Every public mutation leaves all red-black invariants intact, which
///   [`RbTree::verify`] can confirm
#[derive(Debug, Clone)]
pub struct RbTree<K> {
    /// Arena owning every node, live or recycled
    nodes: Vec<Node<K>>,

    /// Stack of detached arena slots, reused LIFO by the next insert
    free: Vec<usize>,

    /// Index of the root node in the arena
    /// Equal to nil when tree is empty
    root: usize,

    /// Number of keys currently stored in the tree
    len: usize,
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NIL,
            len: 0,
        }
    }
}

impl<K> RbTree<K> {
    /// Creates an empty tree. Does not allocate until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with arena space reserved for `capacity` keys.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of keys that fit before the arena reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= usize::MAX / 2,
            "Capacity too large - risk of index overflow"
        );

        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: NIL,
            len: 0,
        }
    }

    /// Returns the number of keys stored in the tree
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of keys the tree can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes every key, keeping the arena allocation for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// Number of black nodes on every path from the root down to a nil leaf,
    /// not counting the nil itself. An empty tree has black height 0.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while current != NIL {
            if self.is_black(current) {
                height += 1;
            }
            current = self.get_left(current);
        }
        height
    }

    #[inline]
    fn node_at(&self, idx: usize) -> &Node<K> {
        debug_assert!(idx < self.nodes.len());
        &self.nodes[idx]
    }

    #[inline]
    fn node_at_mut(&mut self, idx: usize) -> &mut Node<K> {
        debug_assert!(idx < self.nodes.len());
        &mut self.nodes[idx]
    }

    /// Places `node` in a recycled slot when one is available, otherwise
    /// grows the arena.
    fn allocate_node(&mut self, node: Node<K>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    #[inline]
    fn deallocate_node(&mut self, idx: usize) {
        debug_assert!(idx < self.nodes.len());
        self.free.push(idx);
    }

    /// Nil is black. Every color query on a possibly absent index goes through here.
    #[inline]
    fn get_color(&self, node_idx: usize) -> Color {
        if node_idx == NIL {
            Color::Black
        } else {
            self.node_at(node_idx).color
        }
    }

    #[inline]
    fn set_color(&mut self, node_idx: usize, color: Color) {
        if node_idx != NIL {
            self.node_at_mut(node_idx).color = color;
        }
    }

    #[inline]
    fn is_red(&self, node_idx: usize) -> bool {
        self.get_color(node_idx) == Color::Red
    }

    #[inline]
    fn is_black(&self, node_idx: usize) -> bool {
        self.get_color(node_idx) == Color::Black
    }

    #[inline]
    fn get_parent(&self, node: usize) -> usize {
        if node == NIL {
            NIL
        } else {
            self.node_at(node).parent
        }
    }

    #[inline]
    fn get_left(&self, node: usize) -> usize {
        if node == NIL {
            NIL
        } else {
            self.node_at(node).left
        }
    }

    #[inline]
    fn get_right(&self, node: usize) -> usize {
        if node == NIL {
            NIL
        } else {
            self.node_at(node).right
        }
    }

    fn find_minimum(&self, mut node: usize) -> usize {
        while node != NIL {
            let left = self.node_at(node).left;
            if left == NIL {
                break;
            }
            node = left;
        }
        node
    }

    fn find_maximum(&self, mut node: usize) -> usize {
        while node != NIL {
            let right = self.node_at(node).right;
            if right == NIL {
                break;
            }
            node = right;
        }
        node
    }

    /// In-order successor by climbing parent links, nil past the last node.
    fn successor(&self, node: usize) -> usize {
        let right = self.get_right(node);
        if right != NIL {
            return self.find_minimum(right);
        }

        let mut child = node;
        let mut parent = self.get_parent(node);
        while parent != NIL && child == self.get_right(parent) {
            child = parent;
            parent = self.get_parent(parent);
        }
        parent
    }

    fn predecessor(&self, node: usize) -> usize {
        let left = self.get_left(node);
        if left != NIL {
            return self.find_maximum(left);
        }

        let mut child = node;
        let mut parent = self.get_parent(node);
        while parent != NIL && child == self.get_left(parent) {
            child = parent;
            parent = self.get_parent(parent);
        }
        parent
    }
}

impl<K: Ord + Copy + Debug> RbTree<K> {
    /// Returns `true` if `value` is stored in the tree
    ///
    /// # Arguments
    ///
    /// * `value` - The key to look up
    pub fn contains(&self, value: K) -> bool {
        self.find_node(value).is_some()
    }

    /// Returns the smallest key, or `None` if the tree is empty
    pub fn min(&self) -> Option<K> {
        if self.root == NIL {
            return None;
        }
        let min_node = self.find_minimum(self.root);
        Some(self.node_at(min_node).value)
    }

    /// Returns the largest key, or `None` if the tree is empty
    pub fn max(&self) -> Option<K> {
        if self.root == NIL {
            return None;
        }
        let max_node = self.find_maximum(self.root);
        Some(self.node_at(max_node).value)
    }

    /// Returns the root node for read-only traversal, or `None` if the tree is empty
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        NodeRef::new(self, self.root)
    }

    /// Returns an iterator over the keys in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        let (front, back) = if self.root == NIL {
            (NIL, NIL)
        } else {
            (self.find_minimum(self.root), self.find_maximum(self.root))
        };

        Iter {
            tree: self,
            front,
            back,
            remaining: self.len,
        }
    }

    fn find_node(&self, value: K) -> Option<usize> {
        let mut current = self.root;

        while current != NIL {
            let node = self.node_at(current);
            match value.cmp(&node.value) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }
}

/// In-order iterator over the keys of an [`RbTree`], created by [`RbTree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<K: Copy> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.front;
        self.front = self.tree.successor(current);
        self.remaining -= 1;
        Some(self.tree.node_at(current).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Copy> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<K> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.back;
        self.back = self.tree.predecessor(current);
        self.remaining -= 1;
        Some(self.tree.node_at(current).value)
    }
}

impl<K: Copy> ExactSizeIterator for Iter<'_, K> {}

impl<K: Copy> FusedIterator for Iter<'_, K> {}

impl<'a, K: Ord + Copy + Debug> IntoIterator for &'a RbTree<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord + Copy + Debug> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K: Ord + Copy + Debug> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use ordered_float::OrderedFloat;

    const SCENARIO: [i32; 8] = [10, 5, 20, 1, 2, 7, 15, 30];

    #[test]
    fn test_rbtree_creation() {
        let tree = RbTree::<i32>::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.black_height(), 0);
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.verify(), Ok(0));
    }

    #[test]
    fn test_rbtree_with_capacity() {
        let tree = RbTree::<u64>::with_capacity(16);
        assert!(tree.capacity() >= 16);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_large_capacity_limits() {
        assert!(std::panic::catch_unwind(|| RbTree::<u8>::with_capacity(usize::MAX)).is_err());
    }

    #[test]
    fn test_scenario_insert_then_remove_root_key() {
        let mut tree = RbTree::new();
        for value in SCENARIO {
            assert!(tree.insert(value));
            tree.verify().unwrap();
        }

        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 5, 7, 10, 15, 20, 30]);
        assert_eq!(tree.root().unwrap().color(), Color::Black);
        assert_eq!(tree.len(), 8);

        assert!(tree.remove(10));
        assert!(!tree.contains(10));
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 5, 7, 15, 20, 30]);
        assert_eq!(tree.len(), 7);
        tree.verify().unwrap();
    }

    #[test]
    fn test_scenario_remove_in_insertion_order() {
        let mut tree: RbTree<i32> = SCENARIO.into_iter().collect();
        let mut model: BTreeSet<i32> = SCENARIO.into_iter().collect();

        for value in SCENARIO {
            assert!(tree.remove(value));
            model.remove(&value);
            tree.verify().unwrap();
            assert!(tree.iter().eq(model.iter().copied()));
        }
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_contains() {
        let tree: RbTree<i32> = SCENARIO.into_iter().collect();
        for value in SCENARIO {
            assert!(tree.contains(value));
        }
        for value in [0, 3, 11, 31, -5] {
            assert!(!tree.contains(value));
        }
    }

    #[test]
    fn test_min_max() {
        let tree: RbTree<i32> = SCENARIO.into_iter().collect();
        assert_eq!(tree.min(), Some(1));
        assert_eq!(tree.max(), Some(30));
    }

    #[test]
    fn test_iter_both_ends() {
        let tree: RbTree<i32> = (1..=6).collect();

        let mut iter = tree.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(6));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        assert_eq!(tree.iter().rev().collect::<Vec<_>>(), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let tree: RbTree<i32> = [3, 1, 2].into_iter().collect();
        let mut seen = Vec::new();
        for value in &tree {
            seen.push(value);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_clear_keeps_working() {
        let mut tree: RbTree<i32> = (0..32).collect();
        let capacity = tree.capacity();

        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.capacity(), capacity);

        tree.insert(42);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![42]);
        tree.verify().unwrap();
    }

    #[test]
    fn test_memory_reuse() {
        let mut tree = RbTree::new();
        for i in 0..10 {
            tree.insert(i);
        }
        let arena = tree.nodes.len();

        for i in 0..5 {
            tree.remove(i);
        }
        for i in 100..105 {
            tree.insert(i);
        }

        assert_eq!(tree.nodes.len(), arena);
        assert!(tree.free.is_empty());
        assert_eq!(tree.len(), 10);
        tree.verify().unwrap();
    }

    #[test]
    fn test_black_height_matches_verify() {
        let tree: RbTree<i32> = (0..100).collect();
        assert_eq!(tree.verify(), Ok(tree.black_height()));
        assert!(tree.black_height() >= 4);
    }

    #[test]
    fn test_float_keys() {
        let mut tree = RbTree::new();
        for value in [1.5, f64::INFINITY, -0.25, f64::NEG_INFINITY, f64::NAN] {
            assert!(tree.insert(OrderedFloat(value)));
        }
        assert!(!tree.insert(OrderedFloat(1.5)));

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.min(), Some(OrderedFloat(f64::NEG_INFINITY)));
        assert_eq!(tree.max(), Some(OrderedFloat(f64::NAN)));
        assert!(tree.remove(OrderedFloat(f64::NAN)));
        assert_eq!(tree.max(), Some(OrderedFloat(f64::INFINITY)));
        tree.verify().unwrap();
    }

    #[test]
    fn test_extreme_integer_keys() {
        let tree: RbTree<i64> = [i64::MIN, i64::MAX, 0, -1, 1].into_iter().collect();
        assert_eq!(tree.min(), Some(i64::MIN));
        assert_eq!(tree.max(), Some(i64::MAX));
        tree.verify().unwrap();
    }
}
