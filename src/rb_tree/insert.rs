use core::{cmp::Ordering, fmt::Debug};

use super::{Color, NIL, Node, RbTree};

impl<K: Ord + Copy + Debug> RbTree<K> {
    /// Inserts `value` into the tree.
    ///
    /// Duplicates are rejected: the tree is left untouched and a warning is
    /// logged. The new key enters as a red leaf and the tree is rebalanced on
    /// the way back up.
    ///
    /// # Arguments
    ///
    /// * `value` - The key to insert
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if the key was stored, `false` if it was already present
    pub fn insert(&mut self, value: K) -> bool {
        let Some(parent_idx) = self.find_insertion_parent(value) else {
            log::warn!("rejected duplicate key {value:?}");
            return false;
        };

        let new_idx = self.allocate_node(Node::leaf(value, parent_idx));
        self.link_to_parent(new_idx, parent_idx, value);
        self.len += 1;

        self.fix_insertion_violations(new_idx);

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify().is_ok(),
            "RB tree invariants violated after insertion"
        );

        true
    }

    /// Descends to the nil slot where `value` belongs and returns its parent
    /// (nil for an empty tree), or `None` if `value` is already stored.
    fn find_insertion_parent(&self, value: K) -> Option<usize> {
        let mut current = self.root;
        let mut parent = NIL;

        while current != NIL {
            parent = current;
            let node = self.node_at(current);
            current = match value.cmp(&node.value) {
                Ordering::Equal => return None,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        Some(parent)
    }

    fn link_to_parent(&mut self, node_idx: usize, parent_idx: usize, value: K) {
        if parent_idx == NIL {
            self.root = node_idx;
        } else if value < self.node_at(parent_idx).value {
            self.node_at_mut(parent_idx).left = node_idx;
        } else {
            self.node_at_mut(parent_idx).right = node_idx;
        }
    }

    /// Resolves red-red edges from `node` upward.
    ///
    /// A red uncle is handled by recoloring and moving two levels up. A black
    /// (or nil) uncle with the node on the inner side is first rotated to the
    /// outer side at the parent, and the check reruns from the former parent.
    /// The outer shape is finished by one rotation at the grandparent.
    fn fix_insertion_violations(&mut self, mut node: usize) {
        while node != self.root && self.is_red(self.get_parent(node)) {
            let parent = self.get_parent(node);
            // a red parent is never the root, so the grandparent exists
            let grandparent = self.get_parent(parent);

            if parent == self.get_left(grandparent) {
                let uncle = self.get_right(grandparent);

                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else if node == self.get_right(parent) {
                    // LR
                    self.rotate_left(parent);
                    node = parent;
                } else {
                    // LL
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.get_left(grandparent);

                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                } else if node == self.get_left(parent) {
                    // RL
                    self.rotate_right(parent);
                    node = parent;
                } else {
                    // RR
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }
        self.set_color(self.root, Color::Black);
    }
}
