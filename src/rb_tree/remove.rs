use core::fmt::Debug;

use super::{Color, NIL, RbTree};

impl<K: Ord + Copy + Debug> RbTree<K> {
    /// Removes `value` from the tree.
    ///
    /// # Arguments
    ///
    /// * `value` - The key to remove
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if the key was present and removed, `false` otherwise
    pub fn remove(&mut self, value: K) -> bool {
        let Some(node_idx) = self.find_node(value) else {
            log::trace!("remove of absent key {value:?}");
            return false;
        };

        let removal_idx = self.resolve_removal_point(node_idx);
        self.fix_removal_violations(removal_idx);
        self.splice_out(removal_idx);
        self.len -= 1;

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify().is_ok(),
            "RB tree invariants violated after removal"
        );

        true
    }

    /// Walks from the node holding the doomed key down to the node that will
    /// physically leave the tree, shifting keys up along the way.
    ///
    /// - no children: the node itself
    /// - two children: continue at the in-order successor
    /// - one child: continue at that child
    ///
    /// Each step copies the next node's key into the current one, so the
    /// in-order sequence is intact once the returned leaf is detached.
    fn resolve_removal_point(&mut self, mut node: usize) -> usize {
        loop {
            let next = match (self.get_left(node), self.get_right(node)) {
                (NIL, NIL) => return node,
                (left, NIL) => left,
                (NIL, right) => right,
                (_, right) => self.find_minimum(right),
            };

            let moved = self.node_at(next).value;
            self.node_at_mut(node).value = moved;
            node = next;
        }
    }

    /// Restores black height before `node` is detached.
    ///
    /// A red node (or the root) absorbs the missing black by being colored
    /// black. Otherwise `node` is double black and the sibling cases apply;
    /// "near" and "far" children are taken relative to the side `node` sits on.
    fn fix_removal_violations(&mut self, mut node: usize) {
        while node != self.root && self.is_black(node) {
            let parent = self.get_parent(node);

            if node == self.get_left(parent) {
                let mut sibling = self.get_right(parent);
                assert_ne!(sibling, NIL, "double-black node has no sibling");

                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.get_right(parent);
                    assert_ne!(sibling, NIL, "double-black node has no sibling");
                }

                if self.is_black(self.get_left(sibling)) && self.is_black(self.get_right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    continue;
                }

                if self.is_black(self.get_right(sibling)) {
                    self.set_color(self.get_left(sibling), Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate_right(sibling);
                    sibling = self.get_right(parent);
                }

                self.set_color(sibling, self.get_color(parent));
                self.set_color(parent, Color::Black);
                self.set_color(self.get_right(sibling), Color::Black);
                self.rotate_left(parent);
                return;
            } else {
                let mut sibling = self.get_left(parent);
                assert_ne!(sibling, NIL, "double-black node has no sibling");

                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.get_left(parent);
                    assert_ne!(sibling, NIL, "double-black node has no sibling");
                }

                if self.is_black(self.get_right(sibling)) && self.is_black(self.get_left(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = parent;
                    continue;
                }

                if self.is_black(self.get_left(sibling)) {
                    self.set_color(self.get_right(sibling), Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate_left(sibling);
                    sibling = self.get_left(parent);
                }

                self.set_color(sibling, self.get_color(parent));
                self.set_color(parent, Color::Black);
                self.set_color(self.get_left(sibling), Color::Black);
                self.rotate_right(parent);
                return;
            }
        }

        self.set_color(node, Color::Black);
    }

    /// Detaches `node`, hands its slot (or the root) to its only child if it
    /// has one, and recycles its arena slot.
    fn splice_out(&mut self, node: usize) {
        let child = match self.get_left(node) {
            NIL => self.get_right(node),
            left => left,
        };
        debug_assert!(
            self.get_left(node) == NIL || self.get_right(node) == NIL,
            "removal point has two children"
        );

        let parent = self.get_parent(node);
        self.replace_child(parent, node, child);
        self.deallocate_node(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use crate::Color::{Black, Red};

    fn shape(tree: &RbTree<i32>) -> Vec<Vec<(i32, Color)>> {
        tree.levels()
    }

    #[test]
    fn test_remove_red_leaf() {
        let mut tree: RbTree<i32> = [10, 5, 20].into_iter().collect();
        assert!(tree.remove(5));
        assert_eq!(shape(&tree), vec![vec![(10, Black)], vec![(20, Red)]]);
    }

    #[test]
    fn test_remove_node_with_single_child() {
        let mut tree: RbTree<i32> = [10, 5, 20, 1].into_iter().collect();
        assert_eq!(
            shape(&tree),
            vec![vec![(10, Black)], vec![(5, Black), (20, Black)], vec![(1, Red)]]
        );

        assert!(tree.remove(5));
        assert_eq!(shape(&tree), vec![vec![(10, Black)], vec![(1, Black), (20, Black)]]);
    }

    #[test]
    fn test_remove_far_red_nephew_rotates_at_parent() {
        let mut tree: RbTree<i32> = [10, 5, 20, 1].into_iter().collect();
        assert!(tree.remove(20));
        assert_eq!(shape(&tree), vec![vec![(5, Black)], vec![(1, Black), (10, Black)]]);
    }

    #[test]
    fn test_remove_black_sibling_with_black_children_pushes_up() {
        let mut tree: RbTree<i32> = [10, 5, 20, 1].into_iter().collect();
        assert!(tree.remove(1));
        assert!(tree.remove(5));
        assert_eq!(shape(&tree), vec![vec![(10, Black)], vec![(20, Red)]]);
    }

    #[test]
    fn test_remove_red_sibling_rotates_first() {
        let mut tree: RbTree<i32> = (1..=6).collect();
        assert_eq!(
            shape(&tree),
            vec![
                vec![(2, Black)],
                vec![(1, Black), (4, Red)],
                vec![(3, Black), (5, Black)],
                vec![(6, Red)],
            ]
        );

        assert!(tree.remove(1));
        assert_eq!(
            shape(&tree),
            vec![
                vec![(4, Black)],
                vec![(2, Black), (5, Black)],
                vec![(3, Red), (6, Red)],
            ]
        );
    }

    #[test]
    fn test_remove_near_red_nephew_rotates_twice() {
        let mut tree: RbTree<i32> = [10, 5, 20, 15].into_iter().collect();
        assert!(tree.remove(5));
        assert_eq!(shape(&tree), vec![vec![(15, Black)], vec![(10, Black), (20, Black)]]);
    }

    #[test]
    fn test_remove_two_children_takes_successor_key() {
        let mut tree: RbTree<i32> = [10, 5, 20, 15, 30].into_iter().collect();
        let root = tree.root;

        assert!(tree.remove(10));
        assert_eq!(tree.root, root);
        assert_eq!(tree.node_at(root).value, 15);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![5, 15, 20, 30]);
    }

    #[test]
    fn test_remove_successor_with_right_child() {
        let mut tree: RbTree<i32> = [20, 10, 30, 25, 40, 45].into_iter().collect();
        assert!(tree.remove(30));
        assert!(tree.remove(20));
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![10, 25, 40, 45]);
        tree.verify().unwrap();
    }

    #[test]
    fn test_remove_only_key() {
        let mut tree = RbTree::new();
        tree.insert(7);
        assert!(tree.remove(7));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.black_height(), 0);
        assert!(!tree.remove(7));
    }

    #[test]
    fn test_remove_absent_leaves_tree_untouched() {
        let mut tree: RbTree<i32> = [10, 5, 20, 1, 2, 7, 15, 30].into_iter().collect();
        let before = shape(&tree);

        for value in [0, 3, 11, 31] {
            assert!(!tree.remove(value));
        }
        assert_eq!(tree.len(), 8);
        assert_eq!(shape(&tree), before);

        let mut empty = RbTree::<i32>::new();
        assert!(!empty.remove(1));
    }

    #[test]
    fn test_remove_black_height_shrinks_by_at_most_one() {
        let mut tree: RbTree<i32> = (0..200).collect();
        let mut height = tree.black_height();
        for i in (0..200).step_by(3).chain((1..200).step_by(3)) {
            assert!(tree.remove(i));
            let next = tree.black_height();
            assert!(next == height || next + 1 == height);
            height = next;
        }
        assert_eq!(tree.len(), 200 - 67 - 67);
        tree.verify().unwrap();
    }

    #[test]
    fn test_deletion_stress() {
        let mut tree: RbTree<i32> = (0..500).collect();

        for i in (0..500).step_by(2) {
            assert!(tree.remove(i));
        }
        assert_eq!(tree.len(), 250);

        for i in 0..500 {
            assert_eq!(tree.contains(i), i % 2 == 1);
        }
        tree.verify().unwrap();
    }
}
