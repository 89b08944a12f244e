use core::fmt::Debug;

use super::{NIL, RbTree};
use crate::InvariantViolation;

fn key<K: Debug>(value: &K) -> alloc::string::String {
    format!("{value:?}")
}

impl<K: Ord + Copy + Debug> RbTree<K> {
    /// Walks the whole tree and checks every red-black and search-tree invariant.
    ///
    /// Checked: black root, no red node with a red child, equal black height
    /// on every path, strictly increasing in-order keys, consistent parent
    /// back-links, and a length counter matching the reachable node count.
    ///
    /// # Returns
    ///
    /// * `Result<usize, InvariantViolation>` - The black height of the tree, or
    ///   the first violation found
    pub fn verify(&self) -> Result<usize, InvariantViolation> {
        if self.root == NIL {
            if self.len != 0 {
                return Err(InvariantViolation::LengthMismatch {
                    recorded: self.len,
                    reachable: 0,
                });
            }
            return Ok(0);
        }

        let root = self.node_at(self.root);
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot {
                key: key(&root.value),
            });
        }
        if root.parent != NIL {
            return Err(InvariantViolation::BrokenParentLink {
                key: key(&root.value),
            });
        }

        let mut previous = None;
        let mut reachable = 0;
        let height = self.verify_subtree(self.root, &mut previous, &mut reachable)?;

        if reachable != self.len {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                reachable,
            });
        }
        Ok(height)
    }

    /// In-order walk returning the black height below `node` (nil counts 0).
    fn verify_subtree(
        &self,
        node: usize,
        previous: &mut Option<K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if node == NIL {
            return Ok(0);
        }

        // a cycle would otherwise recurse forever
        if *reachable > self.nodes.len() {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                reachable: *reachable,
            });
        }

        let node_ref = self.node_at(node);

        for child in [node_ref.left, node_ref.right] {
            if child == NIL {
                continue;
            }
            let child_ref = self.node_at(child);
            if child_ref.parent != node {
                return Err(InvariantViolation::BrokenParentLink {
                    key: key(&child_ref.value),
                });
            }
            if self.is_red(node) && self.is_red(child) {
                return Err(InvariantViolation::RedRed {
                    parent: key(&node_ref.value),
                    child: key(&child_ref.value),
                });
            }
        }

        let left_height = self.verify_subtree(node_ref.left, previous, reachable)?;

        if let Some(prev) = previous.filter(|&prev| prev >= node_ref.value) {
            return Err(InvariantViolation::OutOfOrder {
                previous: key(&prev),
                key: key(&node_ref.value),
            });
        }
        *previous = Some(node_ref.value);
        *reachable += 1;

        let right_height = self.verify_subtree(node_ref.right, previous, reachable)?;

        if left_height != right_height {
            return Err(InvariantViolation::BlackHeight {
                key: key(&node_ref.value),
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + usize::from(self.is_black(node)))
    }
}
