use super::{NIL, RbTree};

impl<K> RbTree<K> {
    /// Promotes `x.right` into `x`'s place; `x` becomes its left child and
    /// inherits its former left subtree. Colors are untouched.
    pub(super) fn rotate_left(&mut self, x: usize) {
        assert_ne!(x, NIL, "left rotation on a nil node");

        let y = self.node_at(x).right;
        assert_ne!(y, NIL, "left rotation requires a right child");

        let y_left = self.node_at(y).left;
        self.node_at_mut(x).right = y_left;
        if y_left != NIL {
            self.node_at_mut(y_left).parent = x;
        }

        let x_parent = self.node_at(x).parent;
        self.replace_child(x_parent, x, y);

        self.node_at_mut(y).left = x;
        self.node_at_mut(x).parent = y;
    }

    /// Mirror of [`RbTree::rotate_left`].
    pub(super) fn rotate_right(&mut self, y: usize) {
        assert_ne!(y, NIL, "right rotation on a nil node");

        let x = self.node_at(y).left;
        assert_ne!(x, NIL, "right rotation requires a left child");

        let x_right = self.node_at(x).right;
        self.node_at_mut(y).left = x_right;
        if x_right != NIL {
            self.node_at_mut(x_right).parent = y;
        }

        let y_parent = self.node_at(y).parent;
        self.replace_child(y_parent, y, x);

        self.node_at_mut(x).right = y;
        self.node_at_mut(y).parent = x;
    }

    /// Points the slot of `parent` that held `old` (or the root) at `new`,
    /// and sets `new`'s parent link.
    pub(super) fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else if old == self.node_at(parent).left {
            self.node_at_mut(parent).left = new;
        } else {
            self.node_at_mut(parent).right = new;
        }

        if new != NIL {
            self.node_at_mut(new).parent = parent;
        }
    }
}
