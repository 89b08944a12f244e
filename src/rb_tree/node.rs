use core::fmt;

use super::{NIL, RbTree};

/// Red-Black tree node colors used to maintain tree balance properties.
///
/// Red-Black trees maintain balance by ensuring:
/// - Red nodes have black children
/// - All paths from root to leaves have equal black node counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red node - must have black children, cannot be adjacent to other red nodes
    Red,
    /// Black node - can have children of any color, contributes to black height
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("R"),
            Color::Black => f.write_str("B"),
        }
    }
}

/// A node in the Red-Black tree containing its key and structural information.
///
/// Relations are arena indices; an absent relation holds `NIL`.
#[derive(Debug, Clone)]
pub(super) struct Node<K> {
    /// The stored key
    pub(super) value: K,

    /// Color of this node (Red or Black) used for Red-Black tree balancing
    pub(super) color: Color,

    /// Index of parent node in the arena (nil if this is root)
    pub(super) parent: usize,

    /// Index of left child node in the arena (nil if no left child)
    pub(super) left: usize,

    /// Index of right child node in the arena (nil if no right child)
    pub(super) right: usize,
}

impl<K> Node<K> {
    /// Every node enters the tree as a red leaf.
    #[inline]
    pub(super) const fn leaf(value: K, parent: usize) -> Self {
        Self {
            value,
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        }
    }

    #[inline]
    pub(super) const fn is_leaf(&self) -> bool {
        self.left == NIL && self.right == NIL
    }
}

/// Read-only view of a node inside an [`RbTree`].
///
/// Handed out by [`RbTree::root`] so that renderers and checkers can walk the
/// tree shape without being able to edit it.
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    idx: usize,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K: Copy> NodeRef<'a, K> {
    #[inline]
    pub(super) const fn new(tree: &'a RbTree<K>, idx: usize) -> Option<Self> {
        if idx == NIL {
            None
        } else {
            Some(Self { tree, idx })
        }
    }

    /// Returns the key stored in this node
    #[inline]
    pub fn value(&self) -> K {
        self.tree.node_at(self.idx).value
    }

    /// Returns the color of this node
    #[inline]
    pub fn color(&self) -> Color {
        self.tree.node_at(self.idx).color
    }

    /// Returns the left child, or `None` for an implicit nil leaf
    #[inline]
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        Self::new(self.tree, self.tree.node_at(self.idx).left)
    }

    /// Returns the right child, or `None` for an implicit nil leaf
    #[inline]
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        Self::new(self.tree, self.tree.node_at(self.idx).right)
    }

    /// Returns `true` if neither child is present
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.node_at(self.idx).is_leaf()
    }
}

impl<K: Copy + fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.value())
            .field("color", &self.color())
            .finish()
    }
}
