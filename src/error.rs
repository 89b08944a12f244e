use alloc::string::String;
use thiserror::Error;

/// A red-black or search-tree invariant found broken by [`crate::RbTree::verify`].
///
/// Keys are rendered with `Debug` so the error stays independent of the key type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red
    #[error("root {key} is red")]
    RedRoot {
        /// Key stored at the root
        key: String,
    },
    /// A red node has a red child
    #[error("red node {parent} has red child {child}")]
    RedRed {
        /// Key of the red parent
        parent: String,
        /// Key of the red child
        child: String,
    },
    /// Two paths below the same node cross a different number of black nodes
    #[error("black height differs below {key}: left {left}, right {right}")]
    BlackHeight {
        /// Key of the node whose subtrees disagree
        key: String,
        /// Black height of the left subtree
        left: usize,
        /// Black height of the right subtree
        right: usize,
    },
    /// In-order traversal is not strictly increasing
    #[error("key {key} is out of order after {previous}")]
    OutOfOrder {
        /// Key visited earlier in the in-order walk
        previous: String,
        /// Key that should have been greater
        key: String,
    },
    /// A child's parent link does not point back at the node holding it
    #[error("node {key} has a stale parent link")]
    BrokenParentLink {
        /// Key of the child with the wrong back-link
        key: String,
    },
    /// The stored length disagrees with the number of reachable nodes
    #[error("tree records {recorded} keys but {reachable} are reachable")]
    LengthMismatch {
        /// Value of the length counter
        recorded: usize,
        /// Nodes reachable from the root
        reachable: usize,
    },
}
