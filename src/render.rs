use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::{Color, NodeRef, RbTree};

impl<K: Ord + Copy + Debug> RbTree<K> {
    /// Returns the tree level by level, each level listed left to right as
    /// `(key, color)` pairs. Absent children are skipped.
    ///
    /// # Returns
    ///
    /// * `Vec<Vec<(K, Color)>>` - One entry per depth, the root level first
    pub fn levels(&self) -> Vec<Vec<(K, Color)>> {
        let mut levels = Vec::new();
        let mut current: Vec<NodeRef<'_, K>> = self.root().into_iter().collect();

        while !current.is_empty() {
            levels.push(current.iter().map(|n| (n.value(), n.color())).collect());
            current = current
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        levels
    }
}

/// One line per depth; every entry is written as `key:color` followed by a tab.
impl<K: Ord + Copy + Debug + Display> Display for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels() {
            for (value, color) in level {
                write!(f, "{value}:{color}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
