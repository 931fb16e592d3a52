use std::collections::HashSet;

use super::file_node::FileNode;

/// Files already inlined during one amalgamation run.
///
/// Invariant: a node is inlined at most once per run. The first reference
/// wins; every later reference (from a second parent, or from a cycle back
/// to an ancestor) finds the node recorded and is elided.
///
/// One record is created per top-level run and threaded through every
/// recursive expansion by `&mut`; it is never global.
#[derive(Debug, Default, Clone)]
pub struct InclusionRecord {
    seen: HashSet<FileNode>,
}

impl InclusionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node`. Returns `true` if it was not recorded before.
    pub fn insert(&mut self, node: &FileNode) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let mut record = InclusionRecord::new();
        let node = FileNode::new("ureact/a.hpp");

        assert!(record.insert(&node));
        assert!(!record.insert(&node));
        assert!(!record.insert(&FileNode::new("./ureact/a.hpp")));
    }

    #[test]
    fn distinct_nodes_are_recorded_independently() {
        let mut record = InclusionRecord::new();
        assert!(record.insert(&FileNode::new("ureact/a.hpp")));
        assert!(record.insert(&FileNode::new("ureact/b.hpp")));
        assert!(!record.insert(&FileNode::new("ureact/a.hpp")));
    }
}
