//! Dependency hierarchy levels
//!
//! Breadth-first layering from every root (a node with no incoming edge).
//! A node's level is its BFS parent's level plus one. The first visit wins,
//! so a node reachable from several roots keeps the level of whichever
//! root's wave reached it first. Nodes that no root reaches (e.g. members
//! of a cycle) stay at level 0.

use super::common::{GraphView, NodeId};
use std::collections::VecDeque;

/// Result of the hierarchy layering
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchyLevels {
    /// Level per dense index
    pub levels: Vec<usize>,
    /// Dense indices of the roots, in index order
    pub roots: Vec<usize>,
}

impl HierarchyLevels {
    /// Level of a node by id
    pub fn level_of(&self, view: &GraphView, node: NodeId) -> Option<usize> {
        view.node_to_index.get(&node).map(|&idx| self.levels[idx])
    }

    /// Deepest level, 0 for an empty view
    pub fn max_level(&self) -> usize {
        self.levels.iter().copied().max().unwrap_or(0)
    }
}

/// Assign hierarchy levels to every node of the view.
///
/// All roots are enqueued up front in index order, then the queue is
/// drained once.
pub fn hierarchy_levels(view: &GraphView) -> HierarchyLevels {
    let n = view.node_count;
    let mut levels = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    let roots: Vec<usize> = (0..n).filter(|&idx| view.in_degree(idx) == 0).collect();
    for &root in &roots {
        visited[root] = true;
        queue.push_back(root);
    }

    while let Some(current) = queue.pop_front() {
        for &next in view.successors(current) {
            if !visited[next] {
                visited[next] = true;
                levels[next] = levels[current] + 1;
                queue.push_back(next);
            }
        }
    }

    HierarchyLevels { levels, roots }
}
