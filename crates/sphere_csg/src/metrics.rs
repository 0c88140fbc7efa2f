//! Shape statistics for a built tree.
//!
//! Collected in one pass over the leaves after [`Octree::build`]. Levels are
//! counted from the root (level 0) down to the finest cells
//! (level `max_depth`).
//!
//! [`Octree::build`]: crate::octree::Octree::build

use crate::octree::Octree;

/// Leaf distribution of a built tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeMetrics {
  /// Live nodes, internal and leaf.
  pub node_count: u64,
  pub leaf_count: u64,
  pub filled_leaves: u64,
  pub empty_leaves: u64,
  /// Filled leaf count per level (index = level, 0 = root).
  pub filled_per_level: Vec<u64>,
  /// Sum of `size^3` over filled leaves.
  pub filled_volume: f64,
}

impl TreeMetrics {
  pub fn from_tree(tree: &Octree) -> Self {
    let levels = tree.config().max_depth as usize + 1;
    let mut metrics = Self {
      node_count: tree.node_count() as u64,
      filled_per_level: vec![0; levels],
      ..Default::default()
    };

    for leaf in tree.leaves() {
      metrics.leaf_count += 1;
      if leaf.filled() == Some(true) {
        metrics.filled_leaves += 1;
        metrics.filled_volume += leaf.cube().volume();
        let level = tree.level_of(leaf) as usize;
        if let Some(count) = metrics.filled_per_level.get_mut(level) {
          *count += 1;
        }
      } else {
        metrics.empty_leaves += 1;
      }
    }

    metrics
  }

  /// Shallowest level holding a filled leaf.
  pub fn coarsest_filled_level(&self) -> Option<usize> {
    self.filled_per_level.iter().position(|&count| count > 0)
  }

  /// Filled leaves as a fraction of all leaves.
  pub fn fill_ratio(&self) -> f64 {
    if self.leaf_count == 0 {
      0.0
    } else {
      self.filled_leaves as f64 / self.leaf_count as f64
    }
  }
}
