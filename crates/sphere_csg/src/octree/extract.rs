//! Depth-first traversal of a built tree.
//!
//! Children are visited in octant order (0..7), so the output order is
//! deterministic and independent of how the tree was built.

use super::node::{NodeState, OctreeNode};
use super::Octree;
use crate::types::Cube;

/// Lazy depth-first iterator over the leaves of a subtree.
pub struct Leaves<'a> {
  stack: Vec<&'a OctreeNode>,
}

impl<'a> Leaves<'a> {
  fn new(root: &'a OctreeNode) -> Self {
    Self { stack: vec![root] }
  }
}

impl<'a> Iterator for Leaves<'a> {
  type Item = &'a OctreeNode;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(node) = self.stack.pop() {
      match node.state() {
        NodeState::Leaf { .. } => return Some(node),
        // Reversed so octant 0 is popped first.
        NodeState::Internal(children) => self.stack.extend(children.iter().rev()),
      }
    }
    None
  }
}

impl OctreeNode {
  /// Leaves of this subtree in octant DFS order.
  pub fn leaves(&self) -> Leaves<'_> {
    Leaves::new(self)
  }
}

impl Octree {
  /// Leaves of the whole tree in octant DFS order.
  pub fn leaves(&self) -> Leaves<'_> {
    self.root.leaves()
  }

  /// Filled leaves as cubes, lazily, in octant DFS order.
  pub fn filled_cubes(&self) -> impl Iterator<Item = Cube> + '_ {
    self
      .leaves()
      .filter(|leaf| leaf.filled() == Some(true))
      .map(OctreeNode::cube)
  }

  /// Collect every filled leaf at the depth it was resolved.
  #[tracing::instrument(skip_all, name = "octree::extract")]
  pub fn extract_filled_cubes(&self) -> Vec<Cube> {
    self.filled_cubes().collect()
  }

  /// Sum of `size^3` over filled leaves.
  pub fn filled_volume(&self) -> f64 {
    self.filled_cubes().map(|cube| cube.volume()).sum()
  }

  pub fn leaf_count(&self) -> usize {
    self.leaves().count()
  }

  /// Live nodes, internal and leaf.
  pub fn node_count(&self) -> usize {
    self.root.node_count()
  }
}
