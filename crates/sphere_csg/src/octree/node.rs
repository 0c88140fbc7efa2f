//! OctreeNode - one cubic cell that owns its eight children.
//!
//! Geometry (center, size, remaining depth) is fixed at construction. Only
//! the `state` changes during a build, and only from `Internal` to `Leaf`.

use glam::DVec3;

use crate::types::Cube;

/// Leaf or internal cell state.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeState {
  /// Terminal cell. `filled` is true iff the whole cell is solid.
  Leaf { filled: bool },
  /// Subdivided cell, children indexed by octant.
  Internal(Box<[OctreeNode; 8]>),
}

/// Octree cell.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
  center: DVec3,
  size: f64,
  depth: i32,
  pub(crate) state: NodeState,
}

impl OctreeNode {
  /// Build a full subtree with `depth` levels below this node.
  ///
  /// Every node starts as an empty leaf at depth 0 or as an internal node
  /// with all 8 children allocated.
  pub(crate) fn new_subtree(center: DVec3, size: f64, depth: i32) -> Self {
    let state = if depth <= 0 {
      NodeState::Leaf { filled: false }
    } else {
      let half = size * 0.5;
      NodeState::Internal(Box::new(std::array::from_fn(|octant| {
        Self::new_subtree(child_center(center, size, octant as u8), half, depth - 1)
      })))
    };
    Self {
      center,
      size,
      depth: depth.max(0),
      state,
    }
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    self.center
  }

  /// Full edge length.
  #[inline]
  pub fn size(&self) -> f64 {
    self.size
  }

  #[inline]
  pub fn half_size(&self) -> f64 {
    self.size * 0.5
  }

  /// Subdivision levels available below this node (0 = finest level).
  #[inline]
  pub fn depth(&self) -> i32 {
    self.depth
  }

  #[inline]
  pub fn state(&self) -> &NodeState {
    &self.state
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.state, NodeState::Leaf { .. })
  }

  /// Solidity of a leaf; `None` for internal nodes.
  #[inline]
  pub fn filled(&self) -> Option<bool> {
    match self.state {
      NodeState::Leaf { filled } => Some(filled),
      NodeState::Internal(_) => None,
    }
  }

  #[inline]
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    match &self.state {
      NodeState::Leaf { .. } => None,
      NodeState::Internal(children) => Some(&**children),
    }
  }

  /// The cell as an output cube.
  #[inline]
  pub fn cube(&self) -> Cube {
    Cube::new(self.center, self.size)
  }

  /// Nodes in this subtree, including this one.
  pub fn node_count(&self) -> usize {
    match &self.state {
      NodeState::Leaf { .. } => 1,
      NodeState::Internal(children) => 1 + children.iter().map(OctreeNode::node_count).sum::<usize>(),
    }
  }
}

/// Center of the child cell in `octant`.
///
/// Octant: 0-7 where bits select the sign of the offset on each axis:
/// - bit 0: X (0 = -, 1 = +)
/// - bit 1: Y
/// - bit 2: Z
///
/// The offset is a quarter of the parent size on every axis.
#[inline]
pub fn child_center(center: DVec3, size: f64, octant: u8) -> DVec3 {
  let quarter = size * 0.25;
  let sign = |bit: u8| if octant & bit == 0 { -1.0 } else { 1.0 };
  center + DVec3::new(sign(1), sign(2), sign(4)) * quarter
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
