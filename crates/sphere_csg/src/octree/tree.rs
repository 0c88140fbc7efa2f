//! Octree - root cell plus the configuration it was built for.

use glam::DVec3;

use super::{OctreeConfig, OctreeNode};
use crate::bounds::BoundingCube;
use crate::error::CsgError;
use crate::types::CsgOp;

/// Adaptive octree over a cubic region.
///
/// Constructed once with fixed geometry, filled by [`Octree::build`], then
/// queried and discarded.
#[derive(Clone, Debug)]
pub struct Octree {
  pub(crate) root: OctreeNode,
  pub(crate) bounds: BoundingCube,
  pub(crate) config: OctreeConfig,
}

impl Octree {
  /// Create a tree with default policies.
  ///
  /// `size` is the full edge length of the root cell.
  pub fn new(center: DVec3, size: f64, max_depth: i32, op: CsgOp) -> Result<Self, CsgError> {
    let config = OctreeConfig::default()
      .with_max_depth(max_depth)
      .with_op(op);
    Self::with_config(BoundingCube::new(center, size), config)
  }

  /// Create a tree, allocating the full shape down to `config.max_depth`.
  ///
  /// Bounds, depth and the node budget are checked before anything is
  /// allocated.
  pub fn with_config(bounds: BoundingCube, config: OctreeConfig) -> Result<Self, CsgError> {
    bounds.validate()?;
    config.validate()?;

    tracing::trace!(
      max_depth = config.max_depth,
      nodes = config.full_node_count(),
      "allocating octree"
    );
    let root = OctreeNode::new_subtree(bounds.center, bounds.size, config.max_depth);

    Ok(Self {
      root,
      bounds,
      config,
    })
  }

  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  #[inline]
  pub fn bounds(&self) -> BoundingCube {
    self.bounds
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Level of `node` counted from the root (root = 0).
  #[inline]
  pub fn level_of(&self, node: &OctreeNode) -> i32 {
    self.config.max_depth - node.depth()
  }
}
