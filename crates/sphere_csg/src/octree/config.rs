//! OctreeConfig - evaluation parameters and resolution policies.

use super::budget::{full_tree_node_count, NodeBudget};
use crate::error::CsgError;
use crate::types::CsgOp;

/// Which uniform subtrees are merged after recursion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollapsePolicy {
  /// Merge 8 agreeing leaf children, filled or empty.
  #[default]
  Symmetric,
  /// Merge only 8 filled leaf children. Empty siblings stay split.
  FilledOnly,
}

/// Verdict for cells that are still ambiguous at max depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedPolicy {
  /// Boundary cells are left out: the result approximates the solid from
  /// inside.
  #[default]
  Empty,
  /// Boundary cells are kept: the result covers the solid.
  Filled,
}

impl UnresolvedPolicy {
  #[inline]
  pub fn filled(self) -> bool {
    matches!(self, UnresolvedPolicy::Filled)
  }
}

/// Configuration for one octree evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OctreeConfig {
  /// Subdivision levels below the root (0 = root is the only cell).
  pub max_depth: i32,

  /// Operator combining the sphere set.
  pub op: CsgOp,

  pub collapse: CollapsePolicy,

  pub unresolved: UnresolvedPolicy,

  /// Build children on the rayon pool.
  pub parallel: bool,

  /// Only nodes with at least this many levels below them fan out to rayon.
  /// Small subtrees are cheaper to build inline.
  pub parallel_min_depth: i32,

  /// Bound on the eagerly allocated node count.
  pub budget: NodeBudget,
}

impl OctreeConfig {
  pub fn with_max_depth(mut self, max_depth: i32) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn with_op(mut self, op: CsgOp) -> Self {
    self.op = op;
    self
  }

  pub fn with_collapse(mut self, collapse: CollapsePolicy) -> Self {
    self.collapse = collapse;
    self
  }

  pub fn with_unresolved(mut self, unresolved: UnresolvedPolicy) -> Self {
    self.unresolved = unresolved;
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn with_budget(mut self, budget: NodeBudget) -> Self {
    self.budget = budget;
    self
  }

  /// Nodes allocated by a full tree at `max_depth` (0 if the depth is invalid).
  #[inline]
  pub fn full_node_count(&self) -> u64 {
    u32::try_from(self.max_depth)
      .map(full_tree_node_count)
      .unwrap_or(0)
  }

  /// Edge length of the finest cells for a root of `root_size`.
  /// finest = root_size / 2^max_depth
  #[inline]
  pub fn finest_cell_size(&self, root_size: f64) -> f64 {
    root_size / 2.0_f64.powi(self.max_depth.max(0))
  }

  /// Check whether the rayon fan-out applies at a node with `depth` levels
  /// below it.
  #[inline]
  pub fn runs_parallel(&self, depth: i32) -> bool {
    self.parallel && depth >= self.parallel_min_depth
  }

  /// Reject negative depths and trees over budget.
  pub fn validate(&self) -> Result<(), CsgError> {
    if self.max_depth < 0 {
      return Err(CsgError::NegativeDepth(self.max_depth));
    }
    self.budget.check(self.full_node_count())
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      max_depth: 5,
      op: CsgOp::Union,
      collapse: CollapsePolicy::Symmetric,
      unresolved: UnresolvedPolicy::Empty,
      parallel: false,
      parallel_min_depth: 3,
      budget: NodeBudget::DEFAULT,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
