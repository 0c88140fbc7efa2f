//! Memory bound for eager tree allocation, and build statistics.
//!
//! The full 8-ary tree is allocated before any sphere is classified, so the
//! node count is known up front and checked against the budget.

use std::ops::{Add, AddAssign};

use crate::error::CsgError;

/// Upper bound on the number of cells an evaluation may allocate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeBudget {
	/// Maximum allocated cells (0 = unlimited).
	pub max_nodes: u64,
}

impl NodeBudget {
	/// Default budget: a full depth-7 octree (2,396,745 nodes) fits, depth 8
	/// does not.
	pub const DEFAULT: Self = Self { max_nodes: 1 << 22 };

	/// Unlimited budget for testing or special cases.
	pub const UNLIMITED: Self = Self { max_nodes: 0 };

	/// Check if `required` cells fit in the budget.
	#[inline]
	pub fn allows(&self, required: u64) -> bool {
		self.max_nodes == 0 || required <= self.max_nodes
	}

	/// Reject requests that exceed the budget.
	pub fn check(&self, required: u64) -> Result<(), CsgError> {
		if self.allows(required) {
			Ok(())
		} else {
			Err(CsgError::ResourceExhaustion {
				required,
				limit: self.max_nodes,
			})
		}
	}
}

impl Default for NodeBudget {
	fn default() -> Self {
		Self::DEFAULT
	}
}

/// Node count of a full octree with `max_depth` subdivision levels.
///
/// `sum(8^k for k in 0..=max_depth) = (8^(max_depth+1) - 1) / 7`, saturating
/// at `u64::MAX`.
pub fn full_tree_node_count(max_depth: u32) -> u64 {
	let mut total: u64 = 0;
	let mut level: u64 = 1;
	for _ in 0..=max_depth {
		total = total.saturating_add(level);
		level = level.saturating_mul(8);
	}
	total
}

/// Statistics from one `build` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
	/// Cells visited by the recursion.
	pub nodes_visited: u64,
	/// Cube/sphere classifications performed.
	pub classifications: u64,
	/// Cells resolved as filled by the operator's predicates.
	pub resolved_filled: u64,
	/// Cells resolved as empty by the operator's predicates.
	pub resolved_empty: u64,
	/// Ambiguous cells at max depth, assigned by the unresolved policy.
	pub unresolved: u64,
	/// Internal nodes merged into a single leaf after recursion.
	pub collapses: u64,
}

impl BuildStats {
	/// Cells that ended the recursion with a definite verdict.
	#[inline]
	pub fn total_resolved(&self) -> u64 {
		self.resolved_filled + self.resolved_empty
	}
}

impl Add for BuildStats {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self {
			nodes_visited: self.nodes_visited + other.nodes_visited,
			classifications: self.classifications + other.classifications,
			resolved_filled: self.resolved_filled + other.resolved_filled,
			resolved_empty: self.resolved_empty + other.resolved_empty,
			unresolved: self.unresolved + other.unresolved,
			collapses: self.collapses + other.collapses,
		}
	}
}

impl AddAssign for BuildStats {
	fn add_assign(&mut self, other: Self) {
		*self = *self + other;
	}
}
