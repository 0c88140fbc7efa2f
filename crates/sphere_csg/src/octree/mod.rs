//! Adaptive octree CSG evaluator.
//!
//! The tree is an explicit, strictly owning structure: every internal node
//! owns exactly 8 children, allocated eagerly down to `max_depth` when the
//! tree is created. [`Octree::build`] classifies cells top-down and replaces
//! resolved or uniform subtrees with single leaves.
//!
//! # Depth Convention
//!
//! Node depth counts the levels still available below a node: the root has
//! depth `max_depth`, cells at the finest level have depth 0.
//!
//! ```text
//! Cell Size = root_size / 2^(max_depth - depth)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` / `NodeState` - one cell and its children
//! - [`config`]: `OctreeConfig` - depth, operator and resolution policies
//! - [`budget`]: `NodeBudget` - allocation bound, `BuildStats`
//! - [`tree`]: `Octree` - root cell and construction
//! - [`build`]: classification and collapse pass
//! - [`extract`]: leaf traversal and cube extraction

pub mod budget;
pub mod build;
pub mod config;
pub mod extract;
pub mod node;
pub mod tree;

// Re-exports
pub use budget::{full_tree_node_count, BuildStats, NodeBudget};
pub use config::{CollapsePolicy, OctreeConfig, UnresolvedPolicy};
pub use extract::Leaves;
pub use node::{child_center, NodeState, OctreeNode};
pub use tree::Octree;
