//! sphere_csg - Sphere CSG evaluated into an adaptive octree of cubes
//!
//! Combines a set of spheres with union or intersection and approximates the
//! resulting solid by axis-aligned cubes. Uniform regions stay as large cubes;
//! only cells crossed by a sphere surface are refined down to `max_depth`.
//!
//! # Features
//!
//! - **Conservative classification**: a cell is inside, outside or partial
//!   with respect to each sphere, decided from its nearest point and corners
//! - **One recursion for both operators**: union and intersection differ only
//!   in their predicate pair
//! - **Bounded allocation**: the full tree is checked against a node budget
//!   before anything is allocated
//! - **Optional rayon fan-out** over the children of upper levels
//! - **Uniform voxel grid** for comparison against the adaptive result
//!
//! # Example
//!
//! ```ignore
//! use glam::DVec3;
//! use sphere_csg::{evaluate, CsgOp, OctreeConfig, Sphere};
//!
//! let spheres = [
//!     Sphere::new(DVec3::new(-0.5, 0.0, 0.0), 1.0),
//!     Sphere::new(DVec3::new(0.5, 0.0, 0.0), 1.0),
//! ];
//! let config = OctreeConfig::default().with_max_depth(6).with_op(CsgOp::Union);
//! let eval = evaluate(&spheres, &config)?;
//!
//! println!("{} cubes, volume {:.3}", eval.cubes.len(), eval.filled_volume());
//! ```

pub mod bounds;
pub mod classify;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use bounds::{bounding_cube, BoundingCube, DAabb3};
pub use classify::{classify, point_in_sphere};
pub use error::CsgError;
pub use types::{CsgOp, Cube, Relation, Sphere};

// Adaptive octree evaluator
pub mod octree;
pub use octree::{
  BuildStats, CollapsePolicy, NodeBudget, Octree, OctreeConfig, OctreeNode, UnresolvedPolicy,
};

// Leaf distribution of a built tree
pub mod metrics;
pub use metrics::TreeMetrics;

// Bounds + build + extract in one call
pub mod evaluate;
pub use evaluate::{evaluate, evaluate_in, Evaluation};

// Flat voxel sampling
pub mod voxel_grid;
pub use voxel_grid::{sample_grid, VoxelGrid};
