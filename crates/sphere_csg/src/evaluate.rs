//! One-call evaluation: bounds, construction, build and extraction.

use web_time::Instant;

use crate::bounds::{bounding_cube, BoundingCube};
use crate::error::CsgError;
use crate::metrics::TreeMetrics;
use crate::octree::{BuildStats, Octree, OctreeConfig};
use crate::types::{validate_spheres, Cube, Sphere};

/// Result of a full evaluation.
#[derive(Clone, Debug)]
pub struct Evaluation {
  /// Region the tree was built over.
  pub bounds: BoundingCube,
  /// Filled leaves in octant DFS order.
  pub cubes: Vec<Cube>,
  pub stats: BuildStats,
  pub metrics: TreeMetrics,
  /// Wall time spent in construction, build and extraction.
  pub elapsed_us: u64,
}

impl Evaluation {
  pub fn filled_volume(&self) -> f64 {
    self.metrics.filled_volume
  }

  pub fn is_empty(&self) -> bool {
    self.cubes.is_empty()
  }
}

/// Evaluate `spheres` over their own bounding cube.
///
/// The cube is centered on the sphere-set box and as large as its longest
/// axis.
pub fn evaluate(spheres: &[Sphere], config: &OctreeConfig) -> Result<Evaluation, CsgError> {
  let bounds = bounding_cube(spheres)?;
  evaluate_in(spheres, bounds, config)
}

/// Evaluate `spheres` over caller-supplied bounds.
#[tracing::instrument(skip_all, name = "sphere_csg::evaluate", fields(spheres = spheres.len(), max_depth = config.max_depth))]
pub fn evaluate_in(
  spheres: &[Sphere],
  bounds: BoundingCube,
  config: &OctreeConfig,
) -> Result<Evaluation, CsgError> {
  validate_spheres(spheres)?;

  let start = Instant::now();

  let mut tree = {
    let _span = tracing::info_span!("construct").entered();
    Octree::with_config(bounds, *config)?
  };

  let stats = {
    let _span = tracing::info_span!("build").entered();
    tree.build(spheres)?
  };

  let (cubes, metrics) = {
    let _span = tracing::info_span!("extract").entered();
    (tree.extract_filled_cubes(), TreeMetrics::from_tree(&tree))
  };

  let elapsed_us = start.elapsed().as_micros() as u64;

  tracing::debug!(
    cubes = cubes.len(),
    nodes = metrics.node_count,
    elapsed_us,
    "evaluation complete"
  );

  Ok(Evaluation {
    bounds,
    cubes,
    stats,
    metrics,
    elapsed_us,
  })
}
