//! Uniform voxel sampling of a sphere combination.
//!
//! The flat counterpart of the octree: every voxel of a `resolution³` grid is
//! tested at its centre, with no hierarchy and no collapse. Useful as a
//! reference when comparing cube counts and volumes.
//!
//! Voxel `(x, y, z)` spans
//!
//! ```text
//! min + [x, x+1] * voxel_size   (same for y, z)
//! ```
//!
//! where `min` is the bounding cube's min corner.

use glam::DVec3;
use rayon::prelude::*;

use crate::bounds::BoundingCube;
use crate::classify::point_in_sphere;
use crate::error::CsgError;
use crate::octree::NodeBudget;
use crate::types::{validate_spheres, CsgOp, Cube, Sphere};

/// Point test for a combination: Union needs one sphere, Intersection all.
#[inline]
pub fn point_in_combination(point: DVec3, spheres: &[Sphere], op: CsgOp) -> bool {
  match op {
    CsgOp::Union => spheres.iter().any(|s| point_in_sphere(point, s)),
    CsgOp::Intersection => spheres.iter().all(|s| point_in_sphere(point, s)),
  }
}

/// A `resolution³` grid over a bounding cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelGrid {
  bounds: BoundingCube,
  resolution: usize,
  op: CsgOp,
  budget: NodeBudget,
}

impl VoxelGrid {
  pub fn new(bounds: BoundingCube, resolution: usize, op: CsgOp) -> Result<Self, CsgError> {
    Self::with_budget(bounds, resolution, op, NodeBudget::DEFAULT)
  }

  /// Create a grid whose voxel count is checked against `budget`.
  pub fn with_budget(
    bounds: BoundingCube,
    resolution: usize,
    op: CsgOp,
    budget: NodeBudget,
  ) -> Result<Self, CsgError> {
    bounds.validate()?;
    if resolution == 0 {
      return Err(CsgError::InvalidResolution(resolution));
    }
    let r = resolution as u64;
    budget.check(r.saturating_mul(r).saturating_mul(r))?;

    Ok(Self {
      bounds,
      resolution,
      op,
      budget,
    })
  }

  #[inline]
  pub fn resolution(&self) -> usize {
    self.resolution
  }

  #[inline]
  pub fn bounds(&self) -> BoundingCube {
    self.bounds
  }

  #[inline]
  pub fn op(&self) -> CsgOp {
    self.op
  }

  #[inline]
  pub fn budget(&self) -> NodeBudget {
    self.budget
  }

  #[inline]
  pub fn voxel_size(&self) -> f64 {
    self.bounds.size / self.resolution as f64
  }

  #[inline]
  pub fn voxel_count(&self) -> usize {
    self.resolution * self.resolution * self.resolution
  }

  /// Centre of voxel `(x, y, z)`.
  #[inline]
  pub fn voxel_center(&self, x: usize, y: usize, z: usize) -> DVec3 {
    let min = self.bounds.aabb().min;
    let offset = DVec3::new(x as f64, y as f64, z as f64) + DVec3::splat(0.5);
    min + offset * self.voxel_size()
  }

  /// Sample every voxel centre; kept voxels come out x-major, then y, then z.
  #[tracing::instrument(skip_all, name = "voxel_grid::sample", fields(resolution = self.resolution, op = ?self.op))]
  pub fn sample(&self, spheres: &[Sphere]) -> Result<Vec<Cube>, CsgError> {
    validate_spheres(spheres)?;

    let n = self.resolution;
    let size = self.voxel_size();

    // One x slab per task; collect keeps slab order.
    let slabs: Vec<Vec<Cube>> = (0..n)
      .into_par_iter()
      .map(|x| {
        let mut slab = Vec::new();
        for y in 0..n {
          for z in 0..n {
            let center = self.voxel_center(x, y, z);
            if point_in_combination(center, spheres, self.op) {
              slab.push(Cube::new(center, size));
            }
          }
        }
        slab
      })
      .collect();

    let cubes: Vec<Cube> = slabs.into_iter().flatten().collect();
    tracing::debug!(
      voxels = self.voxel_count(),
      kept = cubes.len(),
      "voxel grid sampled"
    );
    Ok(cubes)
  }
}

/// Sample `spheres` on a `resolution³` grid over `bounds` with the default
/// budget.
pub fn sample_grid(
  spheres: &[Sphere],
  op: CsgOp,
  bounds: BoundingCube,
  resolution: usize,
) -> Result<Vec<Cube>, CsgError> {
  VoxelGrid::new(bounds, resolution, op)?.sample(spheres)
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  fn unit_bounds() -> BoundingCube {
    BoundingCube::new(DVec3::ZERO, 2.0)
  }

  #[test]
  fn test_voxel_geometry() {
    let grid = VoxelGrid::new(unit_bounds(), 4, CsgOp::Union).unwrap();
    assert_eq!(grid.voxel_size(), 0.5);
    assert_eq!(grid.voxel_count(), 64);
    assert_eq!(grid.voxel_center(0, 0, 0), DVec3::splat(-0.75));
    assert_eq!(grid.voxel_center(3, 3, 3), DVec3::splat(0.75));
    assert_eq!(grid.voxel_center(1, 2, 3), DVec3::new(-0.25, 0.25, 0.75));
  }

  #[test]
  fn test_kept_centers_pass_point_test() {
    let spheres = [
      Sphere::new(DVec3::new(-0.4, 0.0, 0.0), 0.7),
      Sphere::new(DVec3::new(0.4, 0.1, 0.0), 0.6),
    ];
    for op in [CsgOp::Union, CsgOp::Intersection] {
      let cubes = sample_grid(&spheres, op, unit_bounds(), 12).unwrap();
      assert!(!cubes.is_empty(), "{op:?}");
      for cube in &cubes {
        assert!(point_in_combination(cube.center, &spheres, op));
        assert_relative_eq!(cube.size, 2.0 / 12.0);
      }
    }
  }

  /// Mirror symmetry of a centered sphere on an even grid.
  #[test]
  fn test_centered_sphere_symmetric() {
    let cubes = sample_grid(&[Sphere::at_origin(1.0)], CsgOp::Union, unit_bounds(), 8).unwrap();
    assert!(!cubes.is_empty());
    assert_eq!(cubes.len() % 8, 0);
  }

  #[test]
  fn test_volume_approaches_sphere() {
    let sphere = Sphere::at_origin(1.0);
    let cubes = sample_grid(&[sphere], CsgOp::Union, unit_bounds(), 32).unwrap();
    let volume: f64 = cubes.iter().map(Cube::volume).sum();
    assert_relative_eq!(volume, sphere.volume(), max_relative = 0.05);
  }

  #[test]
  fn test_output_order() {
    let cubes = sample_grid(&[Sphere::at_origin(0.9)], CsgOp::Union, unit_bounds(), 6).unwrap();
    let keys: Vec<(f64, f64, f64)> = cubes
      .iter()
      .map(|c| (c.center.x, c.center.y, c.center.z))
      .collect();
    for pair in keys.windows(2) {
      assert!(pair[0] < pair[1], "{:?} before {:?}", pair[0], pair[1]);
    }
  }

  #[test]
  fn test_disjoint_intersection_empty() {
    let spheres = [
      Sphere::new(DVec3::new(-0.6, 0.0, 0.0), 0.3),
      Sphere::new(DVec3::new(0.6, 0.0, 0.0), 0.3),
    ];
    let cubes = sample_grid(&spheres, CsgOp::Intersection, unit_bounds(), 16).unwrap();
    assert!(cubes.is_empty());
    let union = sample_grid(&spheres, CsgOp::Union, unit_bounds(), 16).unwrap();
    assert!(!union.is_empty());
  }

  #[test]
  fn test_invalid_requests() {
    assert_eq!(
      VoxelGrid::new(unit_bounds(), 0, CsgOp::Union).unwrap_err(),
      CsgError::InvalidResolution(0)
    );
    assert_eq!(
      VoxelGrid::with_budget(unit_bounds(), 10, CsgOp::Union, NodeBudget { max_nodes: 999 })
        .unwrap_err(),
      CsgError::ResourceExhaustion {
        required: 1000,
        limit: 999
      }
    );
    assert!(VoxelGrid::with_budget(unit_bounds(), 10, CsgOp::Union, NodeBudget::UNLIMITED).is_ok());
    assert_eq!(
      VoxelGrid::new(BoundingCube::new(DVec3::ZERO, -1.0), 4, CsgOp::Union).unwrap_err(),
      CsgError::InvalidBoundingSize(-1.0)
    );
    assert_eq!(
      sample_grid(&[], CsgOp::Union, unit_bounds(), 4).unwrap_err(),
      CsgError::EmptySphereSet
    );
  }
}
