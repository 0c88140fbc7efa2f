//! Core data types shared by the classifier, the octree and the voxel grid.

use glam::DVec3;

use crate::classify;
use crate::error::CsgError;

/// Solid sphere, one operand of the CSG combination.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
  /// Center in world space.
  pub center: DVec3,
  /// Radius in world units (>= 0).
  pub radius: f64,
}

impl Sphere {
  pub fn new(center: DVec3, radius: f64) -> Self {
    Self { center, radius }
  }

  /// Sphere centered at the origin.
  pub fn at_origin(radius: f64) -> Self {
    Self::new(DVec3::ZERO, radius)
  }

  /// Check that the center and radius are usable for classification.
  #[inline]
  pub fn is_valid(&self) -> bool {
    self.center.is_finite() && self.radius.is_finite() && self.radius >= 0.0
  }

  /// Analytic volume, `4/3 * pi * r^3`.
  pub fn volume(&self) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
  }
}

/// Axis-aligned filled cube emitted by the evaluators.
///
/// Consumers instantiate a unit cube scaled to `size` at `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
  /// Center in world space.
  pub center: DVec3,
  /// Full edge length.
  pub size: f64,
}

impl Cube {
  pub fn new(center: DVec3, size: f64) -> Self {
    Self { center, size }
  }

  #[inline]
  pub fn half_size(&self) -> f64 {
    self.size * 0.5
  }

  /// Minimum corner.
  #[inline]
  pub fn min(&self) -> DVec3 {
    self.center - DVec3::splat(self.half_size())
  }

  /// Maximum corner.
  #[inline]
  pub fn max(&self) -> DVec3 {
    self.center + DVec3::splat(self.half_size())
  }

  #[inline]
  pub fn volume(&self) -> f64 {
    self.size * self.size * self.size
  }

  /// Classify this cube against a sphere.
  pub fn relation_to(&self, sphere: &Sphere) -> Relation {
    classify::classify(self.center, self.half_size(), sphere)
  }
}

/// Boolean operator applied to the sphere set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CsgOp {
  /// Solid where any sphere is solid.
  #[default]
  Union,
  /// Solid where every sphere is solid.
  Intersection,
}

/// Spatial relation between a cube and a sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
  /// No point of the cube lies in the sphere.
  Outside,
  /// The whole cube lies in the sphere.
  Inside,
  /// The sphere boundary passes through the cube.
  Partial,
}

/// Reject empty sets and spheres with non-finite or negative parameters.
pub fn validate_spheres(spheres: &[Sphere]) -> Result<(), CsgError> {
  if spheres.is_empty() {
    return Err(CsgError::EmptySphereSet);
  }
  for (index, sphere) in spheres.iter().enumerate() {
    if !sphere.center.is_finite() {
      return Err(CsgError::NonFiniteCenter { index });
    }
    if !sphere.radius.is_finite() || sphere.radius < 0.0 {
      return Err(CsgError::InvalidRadius {
        index,
        radius: sphere.radius,
      });
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
