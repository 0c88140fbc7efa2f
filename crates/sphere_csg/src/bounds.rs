//! Bounding volumes: min/max boxes and the cubic evaluation region.

use glam::DVec3;

use crate::error::CsgError;
use crate::types::{validate_spheres, Sphere};

/// Double-precision axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DAabb3 {
	/// Minimum corner (inclusive).
	pub min: DVec3,
	/// Maximum corner (inclusive).
	pub max: DVec3,
}

impl DAabb3 {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: DVec3, max: DVec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create a new AABB from center and half-extents.
	pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
		Self {
			min: center - half_extents,
			max: center + half_extents,
		}
	}

	/// Tight box around a sphere.
	pub fn from_sphere(sphere: &Sphere) -> Self {
		Self::from_center_half_extents(sphere.center, DVec3::splat(sphere.radius))
	}

	/// Grow to contain another box.
	#[inline]
	pub fn encapsulate(&mut self, other: &DAabb3) {
		self.min = self.min.min(other.min);
		self.max = self.max.max(other.max);
	}

	/// Check if this AABB overlaps with another.
	///
	/// Two AABBs overlap if they share any interior or boundary points.
	#[inline]
	pub fn overlaps(&self, other: &DAabb3) -> bool {
		self.min.x <= other.max.x
			&& self.max.x >= other.min.x
			&& self.min.y <= other.max.y
			&& self.max.y >= other.min.y
			&& self.min.z <= other.max.z
			&& self.max.z >= other.min.z
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}
}

/// Cubic evaluation region (center + full edge length).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCube {
	pub center: DVec3,
	/// Full edge length.
	pub size: f64,
}

impl BoundingCube {
	pub fn new(center: DVec3, size: f64) -> Self {
		Self { center, size }
	}

	/// Reject non-finite centers and non-positive sizes.
	pub fn validate(&self) -> Result<(), CsgError> {
		if !self.center.is_finite() {
			return Err(CsgError::NonFiniteBounds);
		}
		if !self.size.is_finite() || self.size <= 0.0 {
			return Err(CsgError::InvalidBoundingSize(self.size));
		}
		Ok(())
	}

	/// Min/max box covered by the cube.
	pub fn aabb(&self) -> DAabb3 {
		DAabb3::from_center_half_extents(self.center, DVec3::splat(self.size * 0.5))
	}
}

/// Axis-wise extrema of `center ± radius` over all spheres.
pub fn sphere_set_aabb(spheres: &[Sphere]) -> Result<DAabb3, CsgError> {
	validate_spheres(spheres)?;
	let mut aabb = DAabb3::from_sphere(&spheres[0]);
	for sphere in &spheres[1..] {
		aabb.encapsulate(&DAabb3::from_sphere(sphere));
	}
	Ok(aabb)
}

/// Smallest cube centered on the sphere-set box that covers its longest axis.
///
/// `center = (min + max) / 2`, `size = max(extent.x, extent.y, extent.z)`.
pub fn bounding_cube(spheres: &[Sphere]) -> Result<BoundingCube, CsgError> {
	let aabb = sphere_set_aabb(spheres)?;
	let cube = BoundingCube::new(aabb.center(), aabb.size().max_element());
	cube.validate()?;
	Ok(cube)
}
