//! Exact cube/sphere classification.
//!
//! ```text
//!   Outside: nearest point of the cube is farther than r
//!   Inside:  all 8 corners are within r (sphere is convex)
//!   Partial: anything else
//! ```

use glam::DVec3;

use crate::types::{Relation, Sphere};

/// Corner offsets of a unit cube, indexed like octants (bit 0 = +X, bit 1 = +Y,
/// bit 2 = +Z).
pub const CORNER_SIGNS: [DVec3; 8] = [
  DVec3::new(-1.0, -1.0, -1.0),
  DVec3::new(1.0, -1.0, -1.0),
  DVec3::new(-1.0, 1.0, -1.0),
  DVec3::new(1.0, 1.0, -1.0),
  DVec3::new(-1.0, -1.0, 1.0),
  DVec3::new(1.0, -1.0, 1.0),
  DVec3::new(-1.0, 1.0, 1.0),
  DVec3::new(1.0, 1.0, 1.0),
];

/// Squared distance from `point` to the nearest point of the cube.
///
/// Zero when the point lies within the cube.
#[inline]
pub fn distance_squared_to_cube(point: DVec3, cell_center: DVec3, cell_half_size: f64) -> f64 {
  let min = cell_center - DVec3::splat(cell_half_size);
  let max = cell_center + DVec3::splat(cell_half_size);
  point.distance_squared(point.clamp(min, max))
}

/// Classify a cube (center + half-size) against a sphere.
#[inline]
pub fn classify(cell_center: DVec3, cell_half_size: f64, sphere: &Sphere) -> Relation {
  let r_sq = sphere.radius * sphere.radius;

  if distance_squared_to_cube(sphere.center, cell_center, cell_half_size) > r_sq {
    return Relation::Outside;
  }

  let all_corners_inside = CORNER_SIGNS.iter().all(|sign| {
    let corner = cell_center + *sign * cell_half_size;
    corner.distance_squared(sphere.center) <= r_sq
  });

  if all_corners_inside {
    Relation::Inside
  } else {
    Relation::Partial
  }
}

/// Point membership test (boundary counts as inside).
#[inline]
pub fn point_in_sphere(point: DVec3, sphere: &Sphere) -> bool {
  point.distance_squared(sphere.center) <= sphere.radius * sphere.radius
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
