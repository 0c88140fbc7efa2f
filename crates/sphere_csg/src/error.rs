//! Error taxonomy for evaluation requests.

use thiserror::Error;

/// Errors reported before any tree or grid is allocated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CsgError {
  #[error("sphere set is empty")]
  EmptySphereSet,

  #[error("sphere {index} has invalid radius {radius}")]
  InvalidRadius { index: usize, radius: f64 },

  #[error("sphere {index} has a non-finite center")]
  NonFiniteCenter { index: usize },

  #[error("max depth must be >= 0, got {0}")]
  NegativeDepth(i32),

  #[error("bounding size must be finite and > 0, got {0}")]
  InvalidBoundingSize(f64),

  #[error("bounding center is not finite")]
  NonFiniteBounds,

  #[error("grid resolution must be > 0, got {0}")]
  InvalidResolution(usize),

  #[error("evaluation needs {required} cells, budget allows {limit}")]
  ResourceExhaustion { required: u64, limit: u64 },
}

impl CsgError {
  /// Malformed request (as opposed to a well-formed one that is too large).
  pub fn is_invalid_input(&self) -> bool {
    !self.is_resource_exhaustion()
  }

  pub fn is_resource_exhaustion(&self) -> bool {
    matches!(self, CsgError::ResourceExhaustion { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_categories() {
    assert!(CsgError::EmptySphereSet.is_invalid_input());
    assert!(CsgError::NegativeDepth(-1).is_invalid_input());
    assert!(CsgError::InvalidResolution(0).is_invalid_input());

    let err = CsgError::ResourceExhaustion {
      required: 585,
      limit: 100,
    };
    assert!(err.is_resource_exhaustion());
    assert!(!err.is_invalid_input());
  }

  #[test]
  fn test_messages() {
    assert_eq!(
      CsgError::InvalidRadius {
        index: 2,
        radius: -1.0
      }
      .to_string(),
      "sphere 2 has invalid radius -1"
    );
    assert_eq!(
      CsgError::ResourceExhaustion {
        required: 585,
        limit: 100
      }
      .to_string(),
      "evaluation needs 585 cells, budget allows 100"
    );
  }
}
