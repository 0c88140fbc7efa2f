use super::*;

// =========================================================================
// OctreeConfig defaults and validation
// =========================================================================

#[test]
fn test_default_config() {
  let config = OctreeConfig::default();
  assert_eq!(config.max_depth, 5);
  assert_eq!(config.op, CsgOp::Union);
  assert_eq!(config.collapse, CollapsePolicy::Symmetric);
  assert_eq!(config.unresolved, UnresolvedPolicy::Empty);
  assert!(!config.parallel);
  assert!(config.validate().is_ok());
}

#[test]
fn test_builders() {
  let config = OctreeConfig::default()
    .with_max_depth(2)
    .with_op(CsgOp::Intersection)
    .with_collapse(CollapsePolicy::FilledOnly)
    .with_unresolved(UnresolvedPolicy::Filled)
    .with_parallel(true)
    .with_budget(NodeBudget::UNLIMITED);

  assert_eq!(config.max_depth, 2);
  assert_eq!(config.op, CsgOp::Intersection);
  assert_eq!(config.collapse, CollapsePolicy::FilledOnly);
  assert!(config.unresolved.filled());
  assert!(config.parallel);
  assert_eq!(config.budget, NodeBudget::UNLIMITED);
}

#[test]
fn test_negative_depth_rejected() {
  let config = OctreeConfig::default().with_max_depth(-1);
  assert_eq!(config.validate(), Err(CsgError::NegativeDepth(-1)));
  assert_eq!(config.full_node_count(), 0);
}

/// Depth 3 needs 585 nodes; a 100-node budget must refuse it.
#[test]
fn test_budget_rejects_deep_tree() {
  let config = OctreeConfig::default()
    .with_max_depth(3)
    .with_budget(NodeBudget { max_nodes: 100 });

  assert_eq!(config.full_node_count(), 585);
  let err = config.validate().unwrap_err();
  assert!(err.is_resource_exhaustion());
  assert_eq!(
    err,
    CsgError::ResourceExhaustion {
      required: 585,
      limit: 100
    }
  );
}

#[test]
fn test_default_budget_rejects_depth_8() {
  assert!(OctreeConfig::default().with_max_depth(7).validate().is_ok());
  assert!(OctreeConfig::default()
    .with_max_depth(8)
    .validate()
    .unwrap_err()
    .is_resource_exhaustion());
}

/// finest = root_size / 2^max_depth
#[test]
fn test_finest_cell_size() {
  let config = OctreeConfig::default().with_max_depth(3);
  assert_eq!(config.finest_cell_size(8.0), 1.0);
  assert_eq!(config.with_max_depth(0).finest_cell_size(8.0), 8.0);
}

#[test]
fn test_runs_parallel_threshold() {
  let config = OctreeConfig::default();
  assert!(!config.runs_parallel(10), "Sequential unless enabled");

  let config = config.with_parallel(true);
  assert!(config.runs_parallel(3));
  assert!(config.runs_parallel(4));
  assert!(!config.runs_parallel(2));
}

#[test]
fn test_unresolved_policy_values() {
  assert!(!UnresolvedPolicy::Empty.filled());
  assert!(UnresolvedPolicy::Filled.filled());
}
