//! Build pass: top-down classification with bottom-up collapse.
//!
//! Union and intersection share one recursion. Each operator is described by
//! a dual pair of predicates over the per-sphere relations:
//!
//! ```text
//!                 decisive (any sphere)     unanimous (every sphere)
//!   Union         Inside  -> filled         Outside -> empty
//!   Intersection  Outside -> empty          Inside  -> filled
//! ```
//!
//! A cell that matches neither is ambiguous: internal nodes recurse into
//! their children and then try to collapse, leaves at max depth take the
//! unresolved policy.

use rayon::prelude::*;

use super::budget::BuildStats;
use super::config::{CollapsePolicy, OctreeConfig};
use super::node::{NodeState, OctreeNode};
use super::Octree;
use crate::classify::classify;
use crate::error::CsgError;
use crate::types::{validate_spheres, CsgOp, Relation, Sphere};

/// Outcome of classifying one cell against the whole sphere set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
  Empty,
  Filled,
  Ambiguous,
}

/// Predicate pair for one operator.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Predicates {
  /// A single sphere with this relation settles the cell.
  decisive: Relation,
  decisive_verdict: Verdict,
  /// Every sphere must have this relation to settle the cell.
  unanimous: Relation,
  unanimous_verdict: Verdict,
}

impl Predicates {
  pub(crate) const fn for_op(op: CsgOp) -> Self {
    match op {
      CsgOp::Union => Self {
        decisive: Relation::Inside,
        decisive_verdict: Verdict::Filled,
        unanimous: Relation::Outside,
        unanimous_verdict: Verdict::Empty,
      },
      CsgOp::Intersection => Self {
        decisive: Relation::Outside,
        decisive_verdict: Verdict::Empty,
        unanimous: Relation::Inside,
        unanimous_verdict: Verdict::Filled,
      },
    }
  }

  /// Classify a cell against every sphere, stopping at the first decisive
  /// relation.
  pub(crate) fn resolve(
    &self,
    node: &OctreeNode,
    spheres: &[Sphere],
    stats: &mut BuildStats,
  ) -> Verdict {
    let mut unanimous = true;
    for sphere in spheres {
      stats.classifications += 1;
      let relation = classify(node.center(), node.half_size(), sphere);
      if relation == self.decisive {
        return self.decisive_verdict;
      }
      if relation != self.unanimous {
        unanimous = false;
      }
    }
    if unanimous {
      self.unanimous_verdict
    } else {
      Verdict::Ambiguous
    }
  }
}

/// Read-only state shared by every recursion step (and every rayon task).
struct BuildContext<'a> {
  spheres: &'a [Sphere],
  predicates: Predicates,
  config: &'a OctreeConfig,
}

impl Octree {
  /// Classify and collapse the tree against `spheres`.
  ///
  /// The sphere set is validated before the tree is touched. Calling `build`
  /// again with the same spheres leaves the tree unchanged.
  #[tracing::instrument(skip_all, name = "octree::build", fields(spheres = spheres.len(), op = ?self.config.op))]
  pub fn build(&mut self, spheres: &[Sphere]) -> Result<BuildStats, CsgError> {
    validate_spheres(spheres)?;

    let ctx = BuildContext {
      spheres,
      predicates: Predicates::for_op(self.config.op),
      config: &self.config,
    };
    let stats = build_node(&mut self.root, &ctx);

    tracing::debug!(
      visited = stats.nodes_visited,
      classifications = stats.classifications,
      resolved_filled = stats.resolved_filled,
      resolved_empty = stats.resolved_empty,
      unresolved = stats.unresolved,
      collapses = stats.collapses,
      "octree built"
    );
    Ok(stats)
  }
}

fn build_node(node: &mut OctreeNode, ctx: &BuildContext<'_>) -> BuildStats {
  let mut stats = BuildStats {
    nodes_visited: 1,
    ..Default::default()
  };

  match ctx.predicates.resolve(node, ctx.spheres, &mut stats) {
    Verdict::Filled => {
      node.state = NodeState::Leaf { filled: true };
      stats.resolved_filled += 1;
    }
    Verdict::Empty => {
      node.state = NodeState::Leaf { filled: false };
      stats.resolved_empty += 1;
    }
    Verdict::Ambiguous => {
      let depth = node.depth();
      let collapsed = match &mut node.state {
        NodeState::Internal(children) => {
          stats += build_children(children, depth, ctx);
          collapse_verdict(children, ctx.config.collapse)
        }
        // Max depth reached: nothing left to refine.
        NodeState::Leaf { filled } if depth == 0 => {
          *filled = ctx.config.unresolved.filled();
          stats.unresolved += 1;
          None
        }
        // Collapsed by an earlier build; its children agreed on `filled`.
        NodeState::Leaf { .. } => None,
      };

      if let Some(filled) = collapsed {
        node.state = NodeState::Leaf { filled };
        stats.collapses += 1;
      }
    }
  }

  stats
}

fn build_children(
  children: &mut [OctreeNode; 8],
  depth: i32,
  ctx: &BuildContext<'_>,
) -> BuildStats {
  if ctx.config.runs_parallel(depth) {
    children
      .as_mut_slice()
      .par_iter_mut()
      .map(|child| build_node(child, ctx))
      .reduce(BuildStats::default, |a, b| a + b)
  } else {
    children
      .iter_mut()
      .map(|child| build_node(child, ctx))
      .fold(BuildStats::default(), |a, b| a + b)
  }
}

/// Shared `filled` value if all 8 children are agreeing leaves that the
/// policy allows to merge.
fn collapse_verdict(children: &[OctreeNode; 8], policy: CollapsePolicy) -> Option<bool> {
  let first = children[0].filled()?;
  if policy == CollapsePolicy::FilledOnly && !first {
    return None;
  }
  children[1..]
    .iter()
    .all(|child| child.filled() == Some(first))
    .then_some(first)
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
