//! Octree evaluation benchmarks.
//!
//! - **build**: construction + classification + collapse per depth
//! - **parallel**: rayon fan-out vs sequential on the same tree
//! - **voxel_grid**: flat sampling at the matching finest resolution
//!
//! Scenarios:
//! - **blob**: two overlapping spheres (one smooth surface)
//! - **cluster**: 32 random spheres (many small surfaces)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sphere_csg::{
  bounding_cube, evaluate_in, sample_grid, BoundingCube, CsgOp, Octree, OctreeConfig, Sphere,
};

// =============================================================================
// Scenarios
// =============================================================================

fn blob() -> Vec<Sphere> {
  vec![
    Sphere::new(DVec3::new(-0.5, 0.0, 0.0), 1.0),
    Sphere::new(DVec3::new(0.5, 0.2, 0.0), 0.9),
  ]
}

fn cluster(seed: u64) -> Vec<Sphere> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..32)
    .map(|_| {
      let center = DVec3::new(
        rng.random_range(-2.0..2.0),
        rng.random_range(-2.0..2.0),
        rng.random_range(-2.0..2.0),
      );
      Sphere::new(center, rng.random_range(0.2..0.8))
    })
    .collect()
}

fn bounds_of(spheres: &[Sphere]) -> BoundingCube {
  bounding_cube(spheres).unwrap()
}

// =============================================================================
// Octree
// =============================================================================

fn bench_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("octree/build");

  for (name, spheres) in [("blob", blob()), ("cluster", cluster(7))] {
    let bounds = bounds_of(&spheres);
    for depth in [3, 5, 7] {
      for op in [CsgOp::Union, CsgOp::Intersection] {
        let config = OctreeConfig::default().with_max_depth(depth).with_op(op);
        group.bench_with_input(
          BenchmarkId::new(format!("{name}/{op:?}"), depth),
          &depth,
          |b, _| b.iter(|| black_box(evaluate_in(&spheres, bounds, &config).unwrap())),
        );
      }
    }
  }

  group.finish();
}

/// Build only, on a preallocated tree per iteration.
fn bench_parallel(c: &mut Criterion) {
  let mut group = c.benchmark_group("octree/parallel");
  let spheres = cluster(11);
  let bounds = bounds_of(&spheres);

  for parallel in [false, true] {
    let config = OctreeConfig::default()
      .with_max_depth(6)
      .with_parallel(parallel);
    let label = if parallel { "rayon" } else { "sequential" };
    group.bench_function(label, |b| {
      b.iter_batched(
        || Octree::with_config(bounds, config).unwrap(),
        |mut tree| black_box(tree.build(&spheres).unwrap()),
        criterion::BatchSize::LargeInput,
      )
    });
  }

  group.finish();
}

// =============================================================================
// Voxel grid
// =============================================================================

fn bench_voxel_grid(c: &mut Criterion) {
  let mut group = c.benchmark_group("voxel_grid/sample");
  let spheres = cluster(7);
  let bounds = bounds_of(&spheres);

  // 2^depth voxels per axis, the octree's finest resolution.
  for depth in [3u32, 5, 7] {
    let resolution = 1usize << depth;
    group.bench_with_input(
      BenchmarkId::new("cluster/Union", resolution),
      &resolution,
      |b, &resolution| {
        b.iter(|| black_box(sample_grid(&spheres, CsgOp::Union, bounds, resolution).unwrap()))
      },
    );
  }

  group.finish();
}

criterion_group!(octree, bench_build, bench_parallel);

criterion_group!(grid, bench_voxel_grid);

criterion_main!(octree, grid);
