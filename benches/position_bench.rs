//! Benchmarks for block position queries.
//!
//! Run with: `cargo bench --bench position_bench`
//!
//! Compares the closed-form path on uniform axes with the summation path on
//! stretched axes for growing block sizes.

use std::sync::Arc;

use blockgrid::axis::{AxisLayout, AxisMesh, ClusteredDensity, GhostCells};
use blockgrid::block::BlockMetadata;
use blockgrid::types::{BlockCoord, BlockId, PerAxis};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn block_on(mesh: AxisMesh) -> BlockMetadata {
    let meshes = PerAxis::splat(Arc::new(mesh));
    BlockMetadata::from_meshes(BlockId::new(0), BlockCoord::new(1, 1, 1), &meshes)
}

/// Benchmark a sweep over every cell of one block.
fn bench_block_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_sweep");

    for cells in [8usize, 16, 32] {
        let uniform = block_on(AxisMesh::uniform(0.0, 1.0, 4, cells).unwrap());
        let stretched = block_on(
            AxisLayout::from_bounds(0.0, 1.0, 4, cells)
                .unwrap()
                .init(&ClusteredDensity::default(), GhostCells::NONE)
                .unwrap(),
        );

        for (name, block) in [("uniform", &uniform), ("stretched", &stretched)] {
            group.bench_with_input(BenchmarkId::new(name, cells), &cells, |b, &n| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for iz in 0..n {
                        for iy in 0..n {
                            for ix in 0..n {
                                let p = black_box(block).position(ix, iy, iz);
                                acc += p[0] + p[1] + p[2];
                            }
                        }
                    }
                    acc
                });
            });
        }
    }

    group.finish();
}

/// Benchmark a single query at the last cell of a block.
fn bench_single_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_query");

    let uniform = block_on(AxisMesh::uniform(0.0, 1.0, 4, 32).unwrap());
    let stretched = block_on(
        AxisLayout::from_bounds(0.0, 1.0, 4, 32)
            .unwrap()
            .init(&ClusteredDensity::default(), GhostCells::NONE)
            .unwrap(),
    );

    group.bench_function("uniform", |b| {
        b.iter(|| uniform.position(black_box(31), black_box(31), black_box(31)));
    });
    group.bench_function("stretched", |b| {
        b.iter(|| stretched.position(black_box(31), black_box(31), black_box(31)));
    });

    group.finish();
}

criterion_group!(benches, bench_block_sweep, bench_single_query);
criterion_main!(benches);
