//! Benchmarks for axis mesh initialisation.
//!
//! Run with: `cargo bench --bench axis_mesh_bench`

use blockgrid::GridConfig;
use blockgrid::axis::{
    AxisLayout, ClusteredDensity, DensityDistribution, GhostCells, UniformDensity,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark `AxisLayout::init` for both distributions.
fn bench_axis_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_init");
    let clustered = ClusteredDensity::new(2.0, 0.2);

    for n_blocks in [16usize, 128, 1024] {
        for (name, density) in [
            ("uniform", &UniformDensity as &dyn DensityDistribution),
            ("clustered", &clustered),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n_blocks), &n_blocks, |b, &n| {
                b.iter(|| {
                    AxisLayout::from_bounds(0.0, 1.0, black_box(n), 16)
                        .unwrap()
                        .init(density, GhostCells::symmetric(3))
                        .unwrap()
                });
            });
        }
    }

    group.finish();
}

/// Benchmark building the metadata of a whole lattice.
fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");

    for blocks in [4usize, 8, 16] {
        let config = GridConfig::cube(blocks, 16);
        group.bench_with_input(BenchmarkId::new("sequential", blocks), &config, |b, config| {
            b.iter(|| config.build().unwrap());
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", blocks), &config, |b, config| {
            b.iter(|| config.build_parallel().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_axis_init, bench_grid_build);
criterion_main!(benches);
