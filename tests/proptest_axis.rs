//! Property-based tests for axis meshes and block positions.
//!
//! Run with: cargo test --test proptest_axis

use std::sync::Arc;

use blockgrid::axis::{
    AxisLayout, AxisMesh, ClusteredDensity, DensityKind, GhostCells, MASS_TOLERANCE,
};
use blockgrid::block::BlockMetadata;
use blockgrid::types::{BlockCoord, BlockId, PerAxis};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Domain `[start, start + extent)` over a range of magnitudes.
fn arb_domain() -> impl Strategy<Value = (f64, f64)> {
    (-100.0..100.0f64, 1e-3..1e3f64).prop_map(|(start, extent)| (start, start + extent))
}

fn arb_density() -> impl Strategy<Value = DensityKind> {
    prop_oneof![
        Just(DensityKind::Uniform),
        (0.05..5.0f64, 0.05..1.0f64).prop_map(|(a, b)| DensityKind::Clustered { a, b }),
    ]
}

fn arb_ghosts() -> impl Strategy<Value = GhostCells> {
    (0usize..4, 0usize..4).prop_map(|(start, end)| GhostCells::new(start, end))
}

fn arb_mesh() -> impl Strategy<Value = AxisMesh> {
    (arb_domain(), 1usize..12, 1usize..12, arb_density(), arb_ghosts()).prop_map(
        |((start, end), n_blocks, cells_per_block, density, ghosts)| {
            AxisLayout::from_bounds(start, end, n_blocks, cells_per_block)
                .unwrap()
                .init(density.build().as_ref(), ghosts)
                .unwrap()
        },
    )
}

// =============================================================================
// Axis mesh invariants
// =============================================================================

proptest! {
    /// Interior widths add up to the extent.
    #[test]
    fn widths_conserve_extent(mesh in arb_mesh()) {
        let total: f64 = mesh.cell_widths().iter().sum();
        prop_assert!((total - mesh.extent()).abs() <= MASS_TOLERANCE * mesh.extent());
    }

    /// Every width, ghosts included, is finite and positive.
    #[test]
    fn widths_are_positive(mesh in arb_mesh()) {
        for &w in mesh.cell_widths().iter().chain(mesh.ghost_widths().as_slice()) {
            prop_assert!(w.is_finite() && w > 0.0);
        }
    }

    /// Block widths are the sums of their spacing slices.
    #[test]
    fn block_widths_match_slices(mesh in arb_mesh()) {
        for k in 0..mesh.n_blocks() {
            let summed: f64 = mesh.spacing_slice(k).iter().sum();
            prop_assert_eq!(mesh.block_width(k), summed);
            prop_assert_eq!(mesh.spacing_slice(k).len(), mesh.cells_per_block());
        }
    }

    /// Origins start at the domain start and advance by block widths.
    #[test]
    fn origins_are_prefix_sums(mesh in arb_mesh()) {
        prop_assert_eq!(mesh.block_origin(0), mesh.start());
        for k in 1..mesh.n_blocks() {
            prop_assert_eq!(
                mesh.block_origin(k),
                mesh.block_origin(k - 1) + mesh.block_width(k - 1)
            );
            prop_assert!(mesh.block_origin(k) > mesh.block_origin(k - 1));
        }
    }

    /// A clustered profile with an even cell count and no ghosts is mirror-symmetric.
    #[test]
    fn clustered_is_symmetric(
        (start, end) in arb_domain(),
        half in 1usize..40,
        a in 0.05..5.0f64,
        b in 0.05..1.0f64,
    ) {
        let mesh = AxisLayout::from_bounds(start, end, 2, half)
            .unwrap()
            .init(&ClusteredDensity::new(a, b), GhostCells::NONE)
            .unwrap();
        let widths = mesh.cell_widths();
        let n = widths.len();
        for i in 0..n / 2 {
            let (left, right) = (widths[i], widths[n - 1 - i]);
            prop_assert!((left - right).abs() <= 1e-12 * left.max(right));
        }
    }

    /// Ghost counts never change uniform interior widths.
    #[test]
    fn uniform_ignores_ghosts(
        (start, end) in arb_domain(),
        n_blocks in 1usize..8,
        cells_per_block in 1usize..8,
        ghosts in arb_ghosts(),
    ) {
        let plain = AxisMesh::uniform(start, end, n_blocks, cells_per_block).unwrap();
        let halo = AxisLayout::from_bounds(start, end, n_blocks, cells_per_block)
            .unwrap()
            .init(&blockgrid::axis::UniformDensity, ghosts)
            .unwrap();
        prop_assert_eq!(plain.cell_widths(), halo.cell_widths());
    }

    /// Every point of the domain is located in the block whose span holds it.
    #[test]
    fn locate_block_agrees_with_origins(mesh in arb_mesh(), t in 0.0..1.0f64) {
        let x = mesh.start() + t * mesh.extent();
        if let Some(k) = mesh.locate_block(x) {
            prop_assert!(mesh.block_origin(k) <= x);
            prop_assert!(x < mesh.block_origins()[k + 1]);
        } else {
            prop_assert!(x >= mesh.block_origins()[mesh.n_blocks()]);
        }
    }
}

// =============================================================================
// Block position invariants
// =============================================================================

proptest! {
    /// Block positions equal the axis mesh cell centres bit for bit.
    #[test]
    fn positions_match_cell_centres(mesh in arb_mesh(), pick in 0usize..1000) {
        let mesh = Arc::new(mesh);
        let k = pick % mesh.n_blocks();
        let meshes = PerAxis::splat(Arc::clone(&mesh));
        let block = BlockMetadata::from_meshes(BlockId::new(0), BlockCoord::new(k, 0, 0), &meshes);

        for i in 0..mesh.cells_per_block() {
            let x = block.position(i, 0, 0)[0];
            let expected = mesh.cell_center(k * mesh.cells_per_block() + i);
            if mesh.is_uniform() {
                prop_assert!((x - expected).abs() <= 1e-12 * (1.0 + expected.abs()));
            } else {
                prop_assert_eq!(x, expected);
            }
            prop_assert!(x > block.origin()[0]);
            prop_assert!(x < block.upper()[0]);
        }
    }
}
