//! Strongly-typed domain types for safer APIs.
//!
//! Newtypes and named-field structs that keep block ids, lattice coordinates,
//! per-axis values and domain bounds from being mixed up.
//!
//! # Example
//!
//! ```
//! use blockgrid::types::{Axis, BlockCoord, BlockLattice, Interval, PerAxis};
//!
//! let domain = PerAxis::new(
//!     Interval::new(0.0, 2.0).unwrap(),
//!     Interval::new(0.0, 1.0).unwrap(),
//!     Interval::new(-1.0, 1.0).unwrap(),
//! );
//! assert_eq!(domain[Axis::Z].extent(), 2.0);
//!
//! let lattice = BlockLattice::new(4, 2, 2);
//! assert_eq!(lattice.linear_index(BlockCoord::new(1, 1, 0)), 5);
//! ```

mod axis;
mod bounds;
mod indices;
mod resolution;

pub use axis::{Axis, PerAxis};
pub use bounds::Interval;
pub use indices::{BlockCoord, BlockId, PayloadHandle};
pub use resolution::BlockLattice;
