//! Ghost-cell counts and widths for stencil halos.

use std::fmt;

/// Number of ghost cells on each side of an axis.
///
/// A symmetric 6-point stencil needs three ghosts on either side:
///
/// ```
/// use blockgrid::axis::GhostCells;
///
/// let ghosts = GhostCells::symmetric(3);
/// assert_eq!(ghosts.total(), 6);
/// assert!(GhostCells::NONE.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostCells {
    /// Ghosts before the domain start
    pub start: usize,
    /// Ghosts past the domain end
    pub end: usize,
}

impl GhostCells {
    /// No ghost cells.
    pub const NONE: Self = Self { start: 0, end: 0 };

    /// Create ghost counts for both sides.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Same ghost count on both sides.
    #[inline]
    pub const fn symmetric(n: usize) -> Self {
        Self { start: n, end: n }
    }

    /// Ghosts on both sides together.
    #[inline]
    pub const fn total(&self) -> usize {
        self.start + self.end
    }

    /// True when no ghosts are requested.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for GhostCells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.start, self.end)
    }
}

/// Ghost widths computed alongside an axis mesh.
///
/// Ghost widths extend the density profile past the domain. They are not
/// part of the interior and do not add up to any particular length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GhostWidths {
    /// `start` ghosts followed by `end` ghosts, nearest-to-domain last on the
    /// start side and first on the end side.
    widths: Vec<f64>,
    n_start: usize,
}

impl GhostWidths {
    /// Wrap a buffer laid out as `[start ghosts..., end ghosts...]`.
    pub(crate) fn from_buffer(widths: Vec<f64>, ghosts: GhostCells) -> Self {
        debug_assert_eq!(widths.len(), ghosts.total());
        Self {
            widths,
            n_start: ghosts.start,
        }
    }

    /// Ghost widths before the domain start, outermost first.
    #[inline]
    pub fn start(&self) -> &[f64] {
        &self.widths[..self.n_start]
    }

    /// Ghost widths past the domain end, innermost first.
    #[inline]
    pub fn end(&self) -> &[f64] {
        &self.widths[self.n_start..]
    }

    /// All ghost widths, start side first.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.widths
    }

    /// Ghost counts these widths were computed for.
    #[inline]
    pub fn counts(&self) -> GhostCells {
        GhostCells::new(self.n_start, self.widths.len() - self.n_start)
    }

    /// True when no ghosts were requested.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let g = GhostCells::new(2, 1);
        assert_eq!(g.total(), 3);
        assert!(!g.is_empty());
        assert_eq!(format!("{}", g), "2+1");
    }

    #[test]
    fn test_widths_split() {
        let w = GhostWidths::from_buffer(vec![1.0, 2.0, 3.0], GhostCells::new(2, 1));
        assert_eq!(w.start(), &[1.0, 2.0]);
        assert_eq!(w.end(), &[3.0]);
        assert_eq!(w.counts(), GhostCells::new(2, 1));
    }

    #[test]
    fn test_empty_widths() {
        let w = GhostWidths::default();
        assert!(w.is_empty());
        assert!(w.start().is_empty());
        assert!(w.end().is_empty());
    }
}
