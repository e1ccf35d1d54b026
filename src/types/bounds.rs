//! 1D domain intervals.

use std::fmt;

use crate::error::{GridError, Result};

/// Half-open physical interval `[start, end)` along one axis.
///
/// # Example
///
/// ```
/// use blockgrid::types::Interval;
///
/// let domain = Interval::new(0.0, 2.5).unwrap();
/// assert_eq!(domain.extent(), 2.5);
/// assert!(domain.contains(0.0));
/// assert!(!domain.contains(2.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound (inclusive)
    pub start: f64,
    /// Upper bound (exclusive)
    pub end: f64,
}

impl Interval {
    /// Create a new interval.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidExtent`] unless both bounds are finite and
    /// `end > start`.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite() && end > start) {
            return Err(GridError::InvalidExtent { start, end });
        }
        Ok(Self { start, end })
    }

    /// The unit interval [0, 1).
    pub const fn unit() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }

    /// Interval length (end - start).
    #[inline]
    pub fn extent(&self) -> f64 {
        self.end - self.start
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Check if a coordinate lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x < self.end
    }

    /// Return bounds as tuple (start, end).
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = GridError;

    fn try_from((start, end): (f64, f64)) -> Result<Self> {
        Self::new(start, end)
    }
}
