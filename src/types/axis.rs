//! Spatial axis tags and per-axis triples with named fields.
//!
//! Replaces `[x, y, z]` arrays where the index convention would otherwise
//! have to be remembered at every call site.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A spatial axis of the block lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// First axis (x)
    X,
    /// Second axis (y)
    Y,
    /// Third axis (z)
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Storage position of the axis (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis for a storage position, `None` past the third axis.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// One value per spatial axis.
///
/// # Example
///
/// ```
/// use blockgrid::types::{Axis, PerAxis};
///
/// let blocks = PerAxis::new(8, 4, 2);
/// assert_eq!(blocks[Axis::Y], 4);
/// assert_eq!(blocks.map(|n| n * 16).z, 32);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerAxis<T> {
    /// Value along x
    pub x: T,
    /// Value along y
    pub y: T,
    /// Value along z
    pub z: T,
}

impl<T> PerAxis<T> {
    /// Create from explicit per-axis values.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value.clone(),
            z: value,
        }
    }

    /// Map a function over all axes.
    pub fn map<U, F>(self, mut f: F) -> PerAxis<U>
    where
        F: FnMut(T) -> U,
    {
        PerAxis {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Map a function over all axes, passing the axis tag along.
    pub fn map_with_axis<U, F>(self, mut f: F) -> PerAxis<U>
    where
        F: FnMut(Axis, T) -> U,
    {
        PerAxis {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
            z: f(Axis::Z, self.z),
        }
    }

    /// Borrow every component.
    pub fn each_ref(&self) -> PerAxis<&T> {
        PerAxis {
            x: &self.x,
            y: &self.y,
            z: &self.z,
        }
    }

    /// Apply a fallible function on every axis, stopping at the first error.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<PerAxis<U>, E>
    where
        F: FnMut(Axis, T) -> Result<U, E>,
    {
        Ok(PerAxis {
            x: f(Axis::X, self.x)?,
            y: f(Axis::Y, self.y)?,
            z: f(Axis::Z, self.z)?,
        })
    }

    /// Convert to array `[x, y, z]`.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterate over values in order x, y, z.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.x, &self.y, &self.z].into_iter()
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl<T: fmt::Display> fmt::Display for PerAxis<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> From<[T; 3]> for PerAxis<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<PerAxis<T>> for [T; 3] {
    fn from(values: PerAxis<T>) -> Self {
        values.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }

    #[test]
    fn test_indexing() {
        let mut v = PerAxis::new(1, 2, 3);
        assert_eq!(v[Axis::X], 1);
        assert_eq!(v[Axis::Z], 3);
        v[Axis::Y] = 20;
        assert_eq!(v.y, 20);
    }

    #[test]
    fn test_map_with_axis() {
        let v = PerAxis::splat(10).map_with_axis(|axis, n| n + axis.index());
        assert_eq!(v.to_array(), [10, 11, 12]);
    }

    #[test]
    fn test_try_map_stops_at_error() {
        let v = PerAxis::new(1, -1, 2);
        let result: Result<PerAxis<u32>, Axis> =
            v.try_map(|axis, n| u32::try_from(n).map_err(|_| axis));
        assert_eq!(result, Err(Axis::Y));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PerAxis::new(1, 2, 3)), "(1, 2, 3)");
        assert_eq!(format!("{}", Axis::Z), "z");
    }
}
