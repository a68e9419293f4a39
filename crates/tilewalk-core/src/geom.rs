//! Board geometry: [`Point`] and grid distances.

/// A 2D integer board coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy), or `None` if it would leave the
    /// `i32` plane.
    #[inline]
    pub fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The cardinal neighbours (up, right, down, left) that exist on the
    /// `i32` plane.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Point> {
        const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        DIRS.into_iter().filter_map(move |(dx, dy)| self.checked_shift(dx, dy))
    }
}

/// Manhattan (L1) distance between two points.
///
/// Computed in `u64`, so it is exact for any pair of `i32` points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}
