//! Geometry primitives: the [`Point`] cell coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer cell coordinate. `row` counts from the top, `col` from
/// the left, both in `[0, N)` for an N×N grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in fixed down, up, right, left
    /// order. Neighbour recomputation probes in this order, which in turn
    /// fixes the frontier insertion sequence.
    #[inline]
    pub const fn cardinal_neighbors(self) -> [Point; 4] {
        [
            Self::new(self.row + 1, self.col),
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row, self.col - 1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(1, -1), Point::new(2, 1));
    }

    #[test]
    fn cardinal_order_is_down_up_right_left() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.cardinal_neighbors(),
            [
                Point::new(6, 5),
                Point::new(4, 5),
                Point::new(5, 6),
                Point::new(5, 4),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(2, 3) < Point::new(2, 4));
    }
}
