//! Distance estimates between cell coordinates.

use gridstar_core::Point;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// The estimate of remaining distance to the end cell.
///
/// Manhattan is the default; it is admissible and consistent for
/// 4-directional unit-cost movement, which is what the optimality
/// guarantee rests on. Euclidean is offered as an alternative.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// |Δrow| + |Δcol|.
    #[default]
    Manhattan,
    /// Straight-line distance.
    Euclidean,
}

impl Heuristic {
    /// Non-negative estimate of the remaining distance from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(a, b) as f64,
            Self::Euclidean => euclidean(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 2)), 3);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn euclidean_distance() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(1, 1), Point::new(1, 1)), 0.0);
    }

    #[test]
    fn default_is_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 5.0);
        assert!(Heuristic::Euclidean.estimate(a, b) < 5.0);
    }
}
