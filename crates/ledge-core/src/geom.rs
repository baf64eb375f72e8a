//! Integer geometry: [`Point`] and [`Range`].
//!
//! Tile coordinates and world (pixel) coordinates both use [`Point`]. X grows
//! right, Y grows down, matching the tile map's row order.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point: a tile or a world pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point moved by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub const fn left(self) -> Self {
        self.shift(-1, 0)
    }

    #[inline]
    pub const fn right(self) -> Self {
        self.shift(1, 0)
    }

    /// One row up (towards y = 0).
    #[inline]
    pub const fn up(self) -> Self {
        self.shift(0, -1)
    }

    #[inline]
    pub const fn down(self) -> Self {
        self.shift(0, 1)
    }

    /// The eight surrounding points, in row-major order.
    pub fn neighbors_8(self) -> [Point; 8] {
        let mut out = [self; 8];
        let mut i = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    out[i] = self.shift(dx, dy);
                    i += 1;
                }
            }
        }
        out
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle of points: `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The rectangle spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `[0, width) × [0, height)`; negative sizes give an empty range.
    #[inline]
    pub fn of_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width.max(0), height.max(0))
    }

    /// The square of points within Chebyshev distance `radius` of `center`.
    /// Saturates at the `i32` limits.
    #[inline]
    pub fn around(center: Point, radius: i32) -> Self {
        let r = radius.max(0);
        Self::new(
            center.x.saturating_sub(r),
            center.y.saturating_sub(r),
            center.x.saturating_add(r).saturating_add(1),
            center.y.saturating_add(r).saturating_add(1),
        )
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of points.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Overlap of two ranges, or the empty default range.
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over the points.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let p = self
            .range
            .min
            .shift((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps() {
        let p = Point::new(3, 4);
        assert_eq!(p.left().right(), p);
        assert_eq!(p.up(), Point::new(3, 3));
        assert_eq!(p.down().down(), Point::new(3, 6));
        assert_eq!(p + Point::new(1, -1), Point::new(4, 3));
        assert_eq!(p - Point::new(3, 4), Point::ZERO);
        assert_eq!(p.to_string(), "(3, 4)");
    }

    #[test]
    fn eight_neighbours_surround_the_point() {
        let p = Point::new(5, 5);
        let ns = p.neighbors_8();
        assert_eq!(ns[0], Point::new(4, 4));
        assert_eq!(ns[7], Point::new(6, 6));
        assert!(!ns.contains(&p));
        assert_eq!(Range::around(p, 1).iter().filter(|q| ns.contains(q)).count(), 8);
    }

    #[test]
    fn contains_excludes_max() {
        let r = Range::of_size(4, 3);
        assert!(r.contains(Point::new(3, 2)));
        assert!(!r.contains(Point::new(4, 2)));
        assert!(!r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn empty_ranges() {
        for r in [Range::of_size(-2, 3), Range::of_size(3, 0), Range::default()] {
            assert!(r.is_empty());
            assert_eq!(r.len(), 0);
            assert_eq!(r.iter().next(), None);
        }
    }

    #[test]
    fn iterates_row_major_from_min() {
        let r = Range::new(4, 2, 2, 4);
        let pts: Vec<_> = r.into_iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(2, 2),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(3, 3)
            ]
        );
        let mut it = r.iter();
        it.next();
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn around_clipped_to_map() {
        let map = Range::of_size(10, 8);
        let ring = Range::around(Point::new(0, 7), 2).intersect(map);
        assert_eq!(ring, Range::new(0, 5, 3, 8));
        assert_eq!(ring.len(), 9);
        assert_eq!(Range::around(Point::ZERO, 0).len(), 1);
        assert!(Range::around(Point::new(20, 20), 1).intersect(map).is_empty());
    }

    #[test]
    fn around_saturates_at_limits() {
        let r = Range::around(Point::new(i32::MAX, i32::MIN), 3);
        assert_eq!(r.max.x, i32::MAX);
        assert_eq!(r.min.y, i32::MIN);
        assert!(r.intersect(Range::of_size(10, 10)).is_empty());
    }
}
