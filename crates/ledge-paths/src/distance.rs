use ledge_core::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(chebyshev(b, a), 3);
        assert_eq!(chebyshev(a, Point::new(2, 2)), 1);
        assert_eq!(chebyshev(a, a), 0);
    }
}
