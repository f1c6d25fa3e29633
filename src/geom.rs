// Copyright 2025 Lars Brubaker
// License: MIT
//
// Points, polygons and the segment intersection primitive.
//
// All arithmetic is plain IEEE double precision. Nothing here snaps, rounds or
// applies an epsilon; callers decide what counts as a usable crossing.

pub type Real = f64;

/// A point in the plane. Value type, no identity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Real, Real)> for Point {
    fn from((x, y): (Real, Real)) -> Self {
        Point { x, y }
    }
}

impl From<[Real; 2]> for Point {
    fn from([x, y]: [Real; 2]) -> Self {
        Point { x, y }
    }
}

/// An implicitly closed vertex loop. Point order defines edge direction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Polygon { points }
    }

    /// Build from a flat `[x0, y0, x1, y1, ...]` array. A trailing odd value is ignored.
    pub fn from_flat(coords: &[Real]) -> Self {
        Polygon {
            points: coords
                .chunks_exact(2)
                .map(|c| Point::new(c[0], c[1]))
                .collect(),
        }
    }

    pub fn to_flat(&self) -> Vec<Real> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> Real {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        twice / 2.0
    }

    #[inline]
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon { points }
    }
}

impl<P: Into<Point>> FromIterator<P> for Polygon {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Polygon {
            points: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parametric intersection of two segments `a0→a1` and `b0→b1`.
///
/// `along_a` and `along_b` locate `point` on each segment as a fraction of its
/// length. When the segments are parallel or collinear `cross` is exactly zero
/// and every other field is zero; such a result is never proper.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Intersection {
    pub cross: Real,
    pub along_a: Real,
    pub along_b: Real,
    pub point: Point,
}

impl Intersection {
    /// True when the crossing lies strictly inside both segments.
    ///
    /// Endpoint touches and collinear overlaps are excluded. That is a known
    /// limitation of the clipper, not something to patch here.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.cross != 0.0
            && self.along_a > 0.0
            && self.along_a < 1.0
            && self.along_b > 0.0
            && self.along_b < 1.0
    }
}

/// Intersect the infinite lines through `a0→a1` and `b0→b1`.
pub fn segment_intersect(a0: Point, a1: Point, b0: Point, b1: Point) -> Intersection {
    let ad_x = a1.x - a0.x;
    let ad_y = a1.y - a0.y;
    let bd_x = b1.x - b0.x;
    let bd_y = b1.y - b0.y;

    let cross = ad_x * bd_y - ad_y * bd_x;
    if cross == 0.0 {
        return Intersection::default();
    }

    let dx = a0.x - b0.x;
    let dy = a0.y - b0.y;
    let along_a = (bd_x * dy - bd_y * dx) / cross;
    let along_b = (ad_x * dy - ad_y * dx) / cross;

    Intersection {
        cross,
        along_a,
        along_b,
        point: Point::new(a0.x + along_a * ad_x, a0.y + along_a * ad_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn crossing_diagonals() {
        let i = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        );
        assert!(i.is_proper());
        assert_relative_eq!(i.along_a, 0.5);
        assert_relative_eq!(i.along_b, 0.5);
        assert_relative_eq!(i.point.x, 1.0);
        assert_relative_eq!(i.point.y, 1.0);
    }

    #[test]
    fn parameters_are_per_segment() {
        // a: vertical x=2 from y=0 to y=4, b: horizontal y=1 from x=0 to x=8
        let i = segment_intersect(
            Point::new(2.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 1.0),
            Point::new(8.0, 1.0),
        );
        assert!(i.is_proper());
        assert_relative_eq!(i.along_a, 0.25);
        assert_relative_eq!(i.along_b, 0.25);
        assert_relative_eq!(i.point.x, 2.0);
        assert_relative_eq!(i.point.y, 1.0);
    }

    #[test]
    fn swapped_arguments_agree_on_point() {
        let a0 = Point::new(0.3, -1.2);
        let a1 = Point::new(4.1, 2.7);
        let b0 = Point::new(-0.5, 3.3);
        let b1 = Point::new(3.9, -0.4);
        let ab = segment_intersect(a0, a1, b0, b1);
        let ba = segment_intersect(b0, b1, a0, a1);
        assert!(ab.is_proper() && ba.is_proper());
        assert_relative_eq!(ab.point.x, ba.point.x, epsilon = 1e-12);
        assert_relative_eq!(ab.point.y, ba.point.y, epsilon = 1e-12);
        assert_relative_eq!(ab.along_a, ba.along_b, epsilon = 1e-12);
        assert_relative_eq!(ab.along_b, ba.along_a, epsilon = 1e-12);
    }

    #[test]
    fn parallel_is_sentinel() {
        let i = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        );
        assert_eq!(i, Intersection::default());
        assert!(!i.is_proper());
    }

    #[test]
    fn collinear_overlap_is_not_proper() {
        let i = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
        );
        assert_eq!(i.cross, 0.0);
        assert!(!i.is_proper());
    }

    #[test]
    fn endpoint_touch_is_not_proper() {
        // T-junction: b starts exactly on a.
        let i = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        );
        assert_relative_eq!(i.along_b, 0.0);
        assert!(!i.is_proper());
    }

    #[test]
    fn beyond_segment_is_not_proper() {
        let i = segment_intersect(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, -1.0),
            Point::new(3.0, 1.0),
        );
        assert!(i.cross != 0.0);
        assert_relative_eq!(i.along_a, 3.0);
        assert!(!i.is_proper());
    }

    #[test]
    fn polygon_area_and_flat_round() {
        let p = Polygon::from_flat(&[0.0, 0.0, 2.0, 0.0, 2.0, 3.0, 0.0, 3.0]);
        assert_eq!(p.len(), 4);
        assert_relative_eq!(p.signed_area(), 6.0);
        assert_eq!(p.to_flat(), vec![0.0, 0.0, 2.0, 0.0, 2.0, 3.0, 0.0, 3.0]);

        let cw: Polygon = p.points.iter().rev().copied().collect();
        assert_relative_eq!(cw.signed_area(), -6.0);
        assert_relative_eq!(cw.area(), 6.0);
    }

    #[test]
    fn from_flat_ignores_trailing_value() {
        let p = Polygon::from_flat(&[1.0, 2.0, 3.0]);
        assert_eq!(p.points, vec![Point::new(1.0, 2.0)]);
    }
}
