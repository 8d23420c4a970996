#![forbid(unsafe_code)]

//! Geometric primitives.

/// A 2D point in screen-space coordinates.
///
/// Follows the screen convention: x grows rightward, y grows downward, and
/// angles measured from the positive x-axis increase clockwise. With this
/// convention `-PI/2` points straight up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (down is positive).
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` and `angle` (radians) from `self`.
    ///
    /// This is the circle parametric equation: `self + radius * (cos angle,
    /// sin angle)`. In screen space, `angle = -PI/2` lands directly above
    /// `self`.
    #[inline]
    pub fn polar_offset(self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }

    #[test]
    fn polar_offset_along_positive_x() {
        let p = Point::ORIGIN.polar_offset(10.0, 0.0);
        assert!((p.x - 10.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn polar_offset_up_is_negative_y() {
        let p = Point::ORIGIN.polar_offset(10.0, -std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < EPS);
    }

    #[test]
    fn polar_offset_is_relative_to_self() {
        let center = Point::new(3.0, -4.0);
        let p = center.polar_offset(5.0, 0.0);
        assert!((p.x - 8.0).abs() < EPS);
        assert!((p.y + 4.0).abs() < EPS);
    }

    #[test]
    fn distance_matches_pythagoras() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn polar_offset_stays_on_circle() {
        let center = Point::new(100.0, 200.0);
        for i in 0..16 {
            let angle = i as f64 * std::f64::consts::TAU / 16.0;
            let p = center.polar_offset(130.0, angle);
            assert!((p.distance(center) - 130.0).abs() < 1e-9);
        }
    }
}
