// src/geometry.rs

use glam::DVec2;

/// 2D point in canvas space (x right, y down).
pub type Point2 = DVec2;

/// Unit vector pointing at `angle` radians.
pub fn from_polar(angle: f64) -> Point2 {
    DVec2::from_angle(angle)
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Returns `None` for an empty slice.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { min: *first, max: *first };
        for p in rest {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    pub fn size(&self) -> Point2 {
        self.max - self.min
    }

    pub fn center(&self) -> Point2 {
        (self.min + self.max) * 0.5
    }
}

/// Uniform scale factor that fits a box of `content` size into `surface`
/// while preserving aspect ratio.
///
/// A surface that is relatively taller than the content is filled along its
/// width, otherwise along its height. The comparison is cross-multiplied so
/// degenerate (flat) content never divides by zero.
pub fn fit_factor(content: Point2, surface: Point2) -> f64 {
    if surface.y * content.x > content.y * surface.x {
        surface.x / content.x
    } else {
        surface.y / content.y
    }
}

/// Offset that centres a `content` box, already scaled by `factor`, inside
/// `surface`. Added to every scaled point.
pub fn centering_offset(bounds: &Bounds, factor: f64, surface: Point2) -> Point2 {
    let margin = (surface - bounds.size() * factor) * 0.5;
    margin - bounds.min * factor
}

/// Linear interpolation written so that `t == 0` returns `from` and `t == 1`
/// returns `to` bit-for-bit.
#[inline(always)]
pub fn lerp_exact(from: Point2, to: Point2, t: f64) -> Point2 {
    from * (1.0 - t) + to * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_unit_vectors() {
        let p = from_polar(std::f64::consts::PI);
        assert!((p.x + 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!((from_polar(1.234).length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_of_points() {
        let pts = [Point2::new(1.0, -2.0), Point2::new(-3.0, 4.0), Point2::new(0.5, 0.5)];
        let b = Bounds::of(&pts).unwrap();
        assert_eq!(b.min, Point2::new(-3.0, -2.0));
        assert_eq!(b.max, Point2::new(1.0, 4.0));
        assert_eq!(b.size(), Point2::new(4.0, 6.0));
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn fit_factor_picks_limiting_axis() {
        // wide content on a square surface is limited by width
        assert_eq!(fit_factor(Point2::new(2.0, 1.0), Point2::new(100.0, 100.0)), 50.0);
        // tall content on a square surface is limited by height
        assert_eq!(fit_factor(Point2::new(1.0, 4.0), Point2::new(100.0, 100.0)), 25.0);
        // flat content never divides by zero
        assert_eq!(fit_factor(Point2::new(1.0, 0.0), Point2::new(80.0, 60.0)), 80.0);
    }

    #[test]
    fn lerp_exact_endpoints() {
        let a = Point2::new(0.1, 0.7);
        let b = Point2::new(913.3, 17.9);
        assert_eq!(lerp_exact(a, b, 0.0), a);
        assert_eq!(lerp_exact(a, b, 1.0), b);
        assert_eq!(lerp_exact(a, b, 0.5), (a + b) * 0.5);
    }
}
