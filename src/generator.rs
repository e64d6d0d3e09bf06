// src/generator.rs

use std::f64::consts::PI;

use crate::error::{ChaosError, Result};
use crate::geometry::{centering_offset, fit_factor, from_polar, Bounds, Point2};

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Vertices of a regular `num_vertices`-gon scaled and centred to fit a
    /// `width` x `height` surface.
    ///
    /// The raw polygon is walked edge by edge: each vertex is the previous
    /// one plus a unit step, the first step pointing at `PI` and every next
    /// step turned by `2*PI / num_vertices`. The result is deterministic.
    pub fn generate(num_vertices: usize, width: f64, height: f64) -> Result<Vec<Point2>> {
        if num_vertices < 2 {
            return Err(ChaosError::TooFewVertices(num_vertices));
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChaosError::InvalidSurface { width, height });
        }

        let raw = Self::raw_polygon(num_vertices);
        // n >= 2 guarantees a non-empty set
        let bounds = Bounds::of(&raw).ok_or(ChaosError::EmptyVertexSet)?;

        let surface = Point2::new(width, height);
        let factor = fit_factor(bounds.size(), surface);
        let offset = centering_offset(&bounds, factor, surface);

        Ok(raw
            .into_iter()
            .map(|p| (p * factor + offset).clamp(Point2::ZERO, surface))
            .collect())
    }

    fn raw_polygon(num_vertices: usize) -> Vec<Point2> {
        let angle = PI * 2.0 / num_vertices as f64;
        let mut points = Vec::with_capacity(num_vertices);
        let mut last = Point2::ZERO;
        for i in 0..num_vertices {
            last += from_polar(PI + angle * i as f64);
            points.push(last);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn returns_n_points_inside_surface() {
        for n in 2..=12 {
            for &(w, h) in &[(100.0, 100.0), (1000.0, 800.0), (320.0, 1200.0), (1.0, 3.0)] {
                let pts = PolygonGenerator::generate(n, w, h).unwrap();
                assert_eq!(pts.len(), n);
                for p in &pts {
                    assert!(p.x >= 0.0 && p.x <= w, "{p:?} outside {w}x{h}");
                    assert!(p.y >= 0.0 && p.y <= h, "{p:?} outside {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn fitted_shape_touches_one_axis_and_is_centred() {
        for n in 2..=10 {
            for &(w, h) in &[(100.0, 100.0), (1000.0, 800.0), (300.0, 900.0)] {
                let pts = PolygonGenerator::generate(n, w, h).unwrap();
                let b = Bounds::of(&pts).unwrap();
                let touches_x = b.min.x.abs() < EPS && (b.max.x - w).abs() < EPS;
                let touches_y = b.min.y.abs() < EPS && (b.max.y - h).abs() < EPS;
                assert!(touches_x || touches_y, "n={n} {w}x{h}: {b:?}");

                let margin_x = (b.min.x, w - b.max.x);
                let margin_y = (b.min.y, h - b.max.y);
                assert!(margin_x.0 >= -EPS && margin_y.0 >= -EPS);
                assert!((margin_x.0 - margin_x.1).abs() < 1e-6);
                assert!((margin_y.0 - margin_y.1).abs() < 1e-6);
                assert!((b.center() - Point2::new(w, h) * 0.5).length() < 1e-6);
            }
        }
    }

    #[test]
    fn triangle_is_equilateral() {
        let pts = PolygonGenerator::generate(3, 100.0, 100.0).unwrap();
        let d01 = pts[0].distance(pts[1]);
        let d12 = pts[1].distance(pts[2]);
        let d20 = pts[2].distance(pts[0]);
        assert!((d01 - d12).abs() < 1e-9 && (d12 - d20).abs() < 1e-9);
        // width is the limiting axis, vertical margins are equal
        assert!((d01 - 100.0).abs() < 1e-9);
        let b = Bounds::of(&pts).unwrap();
        assert!((b.min.y - (100.0 - b.max.y)).abs() < 1e-9);
        assert!(b.min.y > 6.0 && b.min.y < 7.0);
    }

    #[test]
    fn segment_for_two_vertices() {
        let pts = PolygonGenerator::generate(2, 200.0, 50.0).unwrap();
        assert_eq!(pts.len(), 2);
        assert!((pts[0].x - 0.0).abs() < EPS);
        assert!((pts[1].x - 200.0).abs() < EPS);
        for p in &pts {
            assert!((p.y - 25.0).abs() < 1e-6);
        }
    }

    #[test]
    fn deterministic() {
        let a = PolygonGenerator::generate(7, 640.0, 480.0).unwrap();
        let b = PolygonGenerator::generate(7, 640.0, 480.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(PolygonGenerator::generate(1, 10.0, 10.0), Err(ChaosError::TooFewVertices(1)));
        assert_eq!(PolygonGenerator::generate(0, 10.0, 10.0), Err(ChaosError::TooFewVertices(0)));
        assert!(matches!(
            PolygonGenerator::generate(3, 0.0, 10.0),
            Err(ChaosError::InvalidSurface { .. })
        ));
        assert!(matches!(
            PolygonGenerator::generate(3, 10.0, -1.0),
            Err(ChaosError::InvalidSurface { .. })
        ));
        assert!(matches!(
            PolygonGenerator::generate(3, f64::NAN, 10.0),
            Err(ChaosError::InvalidSurface { .. })
        ));
    }
}
