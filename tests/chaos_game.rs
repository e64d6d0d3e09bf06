// tests/chaos_game.rs

use chaos_game::canvas::{BLACK, WHITE};
use chaos_game::geometry::Bounds;
use chaos_game::{ChaosError, ChaosParams, ChaosSession, ChaosStepper, Point2, PolygonGenerator, TickClock};

fn params(vertex_count: usize, multiplier: f64, width: u32, height: u32) -> ChaosParams {
    ChaosParams { vertex_count, multiplier, width, height }
}

/// Twice the signed area of triangle (a, b, c).
fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn inside_triangle(p: Point2, t: &[Point2]) -> bool {
    let (d1, d2, d3) = (cross(t[0], t[1], p), cross(t[1], t[2], p), cross(t[2], t[0], p));
    let has_neg = d1 < -1e-6 || d2 < -1e-6 || d3 < -1e-6;
    let has_pos = d1 > 1e-6 || d2 > 1e-6 || d3 > 1e-6;
    !(has_neg && has_pos)
}

#[test]
fn seeded_walk_is_reproducible() {
    let vertices = PolygonGenerator::generate(3, 100.0, 100.0).unwrap();
    let walk = |seed| {
        let mut stepper = ChaosStepper::with_seed(0.5, seed).unwrap();
        stepper.reset(vertices.clone()).unwrap();
        (0..1000).map(|_| stepper.step().unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(walk(2024), walk(2024));
    assert_ne!(walk(2024), walk(2025));
}

#[test]
fn walk_stays_inside_the_triangle() {
    let vertices = PolygonGenerator::generate(3, 100.0, 100.0).unwrap();
    let mut stepper = ChaosStepper::with_seed(0.5, 9).unwrap();
    stepper.reset(vertices.clone()).unwrap();
    for _ in 0..5000 {
        let p = stepper.step().unwrap();
        assert!(inside_triangle(p, &vertices), "{p:?} escaped");
    }
}

#[test]
fn sierpinski_leaves_the_middle_hole_empty() {
    let vertices = PolygonGenerator::generate(3, 100.0, 100.0).unwrap();
    let mut stepper = ChaosStepper::with_seed(0.5, 77).unwrap();
    stepper.reset(vertices.clone()).unwrap();
    let mid: Vec<Point2> = (0..3).map(|i| (vertices[i] + vertices[(i + 1) % 3]) * 0.5).collect();
    // shrink the central hole slightly so boundary points do not count
    let centre = (mid[0] + mid[1] + mid[2]) / 3.0;
    let hole: Vec<Point2> = mid.iter().map(|&m| centre + (m - centre) * 0.9).collect();
    for _ in 0..10 {
        stepper.step().unwrap();
    }
    for _ in 0..20_000 {
        let p = stepper.step().unwrap();
        assert!(!inside_triangle(p, &hole), "{p:?} landed in the central hole");
    }
}

#[test]
fn session_covers_the_fitted_polygon() {
    let mut session = ChaosSession::new(params(4, 0.5, 120, 80), Some(3), WHITE, BLACK).unwrap();
    let bounds = Bounds::of(session.vertices()).unwrap();
    session.run_ticks(20_000).unwrap();
    assert!(session.canvas().marked_pixels() > 1000);
    for y in 0..80 {
        for x in 0..120 {
            if session.canvas().pixel(x, y) == Some(BLACK) {
                assert!(x as f64 >= bounds.min.x.floor() && x as f64 <= bounds.max.x);
                assert!(y as f64 >= bounds.min.y.floor() && y as f64 <= bounds.max.y);
            }
        }
    }
}

#[test]
fn clock_drives_session_ticks() {
    let mut session = ChaosSession::new(params(3, 0.5, 64, 64), Some(1), WHITE, BLACK).unwrap();
    let mut clock = TickClock::new(1000.0, 10_000);
    for _ in 0..4 {
        let due = clock.advance(0.25);
        session.run_ticks(due).unwrap();
    }
    assert_eq!(session.ticks(), 1000);
    clock.pause();
    session.run_ticks(clock.advance(1.0)).unwrap();
    assert_eq!(session.ticks(), 1000);
}

#[test]
fn every_slider_position_is_valid() {
    let mut session = ChaosSession::new(params(3, 0.5, 1000, 800), None, WHITE, BLACK).unwrap();
    for n in 2..=10 {
        session.on_vertex_count_changed(n).unwrap();
        for step in 0..=20 {
            session.on_multiplier_changed(step as f64 * 0.05).unwrap();
            session.run_ticks(50).unwrap();
            let walker = session.walker().unwrap();
            assert!(walker.x >= 0.0 && walker.x <= 1000.0 && walker.y >= 0.0 && walker.y <= 800.0);
        }
    }
    assert_eq!(session.on_multiplier_changed(1.05), Err(ChaosError::InvalidMultiplier(1.05)));
}
