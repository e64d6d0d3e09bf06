// src/session.rs

use log::debug;

use crate::canvas::{Canvas, Rgba};
use crate::error::{ChaosError, Result};
use crate::generator::PolygonGenerator;
use crate::geometry::Point2;
use crate::stepper::ChaosStepper;

/// User-controlled inputs of the walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaosParams {
    pub vertex_count: usize,
    pub multiplier: f64,
    pub width: u32,
    pub height: u32,
}

/// Everything one window needs: parameters, the stepper and the canvas it
/// plots into. UI layers call the `on_*` functions when a control changes
/// and `tick` from whatever scheduler they run.
#[derive(Clone, Debug)]
pub struct ChaosSession {
    params: ChaosParams,
    stepper: ChaosStepper,
    canvas: Canvas,
    ticks: u64,
}

impl ChaosSession {
    pub fn new(params: ChaosParams, seed: Option<u64>, background: Rgba, foreground: Rgba) -> Result<Self> {
        let mut stepper = match seed {
            Some(seed) => ChaosStepper::with_seed(params.multiplier, seed)?,
            None => ChaosStepper::new(params.multiplier)?,
        };
        stepper.reset(Self::polygon(&params)?)?;
        Ok(Self {
            params,
            stepper,
            canvas: Canvas::new(params.width, params.height, background, foreground),
            ticks: 0,
        })
    }

    /// Regenerates the polygon when the count actually changed. Returns
    /// whether anything happened.
    pub fn on_vertex_count_changed(&mut self, vertex_count: usize) -> Result<bool> {
        if vertex_count == self.params.vertex_count {
            return Ok(false);
        }
        let params = ChaosParams { vertex_count, ..self.params };
        self.stepper.reset(Self::polygon(&params)?)?;
        self.params = params;
        self.canvas.clear();
        debug!("vertex count changed to {vertex_count}");
        Ok(true)
    }

    pub fn on_multiplier_changed(&mut self, multiplier: f64) -> Result<()> {
        self.stepper.set_multiplier(multiplier)?;
        self.params.multiplier = multiplier;
        self.canvas.clear();
        debug!("multiplier changed to {multiplier}");
        Ok(())
    }

    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        let params = ChaosParams { width, height, ..self.params };
        self.stepper.reset(Self::polygon(&params)?)?;
        self.params = params;
        self.canvas.resize(width, height);
        debug!("surface resized to {width}x{height}");
        Ok(())
    }

    /// One step of the walk plus one pixel write.
    pub fn tick(&mut self) -> Result<Point2> {
        let point = self.stepper.step()?;
        self.canvas.plot(point);
        self.ticks += 1;
        Ok(point)
    }

    pub fn run_ticks(&mut self, count: u32) -> Result<()> {
        for _ in 0..count {
            self.tick()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn params(&self) -> &ChaosParams {
        &self.params
    }

    pub fn vertices(&self) -> &[Point2] {
        self.stepper.vertices()
    }

    pub fn walker(&self) -> Option<Point2> {
        self.stepper.walker()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn polygon(params: &ChaosParams) -> Result<Vec<Point2>> {
        if params.width == 0 || params.height == 0 {
            return Err(ChaosError::InvalidSurface {
                width: params.width as f64,
                height: params.height as f64,
            });
        }
        PolygonGenerator::generate(params.vertex_count, params.width as f64, params.height as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BLACK, WHITE};

    fn session(seed: u64) -> ChaosSession {
        let params = ChaosParams { vertex_count: 3, multiplier: 0.5, width: 200, height: 100 };
        ChaosSession::new(params, Some(seed), WHITE, BLACK).unwrap()
    }

    #[test]
    fn ticks_plot_pixels() {
        let mut s = session(5);
        s.run_ticks(2000).unwrap();
        assert_eq!(s.ticks(), 2000);
        assert!(s.canvas().marked_pixels() > 100);
    }

    #[test]
    fn unchanged_vertex_count_is_a_no_op() {
        let mut s = session(5);
        s.run_ticks(100).unwrap();
        let marked = s.canvas().marked_pixels();
        assert!(!s.on_vertex_count_changed(3).unwrap());
        assert_eq!(s.canvas().marked_pixels(), marked);
    }

    #[test]
    fn vertex_count_change_regenerates_and_clears() {
        let mut s = session(5);
        s.run_ticks(100).unwrap();
        assert!(s.on_vertex_count_changed(5).unwrap());
        assert_eq!(s.params().vertex_count, 5);
        assert_eq!(s.vertices().len(), 5);
        assert_eq!(s.canvas().marked_pixels(), 0);
        assert!(s.vertices().contains(&s.walker().unwrap()));
    }

    #[test]
    fn multiplier_change_keeps_vertices_and_clears() {
        let mut s = session(5);
        let before = s.vertices().to_vec();
        s.run_ticks(100).unwrap();
        s.on_multiplier_changed(0.75).unwrap();
        assert_eq!(s.params().multiplier, 0.75);
        assert_eq!(s.vertices(), &before[..]);
        assert_eq!(s.canvas().marked_pixels(), 0);
    }

    #[test]
    fn resize_refits_polygon() {
        let mut s = session(5);
        s.on_resize(50, 400).unwrap();
        assert_eq!((s.canvas().width(), s.canvas().height()), (50, 400));
        for v in s.vertices() {
            assert!(v.x <= 50.0 && v.y <= 400.0);
        }
        s.run_ticks(500).unwrap();
        assert!(s.canvas().marked_pixels() > 0);
    }

    #[test]
    fn rejected_updates_keep_previous_state() {
        let mut s = session(5);
        let before = *s.params();
        assert_eq!(s.on_vertex_count_changed(1), Err(ChaosError::TooFewVertices(1)));
        assert!(s.on_multiplier_changed(2.0).is_err());
        assert!(s.on_resize(0, 10).is_err());
        assert_eq!(*s.params(), before);
        assert_eq!(s.vertices().len(), 3);
        assert_eq!((s.canvas().width(), s.canvas().height()), (200, 100));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let params = ChaosParams { vertex_count: 3, multiplier: 0.5, width: 0, height: 100 };
        assert!(matches!(
            ChaosSession::new(params, Some(1), WHITE, BLACK),
            Err(ChaosError::InvalidSurface { .. })
        ));
    }
}
