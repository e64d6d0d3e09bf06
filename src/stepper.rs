// src/stepper.rs

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::{ChaosError, Result};
use crate::geometry::{lerp_exact, Point2};

#[derive(Clone, Debug)]
enum StepperState {
    Idle,
    Running { vertices: Vec<Point2>, walker: Point2 },
}

/// Moves a single walker a fixed fraction of the way toward a random vertex
/// on every step. It only yields coordinates; drawing is up to the caller.
#[derive(Clone, Debug)]
pub struct ChaosStepper {
    state: StepperState,
    multiplier: f64,
    rng: Pcg64,
}

impl ChaosStepper {
    /// Stepper seeded from system entropy.
    pub fn new(multiplier: f64) -> Result<Self> {
        Self::with_rng(multiplier, Pcg64::from_entropy())
    }

    /// Stepper whose vertex choices are reproducible for a given seed.
    pub fn with_seed(multiplier: f64, seed: u64) -> Result<Self> {
        Self::with_rng(multiplier, Pcg64::seed_from_u64(seed))
    }

    fn with_rng(multiplier: f64, rng: Pcg64) -> Result<Self> {
        check_multiplier(multiplier)?;
        Ok(Self { state: StepperState::Idle, multiplier, rng })
    }

    /// Loads a new vertex set and puts the walker on one of its vertices.
    pub fn reset(&mut self, vertices: Vec<Point2>) -> Result<()> {
        if vertices.is_empty() {
            return Err(ChaosError::EmptyVertexSet);
        }
        let walker = vertices[self.rng.gen_range(0..vertices.len())];
        self.state = StepperState::Running { vertices, walker };
        Ok(())
    }

    pub fn set_multiplier(&mut self, multiplier: f64) -> Result<()> {
        check_multiplier(multiplier)?;
        self.multiplier = multiplier;
        Ok(())
    }

    /// Jumps toward a uniformly chosen vertex and returns the new walker.
    pub fn step(&mut self) -> Result<Point2> {
        match &mut self.state {
            StepperState::Idle => Err(ChaosError::NotRunning),
            StepperState::Running { vertices, walker } => {
                let target = vertices[self.rng.gen_range(0..vertices.len())];
                *walker = lerp_exact(*walker, target, self.multiplier);
                Ok(*walker)
            }
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, StepperState::Running { .. })
    }

    pub fn walker(&self) -> Option<Point2> {
        match &self.state {
            StepperState::Idle => None,
            StepperState::Running { walker, .. } => Some(*walker),
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        match &self.state {
            StepperState::Idle => &[],
            StepperState::Running { vertices, .. } => vertices,
        }
    }
}

fn check_multiplier(multiplier: f64) -> Result<()> {
    if (0.0..=1.0).contains(&multiplier) {
        Ok(())
    } else {
        Err(ChaosError::InvalidMultiplier(multiplier))
    }
}
