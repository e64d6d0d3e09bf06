// src/lib.rs

pub mod canvas;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod schedule;
pub mod session;
pub mod stepper;

pub use canvas::Canvas;
pub use config::Settings;
pub use error::{ChaosError, Result};
pub use generator::PolygonGenerator;
pub use geometry::Point2;
pub use schedule::TickClock;
pub use session::{ChaosParams, ChaosSession};
pub use stepper::ChaosStepper;
