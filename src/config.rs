// src/config.rs

use std::ops::RangeInclusive;

use log::warn;

use crate::canvas::{Rgba, BLACK, WHITE};
use crate::session::ChaosParams;

pub const SEED_ENV: &str = "CHAOS_SEED";
pub const TICK_RATE_ENV: &str = "CHAOS_TICK_RATE";

#[derive(Clone, Debug)]
pub struct Settings {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub vertex_range: RangeInclusive<usize>,
    pub default_vertex_count: usize,
    pub default_multiplier: f64,
    pub multiplier_step: f64,
    /// Walker steps per second.
    pub tick_rate: f64,
    pub max_ticks_per_frame: u32,
    pub background: Rgba,
    pub foreground: Rgba,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Chaos Game".to_string(),
            window_width: 1000,
            window_height: 800,
            vertex_range: 2..=10,
            default_vertex_count: 3,
            default_multiplier: 0.5,
            multiplier_step: 0.05,
            tick_rate: 10_000.0,
            max_ticks_per_frame: 50_000,
            background: WHITE,
            foreground: BLACK,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by `CHAOS_SEED` and `CHAOS_TICK_RATE`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(SEED_ENV).ok().as_deref(),
            std::env::var(TICK_RATE_ENV).ok().as_deref(),
        )
    }

    /// Applies raw override values; unparsable ones are logged and skipped.
    pub fn with_overrides(mut self, seed: Option<&str>, tick_rate: Option<&str>) -> Self {
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => warn!("ignoring {SEED_ENV}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = tick_rate {
            match raw.trim().parse::<f64>() {
                Ok(rate) if rate.is_finite() && rate > 0.0 => self.tick_rate = rate,
                Ok(rate) => warn!("ignoring {TICK_RATE_ENV}={rate}: must be a positive number"),
                Err(e) => warn!("ignoring {TICK_RATE_ENV}={raw:?}: {e}"),
            }
        }
        self
    }

    pub fn params(&self, width: u32, height: u32) -> ChaosParams {
        ChaosParams {
            vertex_count: self.default_vertex_count,
            multiplier: self.default_multiplier,
            width,
            height,
        }
    }
}
