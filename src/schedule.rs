// src/schedule.rs

/// Converts elapsed frame time into a number of fixed-rate ticks.
///
/// The windowing loop runs at display rate while the walk is meant to run
/// at `tick_rate` steps per second, so each frame asks how many ticks are
/// due. Backlog beyond `max_ticks_per_frame` is dropped rather than carried
/// into later frames.
#[derive(Clone, Debug)]
pub struct TickClock {
    tick_rate: f64,
    max_ticks_per_frame: u32,
    accumulator: f64,
    paused: bool,
}

impl TickClock {
    pub fn new(tick_rate: f64, max_ticks_per_frame: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(0.0),
            max_ticks_per_frame,
            accumulator: 0.0,
            paused: false,
        }
    }

    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    pub fn advance(&mut self, dt_secs: f32) -> u32 {
        if self.paused || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return 0;
        }
        self.accumulator += dt_secs as f64 * self.tick_rate;
        let due = self.accumulator.floor();
        self.accumulator -= due;
        if due >= self.max_ticks_per_frame as f64 {
            self.max_ticks_per_frame
        } else {
            due as u32
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.accumulator = 0.0;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.paused { self.resume() } else { self.pause() }
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
