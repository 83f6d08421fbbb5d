//! Fixed settings for the timer window and its tick stream.

use std::time::Duration;

/// Everything the timer needs to know up front.  There is no runtime
/// source for these; `Default` is the configuration.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    pub title: &'static str,
    /// Inner window size in points.
    pub window_size: [f32; 2],
    /// Time between two ticks (25 Hz).
    pub tick_interval: Duration,
    /// Progress added by each tick.
    pub tick_increment: f32,
    /// Seconds for a full boil.
    pub boil_duration: f32,
    /// How many ticks may wait in the channel before the ticker blocks.
    pub tick_queue: usize,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            title: "Egg Timer",
            window_size: [400.0, 600.0],
            tick_interval: Duration::from_secs(1) / 25,
            tick_increment: 0.004,
            boil_duration: 100.0,
            tick_queue: 25,
        }
    }
}
