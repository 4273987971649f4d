use serde::Serialize;
use std::time::{Duration, Instant};

use crate::model::config::AppConfig;
use crate::model::population::Population;

/// Milliseconds per speed level; level 4 is 200 ms.
pub const SPEED_STEP_MS: u64 = 50;
pub const MIN_SPEED_LEVEL: u8 = 1;
pub const MAX_SPEED_LEVEL: u8 = 9;

/// Point-in-time summary for stat displays and `--json` output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub tick: u64,
    pub living: usize,
    pub total_born: u64,
    pub total_died: u64,
    pub max_generation: u32,
    pub running: bool,
    pub tick_interval_ms: u64,
}

/// Owns the population and the run/pause pacing around it.
///
/// Starts paused. A tick only happens while running and once the tick
/// interval has elapsed since the previous one.
pub struct App {
    population: Population,
    running: bool,
    pub quit: bool,
    last_tick: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::with_population(Population::new(config))
    }

    #[must_use]
    pub fn with_population(population: Population) -> Self {
        Self {
            population,
            running: false,
            quit: false,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        self.population.config()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.population.metrics().increment_counter("start");
            tracing::info!(tick = self.population.tick(), "Simulation started");
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            self.population.metrics().increment_counter("pause");
            tracing::info!(tick = self.population.tick(), "Simulation paused");
        }
    }

    /// Pauses and reseeds the population from the configuration.
    pub fn reset(&mut self) {
        self.running = false;
        self.last_tick = None;
        self.population.reset();
        self.population.metrics().increment_counter("reset");
        tracing::info!(
            living = self.population.counters().living,
            "Simulation reset"
        );
    }

    /// Sets the tick interval to `level * 50ms`. Levels outside 1-9 are
    /// rejected and leave the interval unchanged.
    pub fn set_speed_level(&mut self, level: u8) -> bool {
        if !(MIN_SPEED_LEVEL..=MAX_SPEED_LEVEL).contains(&level) {
            tracing::warn!(level, "Ignoring out-of-range speed level");
            return false;
        }
        let interval = Duration::from_millis(SPEED_STEP_MS * u64::from(level));
        self.population.set_tick_interval(interval);
        tracing::info!(
            level,
            interval_ms = interval.as_millis() as u64,
            "Speed changed"
        );
        true
    }

    /// Runs one tick regardless of the run flag and interval.
    pub fn step(&mut self) {
        self.population.advance();
    }

    /// Whether a paced tick may run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.time_until_due(now) == Some(Duration::ZERO)
    }

    /// Time left before the next paced tick, or `None` while paused.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let interval = self.population.tick_interval();
        Some(match self.last_tick {
            Some(last) => interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }

    /// Advances one tick if one is due at `now`. Returns whether it did.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.population.advance();
        self.last_tick = Some(now);
        true
    }

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        let counters = self.population.counters();
        StatsSnapshot {
            tick: self.population.tick(),
            living: counters.living,
            total_born: counters.total_born,
            total_died: counters.total_died,
            max_generation: counters.max_generation,
            running: self.running,
            tick_interval_ms: u64::try_from(self.population.tick_interval().as_millis())
                .unwrap_or(u64::MAX),
        }
    }

    /// The stats panel text.
    #[must_use]
    pub fn status_line(&self) -> String {
        let counters = self.population.counters();
        format!(
            "Living Trees: {} | Total Born: {} | Total Died: {} | Generations: {}",
            counters.living, counters.total_born, counters.total_died, counters.max_generation
        )
    }
}
