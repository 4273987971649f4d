//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance and population health.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    living: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    last_tick_micros: AtomicU64,
    log_interval: u64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a new metrics collector that logs a summary every
    /// `log_interval` ticks (0 disables the summary).
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            living: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            last_tick_micros: AtomicU64::new(0),
            log_interval,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, living: usize, births: usize, deaths: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.living.store(living as u64, Ordering::Relaxed);
        self.births.fetch_add(births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(deaths as u64, Ordering::Relaxed);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.last_tick_micros.store(micros, Ordering::Relaxed);

        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                living = living,
                births = self.births.load(Ordering::Relaxed),
                deaths = self.deaths.load(Ordering::Relaxed),
                duration_us = micros,
                "Simulation tick"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value of a named counter (0 if never incremented).
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Forgets tick history, keeping named counters.
    pub fn reset_ticks(&self) {
        self.tick_count.store(0, Ordering::Relaxed);
        self.living.store(0, Ordering::Relaxed);
        self.births.store(0, Ordering::Relaxed);
        self.deaths.store(0, Ordering::Relaxed);
        self.last_tick_micros.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn living(&self) -> u64 {
        self.living.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        Duration::from_micros(self.last_tick_micros.load(Ordering::Relaxed))
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`. Logs go to stderr so that stdout
/// carries only simulation reports. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
