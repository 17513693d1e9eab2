//! Search metrics and structured logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters for one search run.
pub struct SearchMetrics {
    generation_count: AtomicU64,
    evaluation_count: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl SearchMetrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            generation_count: AtomicU64::new(0),
            evaluation_count: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Adds a batch of fitness evaluations.
    pub fn record_evaluations(&self, count: usize) {
        self.evaluation_count
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Records a completed generation, logging every `log_interval` generations.
    pub fn record_generation(&self, best: f64, mean: f64, population: usize) {
        let generation = self.generation_count.fetch_add(1, Ordering::Relaxed) + 1;
        if generation.is_multiple_of(self.log_interval) {
            tracing::info!(
                generation,
                best,
                mean,
                population,
                evaluations = self.evaluation_count(),
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Search progress"
            );
        }
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evaluation_count(&self) -> u64 {
        self.evaluation_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
