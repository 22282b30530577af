//! Configuration for a reading session.

use chrono::NaiveDate;
use tj_core::relation::{DEFAULT_BASELINE, SCORE_MAX, SCORE_MIN};
use tj_narrative::ComposerConfig;

/// Configuration for a reading session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible casts; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Radar baseline (0-100); `None` keeps the composer default.
    pub baseline: Option<i32>,
    /// Date treated as today; `None` uses the local clock.
    pub today: Option<NaiveDate>,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the radar baseline (clamped to 0-100).
    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline.clamp(SCORE_MIN, SCORE_MAX));
        self
    }

    /// Pin the date treated as today.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Composer config derived from this session config.
    pub fn composer(&self) -> ComposerConfig {
        ComposerConfig::new().with_baseline(self.baseline.unwrap_or(DEFAULT_BASELINE))
    }
}
