//! The loading transition played before every view switch.
//!
//! A fixed sequence of `(delay, percent)` steps followed by a settle delay.
//! There is no cancellation: once started, the sequence runs to the end.

use std::time::Duration;

use crate::config::LoaderConfig;

/// One step: wait `delay`, then report `percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderStep {
    pub percent: u8,
    pub delay: Duration,
}

/// Simulated progress sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    steps: Vec<LoaderStep>,
    settle: Duration,
}

impl Loader {
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            steps: config
                .steps
                .iter()
                .map(|s| LoaderStep {
                    percent: s.percent,
                    delay: Duration::from_millis(s.delay_ms),
                })
                .collect(),
            settle: Duration::from_millis(config.settle_ms),
        }
    }

    /// Same progress values with every delay removed (`--no-loader`).
    pub fn instant(config: &LoaderConfig) -> Self {
        let mut loader = Self::from_config(config);
        for step in &mut loader.steps {
            step.delay = Duration::ZERO;
        }
        loader.settle = Duration::ZERO;
        loader
    }

    pub fn steps(&self) -> &[LoaderStep] {
        &self.steps
    }

    /// Wall time from start to completion.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum::<Duration>() + self.settle
    }

    /// Plays the sequence, calling `on_progress` after each step.
    ///
    /// Resolves once the settle delay after the final step has elapsed.
    pub async fn run<F>(&self, mut on_progress: F)
    where
        F: FnMut(u8),
    {
        for step in &self.steps {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            on_progress(step.percent);
        }
        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}
