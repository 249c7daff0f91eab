//! Turns counter deltas into a frequency-scaled percentage breakdown.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::counters::CounterDelta;
use crate::normalize::NormalizationFactor;

/// Five shares that always add up to 100.
///
/// `idle` is whatever the other four leave over. Nothing is clamped, so a
/// factor above 1 can push a share past 100 and drive `idle` negative;
/// that reads as "load above nominal capacity", not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtilizationResult {
    pub user: f64,
    pub nice: f64,
    pub system: f64,
    pub idle: f64,
    pub wait: f64,
}

impl UtilizationResult {
    /// Result for an interval with no counted time.
    pub const ALL_IDLE: UtilizationResult = UtilizationResult {
        user: 0.0,
        nice: 0.0,
        system: 0.0,
        idle: 100.0,
        wait: 0.0,
    };

    pub fn sum(&self) -> f64 {
        self.user + self.nice + self.system + self.idle + self.wait
    }
}

impl fmt::Display for UtilizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
            self.user, self.nice, self.system, self.idle, self.wait
        )
    }
}

pub fn compute(delta: &CounterDelta, factor: NormalizationFactor) -> UtilizationResult {
    let total = delta.total();
    if total <= 0 {
        debug!(total, "no counted time in interval, reporting all idle");
        return UtilizationResult::ALL_IDLE;
    }

    let share = |ticks: i128| 100.0 * ticks as f64 / total as f64 * factor.value();
    let user = share(delta.user);
    let nice = share(delta.nice);
    let system = share(delta.system);
    let wait = share(delta.wait);

    UtilizationResult {
        user,
        nice,
        system,
        idle: 100.0 - (user + nice + system + wait),
        wait,
    }
}
