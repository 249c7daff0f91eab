//! Repeated sampling cycles feeding the exporter's gauges.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::Result;
use crate::metrics::UtilizationGauges;
use crate::sampler::Sampler;
use crate::selector::CoreSelector;

pub struct Publisher {
    sampler: Sampler,
    gauges: UtilizationGauges,
    selector: CoreSelector,
    period: Duration,
}

impl Publisher {
    pub fn new(
        sampler: Sampler,
        gauges: UtilizationGauges,
        selector: CoreSelector,
        period: Duration,
    ) -> Self {
        Self {
            sampler,
            gauges,
            selector,
            period,
        }
    }

    /// One full two-snapshot cycle. A failed cycle publishes nothing and
    /// still takes at least `period`, so callers can loop on it.
    pub fn cycle(&self) -> Result<()> {
        let outcome = self
            .sampler
            .sample(self.selector, self.period)
            .and_then(|sample| Ok((sample.utilization()?, sample.factor())));
        match outcome {
            Ok((result, factor)) => {
                self.gauges.set(&result, factor);
                Ok(())
            }
            Err(err) => {
                thread::sleep(self.period);
                Err(err)
            }
        }
    }

    /// Cycles until `stop` is set.
    pub fn run(&self, stop: &AtomicBool) {
        while !stop.load(Ordering::Relaxed) {
            if let Err(err) = self.cycle() {
                warn!(selector = %self.selector, "sampling cycle failed: {err}");
            }
        }
    }
}
