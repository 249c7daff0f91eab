//! One sampling cycle: read, wait, read again, compute.

use std::thread;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::SourcePaths;
use crate::counters::{CounterDelta, CounterSnapshot, CounterSource};
use crate::error::Result;
use crate::frequency::FrequencySource;
use crate::normalize::{normalize, NormalizationFactor};
use crate::selector::CoreSelector;
use crate::utilization::{compute, UtilizationResult};

/// Raw readings from both ends of a sampling window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub earlier: CounterSnapshot,
    pub later: CounterSnapshot,
    pub first_current: f64,
    pub second_current: f64,
    pub maximum: f64,
}

impl Sample {
    pub fn factor(&self) -> NormalizationFactor {
        normalize(self.first_current, self.second_current, self.maximum)
    }

    pub fn delta(&self) -> Result<CounterDelta> {
        CounterDelta::between(&self.earlier, &self.later)
    }

    pub fn utilization(&self) -> Result<UtilizationResult> {
        Ok(compute(&self.delta()?, self.factor()))
    }
}

#[derive(Debug, Clone)]
pub struct Sampler {
    counters: CounterSource,
    frequencies: FrequencySource,
}

impl Sampler {
    /// `cores` must be the discovered set; it is what [`CoreSelector::All`] averages.
    pub fn new(paths: SourcePaths, cores: Vec<u32>) -> Self {
        Self {
            counters: CounterSource::new(paths.clone()),
            frequencies: FrequencySource::new(paths, cores),
        }
    }

    pub fn sample(&self, selector: CoreSelector, period: Duration) -> Result<Sample> {
        self.sample_with(selector, || thread::sleep(period))
    }

    /// Like [`Sampler::sample`], with the wait between the two reads supplied
    /// by the caller.
    #[instrument(level = "debug", skip(self, wait))]
    pub fn sample_with(&self, selector: CoreSelector, wait: impl FnOnce()) -> Result<Sample> {
        let earlier = self.counters.read(selector)?;
        let first_current = self.frequencies.read_current(selector)?;
        let maximum = self.frequencies.read_max(selector)?;

        wait();

        let later = self.counters.read(selector)?;
        let second_current = self.frequencies.read_current(selector)?;

        let sample = Sample {
            earlier,
            later,
            first_current,
            second_current,
            maximum,
        };
        debug!(?sample, factor = sample.factor().value(), "sampled");
        Ok(sample)
    }

    pub fn measure(&self, selector: CoreSelector, period: Duration) -> Result<UtilizationResult> {
        self.sample(selector, period)?.utilization()
    }
}

/// Single cycle against the given sources.
pub fn measure(
    paths: SourcePaths,
    cores: Vec<u32>,
    selector: CoreSelector,
    period: Duration,
) -> Result<UtilizationResult> {
    Sampler::new(paths, cores).measure(selector, period)
}
