//! Frequency-normalized CPU utilization sampling for Linux.
//!
//! Two snapshots of `/proc/stat` counters and `cpufreq` readings are taken a
//! sampling period apart, and the deltas are turned into a user/nice/system/
//! idle/wait breakdown scaled by how fast the core actually ran.

pub mod cli;
pub mod config;
pub mod counters;
pub mod discovery;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod publish;
pub mod sampler;
pub mod selector;
pub mod utilization;

#[cfg(test)]
pub(crate) mod fixture;

pub use config::SourcePaths;
pub use error::{Result, UtilError};
pub use sampler::{measure, Sample, Sampler};
pub use selector::CoreSelector;
pub use utilization::UtilizationResult;
