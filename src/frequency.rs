//! Current and maximum clock frequencies from `cpufreq`.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::config::{FrequencyMetric, SourcePaths};
use crate::error::{Result, UtilError};
use crate::selector::CoreSelector;

/// Reads `scaling_cur_freq` / `cpuinfo_max_freq` for one core, or the
/// unweighted mean over every discovered core.
#[derive(Debug, Clone)]
pub struct FrequencySource {
    paths: SourcePaths,
    cores: Vec<u32>,
}

impl FrequencySource {
    /// `cores` is the set averaged for [`CoreSelector::All`].
    pub fn new(paths: SourcePaths, cores: Vec<u32>) -> Self {
        Self { paths, cores }
    }

    pub fn read_current(&self, selector: CoreSelector) -> Result<f64> {
        self.read(selector, FrequencyMetric::Current)
    }

    pub fn read_max(&self, selector: CoreSelector) -> Result<f64> {
        self.read(selector, FrequencyMetric::Maximum)
    }

    /// Averages each metric on its own. Callers divide the averages, never
    /// per-core ratios.
    pub fn read(&self, selector: CoreSelector, metric: FrequencyMetric) -> Result<f64> {
        match selector {
            CoreSelector::Core(core) => {
                read_khz(&self.paths.frequency_file(core, metric)).map(|v| v as f64)
            }
            CoreSelector::All => {
                if self.cores.is_empty() {
                    return Err(UtilError::unavailable(
                        self.paths.cpu_root(),
                        "no cores discovered to average",
                    ));
                }
                let mut sum = 0.0;
                for &core in &self.cores {
                    sum += read_khz(&self.paths.frequency_file(core, metric))? as f64;
                }
                Ok(sum / self.cores.len() as f64)
            }
        }
    }
}

fn read_khz(path: &Path) -> Result<u64> {
    let text = fs::read_to_string(path).map_err(|e| UtilError::unavailable(path, e))?;
    let khz: u64 = text
        .trim()
        .parse()
        .map_err(|e| UtilError::unavailable(path, format!("{:?}: {e}", text.trim())))?;
    if khz == 0 {
        return Err(UtilError::unavailable(path, "frequency is zero"));
    }
    trace!(path = %path.display(), khz, "read frequency");
    Ok(khz)
}
