use std::path::{Path, PathBuf};

pub const DEFAULT_PROC_STAT: &str = "/proc/stat";
pub const DEFAULT_CPU_ROOT: &str = "/sys/devices/system/cpu";

const CPUFREQ_DIR: &str = "cpufreq";

/// The two frequency files read per core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyMetric {
    Current,
    Maximum,
}

impl FrequencyMetric {
    pub fn file_name(&self) -> &'static str {
        match self {
            FrequencyMetric::Current => "scaling_cur_freq",
            FrequencyMetric::Maximum => "cpuinfo_max_freq",
        }
    }
}

/// Where counters and frequencies are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub proc_stat: PathBuf,
    pub cpu_root: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            proc_stat: PathBuf::from(DEFAULT_PROC_STAT),
            cpu_root: PathBuf::from(DEFAULT_CPU_ROOT),
        }
    }
}

impl SourcePaths {
    pub fn new(proc_stat: impl Into<PathBuf>, cpu_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_stat: proc_stat.into(),
            cpu_root: cpu_root.into(),
        }
    }

    pub fn cpu_root(&self) -> &Path {
        &self.cpu_root
    }

    /// `<cpu_root>/cpu<N>/cpufreq/<metric file>`
    pub fn frequency_file(&self, core: u32, metric: FrequencyMetric) -> PathBuf {
        self.cpu_root
            .join(format!("cpu{core}"))
            .join(CPUFREQ_DIR)
            .join(metric.file_name())
    }
}
