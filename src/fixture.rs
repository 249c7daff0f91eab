//! Throwaway procfs/sysfs trees for tests.

use std::fs;

use tempfile::TempDir;

use crate::config::{FrequencyMetric, SourcePaths};

pub(crate) struct FakeHost {
    _dir: TempDir,
    pub paths: SourcePaths,
}

impl FakeHost {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let paths = SourcePaths::new(dir.path().join("stat"), dir.path().join("cpu"));
        fs::create_dir_all(&paths.cpu_root).expect("should create cpu root");
        Self { _dir: dir, paths }
    }

    pub fn write_stat(&self, contents: &str) {
        fs::write(&self.paths.proc_stat, contents).expect("should write stat");
    }

    pub fn add_core(&self, core: u32, current_khz: u64, max_khz: u64) {
        let dir = self.paths.cpu_root.join(format!("cpu{core}")).join("cpufreq");
        fs::create_dir_all(dir).expect("should create cpufreq dir");
        self.set_frequency(core, FrequencyMetric::Current, current_khz);
        self.set_frequency(core, FrequencyMetric::Maximum, max_khz);
    }

    pub fn set_frequency(&self, core: u32, metric: FrequencyMetric, khz: u64) {
        fs::write(self.paths.frequency_file(core, metric), format!("{khz}\n"))
            .expect("should write frequency");
    }
}
