use std::fs;

use cpu_util::SourcePaths;
use tempfile::TempDir;

const STAT: &str = "\
cpu  2000 100 300 7600 0 0 0 0 0 0
cpu0 1000 50 150 3800 0 0 0 0 0 0
cpu1 1000 50 150 3800 0 0 0 0 0 0
intr 0
";

pub fn fake_host() -> (TempDir, SourcePaths) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let paths = SourcePaths::new(dir.path().join("stat"), dir.path().join("cpu"));
    fs::write(&paths.proc_stat, STAT).expect("should write stat");
    for (core, cur) in [(0, 1_800_000), (1, 2_400_000)] {
        let freq = paths.cpu_root.join(format!("cpu{core}")).join("cpufreq");
        fs::create_dir_all(&freq).expect("should create cpufreq");
        fs::write(freq.join("scaling_cur_freq"), format!("{cur}\n")).expect("should write");
        fs::write(freq.join("cpuinfo_max_freq"), "2400000\n").expect("should write");
    }
    fs::create_dir_all(paths.cpu_root.join("cpufreq")).expect("should create policy dir");
    (dir, paths)
}
