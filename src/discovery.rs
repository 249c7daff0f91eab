//! Finds the per-core directories (`cpu0`, `cpu1`, ...) under the sysfs cpu root.

use std::path::Path;

use glob::Pattern;
use tracing::debug;

use crate::error::{Result, UtilError};

/// Sorted, de-duplicated core numbers with a `cpu<N>` directory.
pub fn discover_cores(cpu_root: &Path) -> Result<Vec<u32>> {
    if !cpu_root.is_dir() {
        return Err(UtilError::unavailable(cpu_root, "not a directory"));
    }
    let root = cpu_root
        .to_str()
        .ok_or_else(|| UtilError::unavailable(cpu_root, "path is not valid UTF-8"))?;
    let pattern = format!("{}/cpu[0-9]*", Pattern::escape(root));
    let paths = glob::glob(&pattern).map_err(|e| UtilError::unavailable(cpu_root, e))?;

    let mut cores: Vec<u32> = paths
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_dir())
        .filter_map(|path| core_number(path.file_name()?.to_str()?))
        .collect();
    cores.sort_unstable();
    cores.dedup();

    debug!(root = %cpu_root.display(), ?cores, "discovered cores");
    Ok(cores)
}

fn core_number(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("cpu")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
