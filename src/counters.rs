//! Cumulative scheduler time counters from `/proc/stat`.

use std::fs;

use crate::config::SourcePaths;
use crate::error::{Result, UtilError};
use crate::selector::CoreSelector;

const FIELDS: usize = 5;

/// Ticks accumulated since boot, in `/proc/stat` column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub selector: CoreSelector,
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub wait: u64,
}

/// `later - earlier` per category. Negative values are kept as-is.
///
/// Wide enough that any pair of `u64` counters, and the sum of all five
/// differences, is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterDelta {
    pub user: i128,
    pub nice: i128,
    pub system: i128,
    pub idle: i128,
    pub wait: i128,
}

impl CounterDelta {
    pub fn between(earlier: &CounterSnapshot, later: &CounterSnapshot) -> Result<Self> {
        if earlier.selector != later.selector {
            return Err(UtilError::SelectorMismatch {
                earlier: earlier.selector,
                later: later.selector,
            });
        }
        Ok(Self {
            user: signed_diff(later.user, earlier.user),
            nice: signed_diff(later.nice, earlier.nice),
            system: signed_diff(later.system, earlier.system),
            idle: signed_diff(later.idle, earlier.idle),
            wait: signed_diff(later.wait, earlier.wait),
        })
    }

    pub fn total(&self) -> i128 {
        self.user + self.nice + self.system + self.idle + self.wait
    }
}

fn signed_diff(later: u64, earlier: u64) -> i128 {
    i128::from(later) - i128::from(earlier)
}

/// Reads one counter record per call.
#[derive(Debug, Clone)]
pub struct CounterSource {
    paths: SourcePaths,
}

impl CounterSource {
    pub fn new(paths: SourcePaths) -> Self {
        Self { paths }
    }

    pub fn read(&self, selector: CoreSelector) -> Result<CounterSnapshot> {
        let path = &self.paths.proc_stat;
        let text = fs::read_to_string(path).map_err(|e| UtilError::unavailable(path, e))?;
        parse_stat(&text, selector).map_err(|reason| UtilError::unavailable(path, reason))
    }
}

/// Picks the record whose label is exactly `selector.label()`, so `cpu1`
/// never matches a `cpu10` line.
pub fn parse_stat(
    text: &str,
    selector: CoreSelector,
) -> std::result::Result<CounterSnapshot, String> {
    let label = selector.label();
    let line = text
        .lines()
        .find(|line| line.split_whitespace().next() == Some(label.as_str()))
        .ok_or_else(|| format!("no `{label}` record"))?;

    let mut vals = [0u64; FIELDS];
    let mut it = line.split_whitespace().skip(1);
    for (i, slot) in vals.iter_mut().enumerate() {
        let field = it
            .next()
            .ok_or_else(|| format!("`{label}` record has {i} counters, need {FIELDS}"))?;
        *slot = field
            .parse()
            .map_err(|e| format!("`{label}` counter {i} ({field:?}): {e}"))?;
    }

    let [user, nice, system, idle, wait] = vals;
    Ok(CounterSnapshot {
        selector,
        user,
        nice,
        system,
        idle,
        wait,
    })
}
