//! Command line surface and argument validation.
//!
//! Validation happens before any counter or frequency file is read.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser};

use crate::config::{SourcePaths, DEFAULT_CPU_ROOT, DEFAULT_PROC_STAT};
use crate::error::{Result, UtilError};
use crate::selector::CoreSelector;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Prints the frequency-normalized user, nice, system, idle and wait utilization of a core or of the whole CPU.",
    long_about = "Prints the frequency-normalized user, nice, system, idle and wait utilization of a core or of the whole CPU.\n\nLarge values may not be accurate because the frequency is sampled only at the start and end."
)]
pub struct Cli {
    /// The period of time to sample the CPU time. Small values give imprecise results.
    #[arg(allow_negative_numbers = true)]
    pub period: f64,

    /// Number of the core.
    #[arg(short, long)]
    pub core: Option<u32>,

    /// Print the result as a JSON object instead of a tab-separated line.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Kernel CPU time counters
    #[arg(long, env = "CPU_UTIL_PROC_STAT", default_value = DEFAULT_PROC_STAT)]
    pub proc_stat: PathBuf,

    /// Directory holding the per-core cpu<N>/cpufreq entries
    #[arg(long, env = "CPU_UTIL_CPU_ROOT", default_value = DEFAULT_CPU_ROOT)]
    pub cpu_root: PathBuf,
}

impl From<SourceArgs> for SourcePaths {
    fn from(args: SourceArgs) -> Self {
        SourcePaths::new(args.proc_stat, args.cpu_root)
    }
}

pub fn validate_period(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(UtilError::invalid(format!(
            "period must be a non-negative number of seconds, got {seconds}"
        )));
    }
    Duration::try_from_secs_f64(seconds)
        .map_err(|e| UtilError::invalid(format!("period {seconds}: {e}")))
}

pub fn validate_core(core: Option<u32>, valid_cores: &[u32]) -> Result<CoreSelector> {
    match core {
        Some(n) if !valid_cores.contains(&n) => {
            let choices = valid_cores
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(UtilError::invalid(format!(
                "core {n} is not one of the available cores ({choices})"
            )))
        }
        other => Ok(CoreSelector::from(other)),
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;
    use test_log::test;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cpu-util").chain(args.iter().copied()))
            .expect("should parse")
    }

    #[test]
    fn period_and_core() {
        let cli = parse(&["0.25", "--core", "3"]);
        assert_eq!(cli.period, 0.25);
        assert_eq!(cli.core, Some(3));
        assert!(!cli.json);

        let period = validate_period(cli.period).expect("should validate");
        assert_eq!(period, Duration::from_millis(250));
        let selector = validate_core(cli.core, &[0, 1, 2, 3]).expect("should validate");
        assert_eq!(selector, CoreSelector::Core(3));
    }

    #[test]
    fn no_core_means_all() {
        let cli = parse(&["1", "--json"]);
        assert!(cli.json);
        let selector = validate_core(cli.core, &[0]).expect("should validate");
        assert_eq!(selector, CoreSelector::All);
    }

    #[test]
    fn source_paths_can_be_overridden() {
        let cli = parse(&["0", "--proc-stat", "/tmp/stat", "--cpu-root", "/tmp/cpu"]);
        let paths = SourcePaths::from(cli.sources);
        assert_eq!(paths, SourcePaths::new("/tmp/stat", "/tmp/cpu"));
    }

    #[test]
    fn negative_period_is_invalid() {
        let cli = parse(&["-1", "-c", "0"]);
        assert_eq!(cli.core, Some(0));
        assert!(matches!(
            validate_period(cli.period),
            Err(UtilError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn non_finite_period_is_invalid() {
        for bad in [f64::NAN, f64::INFINITY] {
            assert!(matches!(validate_period(bad), Err(UtilError::InvalidArgument { .. })));
        }
        assert_eq!(validate_period(0.0).expect("zero is allowed"), Duration::ZERO);
    }

    #[test]
    fn unknown_core_lists_the_choices() {
        let err = validate_core(Some(4), &[0, 1, 2]).expect_err("core 4 is absent");
        assert_eq!(
            err.to_string(),
            "invalid argument: core 4 is not one of the available cores (0, 1, 2)"
        );
    }

    #[test]
    fn non_numeric_period_is_a_usage_error() {
        assert!(Cli::try_parse_from(["cpu-util", "soon"]).is_err());
    }
}
