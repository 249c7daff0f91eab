use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use cpu_util::cli::SourceArgs;
use cpu_util::discovery::discover_cores;
use cpu_util::frequency::FrequencySource;
use cpu_util::{logging, CoreSelector, SourcePaths};

/// Lists every core with its current and maximum frequency.
#[derive(Debug, Parser)]
#[command(version, about)]
struct InfoArgs {
    #[command(flatten)]
    sources: SourceArgs,
}

fn fmt_khz(khz: f64) -> String {
    if khz >= 1_000_000.0 {
        format!("{:.2}GHz", khz / 1_000_000.0)
    } else {
        format!("{:.0}MHz", khz / 1_000.0)
    }
}

fn main() -> anyhow::Result<()> {
    let args = InfoArgs::parse();
    logging::init(LevelFilter::WARN);

    let paths = SourcePaths::from(args.sources);
    let cores = discover_cores(&paths.cpu_root).context("failed to discover cores")?;
    let source = FrequencySource::new(paths, cores.clone());

    let selectors = cores.iter().map(|&c| CoreSelector::Core(c)).chain([CoreSelector::All]);
    for selector in selectors {
        let current = source.read_current(selector)?;
        let max = source.read_max(selector)?;
        println!(
            "{selector}: {} / {} ({:.3})",
            fmt_khz(current),
            fmt_khz(max),
            current / max
        );
    }
    Ok(())
}
