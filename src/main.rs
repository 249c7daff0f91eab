use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};

use cpu_util::cli::{validate_core, validate_period, Cli};
use cpu_util::discovery::discover_cores;
use cpu_util::{logging, measure, SourcePaths, UtilError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(LevelFilter::WARN);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cpu-util: {err:#}");
            match err.downcast_ref::<UtilError>() {
                Some(UtilError::InvalidArgument { .. }) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let period = validate_period(cli.period)?;
    let paths = SourcePaths::from(cli.sources);
    let cores = discover_cores(&paths.cpu_root).context("failed to discover cores")?;
    let selector = validate_core(cli.core, &cores)?;
    debug!(?period, %selector, ?cores, "sampling");

    let result = measure(paths, cores, selector, period)?;
    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}
