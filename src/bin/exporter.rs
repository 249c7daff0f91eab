use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use clap::Parser;
use prometheus::Registry;
use tracing::{info, level_filters::LevelFilter};

use cpu_util::cli::{validate_core, validate_period, SourceArgs};
use cpu_util::discovery::discover_cores;
use cpu_util::metrics::{self, UtilizationGauges};
use cpu_util::publish::Publisher;
use cpu_util::{logging, Sampler, SourcePaths, UtilError};

/// Serves frequency-normalized CPU utilization as Prometheus gauges.
#[derive(Debug, Parser)]
#[command(version, about)]
struct ExporterArgs {
    /// Address the /metrics endpoint listens on
    #[arg(long, env = "APP_PORT", default_value = "0.0.0.0:9100")]
    listen: String,

    /// Length of each sampling window, in seconds
    #[arg(long, default_value_t = 1.0)]
    period: f64,

    /// Number of the core. All cores when omitted.
    #[arg(short, long)]
    core: Option<u32>,

    #[command(flatten)]
    sources: SourceArgs,
}

struct AppState {
    registry: Registry,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ExporterArgs::parse();
    logging::init(LevelFilter::INFO);

    let period = validate_period(args.period)?;
    if period.is_zero() {
        return Err(UtilError::InvalidArgument {
            message: "exporter period must be greater than zero".to_owned(),
        }
        .into());
    }
    let paths = SourcePaths::from(args.sources);
    let cores = discover_cores(&paths.cpu_root).context("failed to discover cores")?;
    let selector = validate_core(args.core, &cores)?;

    let registry = Registry::new();
    let gauges = UtilizationGauges::register(&registry)?;
    let publisher = Publisher::new(Sampler::new(paths, cores), gauges, selector, period);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;

    // Plain thread: the runtime never waits on it at shutdown.
    let stop = Arc::new(AtomicBool::new(false));
    thread::Builder::new()
        .name("sampler".to_owned())
        .spawn({
            let stop = Arc::clone(&stop);
            move || publisher.run(&stop)
        })
        .context("failed to start sampler thread")?;

    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(Arc::new(AppState { registry }));

    info!(listen = %args.listen, %selector, ?period, "exporter running");
    let served = axum::serve(listener, app).await;
    stop.store(true, Ordering::Relaxed);
    served?;
    Ok(())
}

async fn metrics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<String, (StatusCode, String)> {
    metrics::encode(&state.registry).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
