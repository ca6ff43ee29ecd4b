//! # Holiday Relay
//!
//! Caching proxy in front of the Calendarific holiday API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use holiday_relay_domain::CliOverrides;
use holiday_relay_jobs::{CacheCompactionJob, JobRunner};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "holiday-relay")]
#[command(version)]
#[command(about = "Caching proxy for the Calendarific holiday API")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Calendarific API key (overrides config and environment)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            web_port: cli.port,
            bind_address: cli.bind,
            api_key: cli.api_key,
        },
    )?;

    bootstrap::init_logging(&config);

    let container = di::build(&config);

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_cache_compaction(
            CacheCompactionJob::new(
                container.cache.clone(),
                config.cache.compaction_interval_secs,
            )
            .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    server::start_web_server(&config, container.state).await?;

    shutdown.cancel();
    Ok(())
}
