//! quizharvest binary — run one harvest and print the summary line.

use anyhow::Result;
use clap::Parser;
use quizharvest::config::HarvestConfig;
use quizharvest::harvest;
use quizharvest::renderer::chromium::ChromiumRenderer;
use quizharvest::renderer::Renderer;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "quizharvest", version, about = "Daily Naver SERP quiz harvester")]
struct Args {
    /// Output directory for the dated report and the dedup ledger.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Wait after page load before scraping, in milliseconds.
    #[arg(long, default_value_t = 1_500)]
    settle_ms: u64,

    /// Per-navigation timeout in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    /// Print the run summary as JSON instead of the plain line.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizharvest=info".parse().unwrap()),
        )
        .init();

    info!("starting quizharvest v{}", env!("CARGO_PKG_VERSION"));

    let config = HarvestConfig {
        out_dir: args.out_dir,
        settle_ms: args.settle_ms,
        timeout_ms: args.timeout_ms,
    };

    let renderer = ChromiumRenderer::launch(config.settle_ms).await?;

    // The browser is shut down on every exit path, including a failed run.
    let outcome = harvest::run(&config, &renderer).await;
    if let Err(err) = renderer.close().await {
        warn!("browser shutdown failed: {err:#}");
    }
    let report = outcome?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "[DONE] wrote: {}  | new_questions: {}",
            report.outfile.display(),
            report.new_questions
        );
    }

    Ok(())
}
