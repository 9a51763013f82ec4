//! afsah-export - render the landing page to a static HTML file.
//!
//! Usage: `afsah-export [--config site.toml] [--out dist/index.html]`

use std::path::PathBuf;
use std::process::ExitCode;

use afsah_landing::config::SiteConfig;
use afsah_landing::export_landing;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "afsah-export", version, about = "Render the Afsah Institute landing page to static HTML")]
struct Args {
    /// Site config (TOML); defaults apply when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output file, overrides `out` from the config
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(out) = args.out {
        config.out = out;
    }

    info!(
        "Rendering landing page v{} -> {}",
        env!("CARGO_PKG_VERSION"),
        config.out.display()
    );
    let bytes = export_landing(&config).context("exporting landing page")?;
    info!("Wrote {} bytes to {}", bytes, config.out.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for shell pipelines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
