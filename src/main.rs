//! Atlas Explorer - browse the public country catalog from the terminal
//!
//! Binary entry point: argument parsing, logging, configuration and the
//! choice between the TUI and headless mode.

mod headless;

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use color_eyre::Result;
use tracing::{error, info};

use atlas_app::config::{self, Settings};
use atlas_app::ThemeMode;
use atlas_core::REGIONS;

use headless::{HeadlessOutcome, HeadlessRequest};

/// Atlas Explorer - browse the public country catalog
#[derive(Parser, Debug)]
#[command(name = "atlas", version)]
#[command(about = "Browse the public country catalog from the terminal", long_about = None)]
struct Args {
    /// Configuration file (defaults to <config dir>/atlas-explorer/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the catalog provider
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Only list countries in this region (headless)
    #[arg(
        long,
        requires = "headless",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(REGIONS)
    )]
    region: Option<String>,

    /// Only list countries whose name contains this text (headless)
    #[arg(long, requires = "headless")]
    search: Option<String>,

    /// Look up a single country by name instead of listing (headless)
    #[arg(long, requires = "headless", conflicts_with_all = ["region", "search"])]
    country: Option<String>,
}

impl Args {
    /// Command-line flags take precedence over the configuration file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.catalog.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            settings.catalog.request_timeout_secs = Some(secs);
        }
        if self.dark {
            settings.ui.theme = ThemeMode::Dark;
        }
    }

    fn headless_request(&self) -> HeadlessRequest {
        HeadlessRequest {
            region: self.region.clone(),
            search: self.search.clone(),
            country: self.country.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Log to file, the TUI owns the terminal
    atlas_core::logging::init()?;

    let config_path = args.config.clone().or_else(config::default_config_path);
    let mut settings = config::load_settings(config_path.as_deref());
    args.apply_overrides(&mut settings);
    info!(
        "Catalog provider: {} (timeout: {:?})",
        settings.catalog.base_url,
        settings.catalog.request_timeout()
    );

    let client = settings.catalog.build_client()?;

    if args.headless {
        let request = args.headless_request();
        let outcome = headless::run_headless(client, settings, request).await?;
        info!("Atlas Explorer exiting ({:?})", outcome);
        if outcome == HeadlessOutcome::Failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = atlas_tui::run(client, settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Atlas Explorer exiting");
    Ok(result?)
}
