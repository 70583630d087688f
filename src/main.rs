use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tagwatch::config::DEFAULT_CONFIG_PATH;
use tagwatch::error::ConfigError;
use tagwatch::{aggregate, tui, AllowList, Config};

#[derive(Parser)]
#[command(name = "tagwatch")]
#[command(about = "Release and tag watcher for GitHub repositories and Docker Hub images")]
#[command(version)]
struct Cli {
    /// Browse results in an interactive list instead of printing them
    #[arg(short, long)]
    interactive: bool,

    /// GitHub API token (overrides any token configured on a provider)
    #[arg(long, value_name = "TOKEN")]
    github_token: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Comma-separated project names to restrict the run to (e.g. redis,rancher)
    #[arg(short, long, value_name = "NAMES")]
    projects: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only initialize logging for plain output; the interactive selector
    // runs in raw mode and stdout logging would corrupt it
    if !cli.interactive {
        init_logging(cli.verbose)?;
        info!("Starting tagwatch v{}", env!("CARGO_PKG_VERSION"));
    }

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::NotFound { path }) => {
            Config::template()
                .save(&path)
                .context("failed to write config template")?;
            println!("Config file generated: {}", path.display());
            println!("Edit it with your providers and projects, then run tagwatch again.");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to load configuration"),
    };

    let allow = cli
        .projects
        .as_deref()
        .map(AllowList::from_csv)
        .unwrap_or_default();

    let results = aggregate(&config, &allow, cli.github_token.as_deref())
        .await
        .context("failed to fetch releases")?;

    if cli.interactive {
        if let Some(choice) = tui::select("Tracked releases", &results.tag_names())? {
            println!("{}", choice);
        }
    } else {
        for name in results.tag_names() {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
