mod args;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filerev_core::{
    load_config, validate_config, Config, FileGroup, FsRelocator, Manifest, Orchestrator,
};

use args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let default_filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => Config::default(),
    };

    cli.apply_overrides(&mut config);

    if !cli.files.is_empty() {
        config.groups.push(FileGroup {
            sources: cli.files.clone(),
            destination: cli.dest.clone(),
            expanded_glob: cli.expand,
        });
    }

    let plan = validate_config(&config).context("Configuration validation failed")?;

    if config.groups.is_empty() {
        bail!("No files to revision: pass FILES or configure [[groups]]");
    }

    let manifest = match &cli.previous_summary {
        Some(path) => load_previous(path).await?,
        None => Manifest::new(),
    };

    info!(
        "Revisioning {} group(s) with {} (length {})",
        config.groups.len(),
        plan.algorithm,
        plan.length
    );

    let orchestrator = Orchestrator::new(FsRelocator::new(config.relocator.clone()), plan)
        .with_hash_buffer_size(config.relocator.buffer_size);
    let report = orchestrator
        .run(&config.groups, manifest)
        .await
        .context("Revision failed")?;

    info!(
        "Revisioned {} file(s), manifest holds {} entries",
        report.total_files(),
        report.manifest.len()
    );

    if cli.print {
        let json = report
            .manifest
            .to_pretty_json()
            .context("Failed to render manifest")?;
        println!("{}", json);
    }

    Ok(())
}

/// A missing previous summary starts a fresh manifest.
async fn load_previous(path: &Path) -> Result<Manifest> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check previous summary {:?}", path))?;
    if !exists {
        info!("No previous summary at {:?}, starting empty", path);
        return Ok(Manifest::new());
    }
    Manifest::load(path)
        .await
        .with_context(|| format!("Failed to load previous summary {:?}", path))
}
