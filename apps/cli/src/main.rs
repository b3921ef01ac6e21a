//! `bundle` — build a distributable mod-loader bundle
//!
//! Runs the whole pipeline against the standard project layout under the
//! current directory (`sources/mods.yml`, `template/`, `deployment/`).
//! Takes no flags beyond `--help`/`--version` and exits non-zero on any
//! fatal error.

use anyhow::Context;
use clap::Parser;
use tracing::{error, Level};

use bundler::{deploy, BundleConfig};

#[derive(Parser)]
#[command(name = "bundle")]
#[command(about = "Build and archive a mod-loader distribution bundle")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = BundleConfig::default();
    deploy(&config)
        .inspect_err(|e| error!(category = e.category(), "Bundle build failed: {}", e))
        .context("failed to build deployment bundle")
}
