// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use godaddy_dns::{
    config::ProviderConfig, constants::PROVIDER_NAME, godaddy::GoDaddyProvider,
    zonefile::load_desired,
};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Reconcile DNS zones hosted at GoDaddy.
#[derive(Debug, Parser)]
#[command(name = "godaddy-dns", version, about)]
struct Cli {
    /// JSON credentials file; GODADDY_API_KEY / GODADDY_API_SECRET are used when absent
    #[arg(long, global = true)]
    creds: Option<PathBuf>,

    /// Entry to read from the credentials file
    #[arg(long, global = true, default_value = PROVIDER_NAME)]
    provider: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the zone's records as JSON
    Records { zone: String },
    /// Print the zone's nameservers
    Nameservers { zone: String },
    /// Show the corrections needed to reach the desired records
    Preview {
        zone: String,
        #[arg(long)]
        desired: PathBuf,
    },
    /// Apply the corrections needed to reach the desired records
    Push {
        zone: String,
        #[arg(long)]
        desired: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Corrections run one at a time, so a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

fn init_logging() {
    // Respects RUST_LOG, defaulting to INFO, and RUST_LOG_FORMAT=json|text
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
    }
}

async fn async_main(cli: Cli) -> Result<()> {
    init_logging();
    debug!("Logging initialized");

    let config = match &cli.creds {
        Some(path) => ProviderConfig::from_creds_file(path, &cli.provider)?,
        None => ProviderConfig::from_env().context("No --creds given and environment incomplete")?,
    };
    let provider = GoDaddyProvider::new(&config)?;

    match cli.command {
        Command::Records { zone } => {
            let records = provider.get_zone_records(&zone).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Nameservers { zone } => {
            for ns in provider.get_nameservers(&zone).await? {
                println!("{}", ns.name);
            }
        }
        Command::Preview { zone, desired } => {
            let desired = load_desired(&zone, &desired)?;
            let existing = provider.get_zone_records(&zone).await?;
            let corrections = provider.get_zone_records_corrections(&desired, &existing)?;
            if corrections.is_empty() {
                println!("{zone}: no changes");
            }
            for correction in &corrections {
                println!("{}", correction.msg);
            }
        }
        Command::Push { zone, desired } => {
            let desired = load_desired(&zone, &desired)?;
            let existing = provider.get_zone_records(&zone).await?;
            let corrections = provider.get_zone_records_corrections(&desired, &existing)?;

            let total = corrections.len();
            let mut failed = 0usize;
            for correction in corrections {
                let msg = correction.msg.clone();
                match correction.execute().await {
                    Ok(()) => println!("SUCCESS: {msg}"),
                    Err(e) => {
                        failed += 1;
                        error!(zone = %zone, error = %e, "Correction failed");
                        println!("FAILURE: {msg}: {e}");
                    }
                }
            }

            info!(zone = %zone, total, failed, "Push finished");
            if failed > 0 {
                anyhow::bail!("{failed} of {total} corrections failed for {zone}");
            }
        }
    }

    Ok(())
}
