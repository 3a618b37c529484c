//! Changemaker command line.
//!
//! Main entry point: loads configuration, calculates change, prints it.
//!
//! Usage: changemaker --bill 19.99 --paid 50

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changemaker_core::change::{ChangeBreakdown, ChangeService, DenominationSet, render_breakdown};
use changemaker_shared::{AppConfig, AppError, OutputFormat};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the breakdown
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let (code, exit_code) = err
                .downcast_ref::<AppError>()
                .map_or(("INTERNAL_ERROR", 1), |app| (app.error_code(), app.exit_code()));
            error!(code, "{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let (note_values, coin_values) = cli.denominations(&config.denominations);
    let notes = DenominationSet::notes(note_values).map_err(AppError::from)?;
    let coins = DenominationSet::coins(coin_values).map_err(AppError::from)?;

    for set in [&notes, &coins] {
        if !set.contains_unit() {
            warn!(
                kind = %set.kind(),
                values = ?set.values(),
                "Denomination set has no unit value, some amounts cannot be made"
            );
        }
    }

    debug!(bill = %cli.bill, paid = %cli.paid, "Calculating change");

    let breakdown = ChangeService::calculate_change(&notes, &coins, cli.bill, cli.paid)
        .map_err(|err| {
            debug!(code = err.error_code(), "Change calculation rejected");
            AppError::from(err)
        })?;

    info!(
        change = %breakdown.change(),
        notes = breakdown.notes().len(),
        coins = breakdown.coins().len(),
        pieces = breakdown.piece_count(),
        "Change calculated"
    );

    render(
        &breakdown,
        cli.output_format(&config.display),
        cli.symbol(&config.display),
    )
}

fn render(breakdown: &ChangeBreakdown, format: OutputFormat, symbol: &str) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_breakdown(breakdown, symbol)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(breakdown).context("failed to serialize breakdown")?;
            json.push('\n');
            Ok(json)
        }
    }
}
