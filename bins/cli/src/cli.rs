//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rust_decimal::Decimal;

use changemaker_shared::{DenominationConfig, DisplayConfig, OutputFormat};

/// Work out which notes and coins to hand back as change.
#[derive(Debug, Parser)]
#[command(name = "changemaker", version, about)]
pub struct Cli {
    /// Amount owed, e.g. 19.99.
    #[arg(long, allow_negative_numbers = true)]
    pub bill: Decimal,

    /// Amount handed over by the customer, e.g. 50.00.
    #[arg(long, allow_negative_numbers = true)]
    pub paid: Decimal,

    /// Note face values in whole units, comma separated (overrides config).
    #[arg(long, value_delimiter = ',')]
    pub notes: Option<Vec<u32>>,

    /// Coin face values in minor units, comma separated (overrides config).
    #[arg(long, value_delimiter = ',')]
    pub coins: Option<Vec<u32>>,

    /// Configuration file layered over config/default.toml.
    #[arg(short, long, env = "CHANGEMAKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Currency symbol printed before amounts (overrides config).
    #[arg(long)]
    pub symbol: Option<String>,

    /// Print the breakdown as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Note and coin face values, preferring the command line over config.
    pub fn denominations(&self, config: &DenominationConfig) -> (Vec<u32>, Vec<u32>) {
        (
            self.notes.clone().unwrap_or_else(|| config.notes.clone()),
            self.coins.clone().unwrap_or_else(|| config.coins.clone()),
        )
    }

    /// `--json` wins over the configured format.
    pub fn output_format(&self, display: &DisplayConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            display.format
        }
    }

    pub fn symbol<'a>(&'a self, display: &'a DisplayConfig) -> &'a str {
        self.symbol.as_deref().unwrap_or(display.currency_symbol.as_str())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "changemaker=info",
            1 => "changemaker=debug",
            _ => "changemaker=trace",
        }
    }
}
