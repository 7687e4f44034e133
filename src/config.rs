//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

/// File used by save and load when nothing else is configured
pub const DEFAULT_FILE: &str = "expenses.csv";

/// Settings for an interactive session
#[derive(Debug, Parser)]
#[command(
    name = "expense-ledger",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Keeps a list of expenses for the current session, reports the total and \
                  the largest expense, and saves to or loads from a CSV file."
)]
pub struct Config {
    /// CSV file to save to and load from
    #[arg(short, long, env = "EXPENSE_LEDGER_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,
}
