//! CLI argument definitions for `rwa-validator`.
//!
//! # Examples
//!
//! ```bash
//! # Validate a proposed group transaction
//! rwa-validator --state state.json group fees-payment.json
//!
//! # Validate a fixed-income asset before admission
//! rwa-validator --state state.json asset t-bill.json --pretty
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate proposed changes against an RWA ledger document.
///
/// Prints a JSON verdict to stdout. Exits 0 when accepted, 1 when rejected
/// and 2 when the input cannot be read.
#[derive(Debug, Parser)]
#[command(name = "rwa-validator", author, version, about)]
pub struct Cli {
    /// Ledger state document (JSON).
    #[arg(long, value_name = "FILE")]
    pub state: PathBuf,

    /// Pretty-print the verdict.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to validate.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a group transaction about to be appended to the log.
    Group {
        /// Group transaction document (JSON).
        path: PathBuf,
    },
    /// Validate a fixed-income asset about to be admitted to the portfolio.
    Asset {
        /// Asset document (JSON).
        path: PathBuf,
    },
}
