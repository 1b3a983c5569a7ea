//! RWA Ledger Validator
//!
//! Command-line entry point: decodes a ledger state and a proposed change,
//! runs the validation engine, and prints the verdict.

mod cli;
mod output;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rwa_core::{Asset, GroupTransactionInput, RealWorldAssetsState, TransactionValidator};
use rwa_shared::{AppConfig, AppError, AppResult, LoggingConfig};

use crate::cli::{Cli, Command};
use crate::output::Verdict;

const EXIT_REJECTED: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", AppError::from(err));
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };
    init_tracing(&config.logging);

    let verdict = match run(&cli) {
        Ok(verdict) => verdict,
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Validation aborted");
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    if let Err(err) = output::render(std::io::stdout().lock(), &verdict, cli.pretty) {
        eprintln!("error: failed to write verdict: {err}");
        return ExitCode::from(EXIT_INPUT_ERROR);
    }

    if verdict.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.filter.as_str().into());

    // stdout carries the verdict; logs go to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            config
                .json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!config.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}

fn run(cli: &Cli) -> AppResult<Verdict> {
    let state: RealWorldAssetsState = read_json(&cli.state)?;
    info!(
        assets = state.portfolio.len(),
        transactions = state.transactions.len(),
        "Ledger state loaded"
    );
    let validator = TransactionValidator::new(&state);

    let outcome = match &cli.command {
        Command::Group { path } => {
            let input: GroupTransactionInput = read_json(path)?;
            validator.validate_group_input(&input).map(|_| ())
        }
        Command::Asset { path } => {
            let asset: Asset = read_json(path)?;
            validator.validate_fixed_income_asset(&asset)
        }
    };

    let verdict = Verdict::from(outcome);
    match verdict.code {
        None => info!("Change accepted"),
        Some(code) => info!(code, "Change rejected"),
    }
    Ok(verdict)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let bytes = std::fs::read(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| AppError::Decode {
        path: path.display().to_string(),
        source,
    })
}
