// ABOUTME: trainlog CLI - inspect and analyse a training-log JSON document
// ABOUTME: Summary, weekly and period breakdowns, rejected points and registered schemas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Overall metrics, sleep and open injuries
//! trainlog-cli --data log.json summary
//!
//! # Metrics for every Monday-aligned week
//! trainlog-cli --data log.json weeks
//!
//! # Calendar periods as JSON
//! trainlog-cli --data log.json --output json periods --duration quarter
//!
//! # Points that failed to ingest
//! trainlog-cli --data log.json errors
//!
//! # Registered record kinds and schema versions
//! trainlog-cli kinds
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use trainlog::config::{CliConfig, IntelligenceConfig, OutputFormat};
use trainlog::errors::{AppError, ErrorCode, ErrorResponse};
use trainlog::logging::LoggingConfig;
use trainlog::GroupByDuration;

#[derive(Parser)]
#[command(
    name = "trainlog-cli",
    about = "Training log analytics CLI",
    long_about = "Ingests a versioned training-log JSON document and reports mileage, tonnage, fatigue, sleep and injury analytics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Training-log JSON document (overrides TRAINLOG_DATA_PATH)
    #[arg(long, short = 'd', global = true)]
    data: Option<PathBuf>,

    /// Output format (overrides TRAINLOG_OUTPUT)
    #[arg(long, short = 'o', global = true, value_enum)]
    output: Option<OutputArg>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Totals for the whole log: metrics, sleep and open injuries
    Summary,

    /// Metrics for each Monday-aligned week
    Weeks {
        /// Only show the most recent N weeks
        #[arg(long)]
        last: Option<usize>,
    },

    /// Metrics for each non-empty calendar period
    Periods {
        /// Period length
        #[arg(long, value_enum, default_value = "month")]
        duration: DurationArg,

        /// Last day to include (YYYY-MM-DD), defaults to today
        #[arg(long)]
        until: Option<String>,
    },

    /// Points rejected during ingestion
    Errors,

    /// Registered record kinds and schema versions
    Kinds,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => Self::Text,
            OutputArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DurationArg {
    Week,
    Month,
    Quarter,
    Half,
    Year,
}

impl From<DurationArg> for GroupByDuration {
    fn from(arg: DurationArg) -> Self {
        match arg {
            DurationArg::Week => Self::OneWeek,
            DurationArg::Month => Self::OneMonth,
            DurationArg::Quarter => Self::ThreeMonths,
            DurationArg::Half => Self::SixMonths,
            DurationArg::Year => Self::OneYear,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().verbose(cli.verbose);
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let output = cli.output.map(OutputFormat::from);
    let config = match CliConfig::from_env() {
        Ok(config) => config.with_overrides(cli.data, output),
        Err(e) => return report_error(e, output),
    };
    debug!(?config, "Resolved CLI configuration");

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let app_error = match e.downcast::<AppError>() {
                Ok(app_error) => app_error,
                Err(other) => AppError::new(ErrorCode::Internal, format!("{other:#}")),
            };
            error!(code = ?app_error.code, "{app_error}");
            report_error(app_error, Some(config.output))
        }
    }
}

fn run(command: Command, config: &CliConfig) -> anyhow::Result<()> {
    let intelligence = IntelligenceConfig::global();
    match command {
        Command::Kinds => commands::log::kinds(config.output)?,
        Command::Errors => commands::log::errors(config)?,
        Command::Summary => commands::summary::run(config, intelligence)?,
        Command::Weeks { last } => commands::weeks::run(config, intelligence, last)?,
        Command::Periods { duration, until } => {
            let until = until.as_deref().map(helpers::parse_until).transpose()?;
            commands::periods::run(config, intelligence, duration.into(), until)?;
        }
    }
    Ok(())
}

fn report_error(error: AppError, output: Option<OutputFormat>) -> ExitCode {
    let code = u8::try_from(error.exit_code()).unwrap_or(1);
    if output == Some(OutputFormat::Json) {
        match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        eprintln!("Error: {error}");
    }
    ExitCode::from(code)
}
