// ABOUTME: Mesoplan CLI - generate and compare periodized training templates from the terminal
// ABOUTME: Thin front end over the progression engine with table and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 8-week linear block with a deload every 4th week
//! mesoplan-cli generate --model linear --weeks 8 --intensity 5 --volume 5 --deload-frequency 4
//!
//! # Peaking block as JSON, taper from week 5
//! mesoplan-cli generate --model realization --weeks 6 --intensity 5 --volume 7 --taper-start 5 --format json
//!
//! # All five models side by side
//! mesoplan-cli compare --weeks 10 --intensity 5 --volume 6
//!
//! # List models
//! mesoplan-cli models
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mesoplan::config::PlannerConfig;
use mesoplan::errors::AppResult;
use mesoplan::logging;
use tracing::error;

use commands::{BlockArgs, OptionArgs, OutputFormat};

#[derive(Parser)]
#[command(
    name = "mesoplan-cli",
    about = "Mesoplan periodization CLI",
    long_about = "Generate weekly intensity/volume prescriptions for a training block using linear, undulating, accumulation, transmutation, or realization periodization."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the template for one model
    Generate {
        /// Periodization model (linear, undulating, accumulation, transmutation, realization)
        #[arg(long, short = 'm', default_value = "linear")]
        model: String,

        #[command(flatten)]
        block: BlockArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Reject unknown model names and out-of-range inputs
        #[arg(long)]
        strict: bool,
    },

    /// Generate templates for every model with the same inputs
    Compare {
        #[command(flatten)]
        block: BlockArgs,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the available periodization models
    Models,
}

fn run(cli: Cli) -> AppResult<()> {
    let config = PlannerConfig::from_env();

    match cli.command {
        Command::Generate {
            model,
            block,
            options,
            format,
            strict,
        } => commands::generate::run(
            &model,
            &block,
            &options,
            format,
            strict || config.strict_models,
            &config,
        ),
        Command::Compare {
            block,
            options,
            format,
        } => commands::compare::run(&block, &options, format, &config),
        Command::Models => {
            helpers::display::display_models();
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_from_env(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "Command failed: {}", e.message);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
