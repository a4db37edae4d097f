#![warn(clippy::pedantic)]

//! Command-line front end for the one-rep max calculator.
//!
//! ```bash
//! # Estimate the one-rep max from 100 kg lifted for 5 reps
//! liftcalc calculate --weight 100 --reps 5
//!
//! # Same in pounds with the Brzycki formula, printed as JSON
//! liftcalc calculate --weight 225 --reps 8 --unit lb --formula brzycki --json
//!
//! # Reps achievable at 80 % of the one-rep max
//! liftcalc reps --percentage 80
//! ```

mod log;
mod report;
mod settings;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use ::log::{LevelFilter, debug};
use anyhow::Context;
use clap::{Parser, Subcommand};
use liftcalc_domain::{
    FieldValue, Formula, OneRepMaxForm, WeightUnit, estimate_reps_at_percentage,
    process_one_rep_max_calculation, weight_at_percentage,
};

use settings::{FileSettings, Output, Settings, SettingsRepository};

#[derive(Parser)]
#[command(
    name = "liftcalc",
    about = "One-rep max calculator",
    long_about = "Estimate one-rep maxes, training zones and percentage charts from a submaximal set."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (JSON) with default unit, formula and output format
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the one-rep max and derive training zones and a percentage chart
    Calculate {
        /// Weight lifted
        #[arg(long, allow_negative_numbers = true)]
        weight: String,

        /// Number of reps performed
        #[arg(long, allow_negative_numbers = true)]
        reps: String,

        /// Weight unit (kg, lb)
        #[arg(long)]
        unit: Option<WeightUnit>,

        /// Formula used for the primary estimate (epley, brzycki, lombardi)
        #[arg(long)]
        formula: Option<Formula>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate the reps achievable at a percentage of the one-rep max
    Reps {
        #[arg(long, allow_negative_numbers = true)]
        percentage: f64,
    },

    /// Calculate the weight at a percentage of the one-rep max
    Weight {
        #[arg(long, allow_negative_numbers = true)]
        one_rep_max: f64,

        #[arg(long, allow_negative_numbers = true)]
        percentage: f64,
    },

    /// List the available formulas
    Formulas,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = log::init(level) {
        eprintln!("error: failed to initialize logger: {err}");
    }

    match run(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = FileSettings::new(cli.config.as_deref()).read_settings()?;
    debug!("using settings {settings:?}");

    match cli.command {
        Command::Calculate {
            weight,
            reps,
            unit,
            formula,
            json,
        } => {
            let form = form(&settings, weight, reps, unit, formula);
            let result = process_one_rep_max_calculation(Some(&form))?;
            if json || settings.output == Output::Json {
                serde_json::to_writer_pretty(&mut *out, &result)
                    .context("failed to serialize result")?;
                writeln!(out)?;
            } else {
                report::write_result(out, &result)?;
            }
        }
        Command::Reps { percentage } => {
            writeln!(out, "{}", estimate_reps_at_percentage(percentage)?)?;
        }
        Command::Weight {
            one_rep_max,
            percentage,
        } => {
            writeln!(out, "{:.1}", weight_at_percentage(one_rep_max, percentage)?)?;
        }
        Command::Formulas => report::write_formulas(out)?,
    }

    Ok(())
}

fn form(
    settings: &Settings,
    weight: String,
    reps: String,
    unit: Option<WeightUnit>,
    formula: Option<Formula>,
) -> OneRepMaxForm {
    OneRepMaxForm {
        weight: FieldValue::Text(weight),
        weight_unit: unit.unwrap_or(settings.weight_unit),
        reps: FieldValue::Text(reps),
        formula: formula.unwrap_or(settings.formula),
    }
}
