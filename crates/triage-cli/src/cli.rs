//! CLI argument definitions for the vitals triage tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vitals-triage",
    version,
    about = "Vitals Triage - Rank patient measurement exports into a triage worklist",
    long_about = "Process a spreadsheet-based health-measurement export into a ranked\n\
                  triage worklist: per-patient alerts with a severity tier, a concise\n\
                  rationale, and a tiered SMS-style message."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a measurement export and print the triage worklist.
    Worklist(WorklistArgs),

    /// Print the clinical threshold table.
    Thresholds,
}

#[derive(Parser)]
pub struct WorklistArgs {
    /// Path to the CSV measurement export (header row first).
    #[arg(value_name = "EXPORT_FILE")]
    pub file: PathBuf,

    /// Output format for the worklist.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Pin the age-derivation reference date (YYYY-MM-DD) instead of "now".
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
