//! CLI argument definitions for rowcard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowcard",
    version,
    about = "Render tabular records as styled cards driven by a JSON profile",
    long_about = "Render tabular records as styled cards driven by a JSON profile.\n\n\
                  Reads CSV or JSON rows, applies the profile's extraction patterns,\n\
                  conditional rules and style classes, and writes a render plan\n\
                  (header, global styles and one card per visible record) as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline over a data file and write the render plan.
    Render(RenderArgs),

    /// Generate a profile schema from the column headers of a data file.
    Schema(SchemaArgs),

    /// Report problems in a profile without rendering anything.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Data file (.csv or .json array of objects).
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Profile JSON describing fields, styles and rules.
    #[arg(long = "profile", short = 'p', value_name = "PROFILE")]
    pub profile: PathBuf,

    /// Write the render plan here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Compare rule literals ignoring case.
    #[arg(long = "case-insensitive-rules")]
    pub case_insensitive_rules: bool,

    /// Date printed in the document header (YYYY-MM-DD, default: today).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Process and report without writing the render plan.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Data file whose headers become fields.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Existing profile to keep metadata and styles from.
    #[arg(long = "profile", short = 'p', value_name = "BASE")]
    pub profile: Option<PathBuf>,

    /// Output file, or a directory to save `<template>_updated.json` into.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Profile JSON to check.
    #[arg(value_name = "PROFILE")]
    pub profile: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
