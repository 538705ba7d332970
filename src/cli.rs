// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_input_path;
use crate::types::InputFormat;

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Order tasks by dependencies, then due date, then title.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML, or JSON with a `.json` extension).
    ///
    /// Default: `Taskdag.toml` in the current working directory.
    #[arg(long, short, value_name = "PATH", default_value_os_t = default_input_path())]
    pub input: PathBuf,

    /// Read the plan as `toml` or `json` regardless of its extension.
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format for the schedule.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Show due date and estimated hours next to each task (text output).
    #[arg(long)]
    pub details: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the task set, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One title per line.
    Text,
    /// `{"recommendedOrder": [...]}` or `{"error": ...}`.
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
