// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `depwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depwatch",
    version,
    about = "Watch files by content hash and report which dependents need updating.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// If omitted, `Depwatch.toml` in the current directory is used when it
    /// exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dependency source (`{file: [dependents]}`; JSON, or TOML by extension).
    ///
    /// Overrides `[config].dependencies`.
    #[arg(long, value_name = "PATH")]
    pub deps: Option<PathBuf>,

    /// Time between polling cycles, e.g. `5s`, `500ms`.
    ///
    /// Overrides `[config].interval`.
    #[arg(long, value_name = "DURATION")]
    pub interval: Option<String>,

    /// Also poll files that only appear as dependents.
    #[arg(long)]
    pub watch_dependents: bool,

    /// Wake up early when the OS reports a change to a watched file.
    #[arg(long)]
    pub wake_on_fs_events: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate the dependency graph, print it, and exit.
    #[arg(long)]
    pub dry_run: bool,
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
