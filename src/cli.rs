// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `incdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "incdag",
    version,
    about = "Compute or check a dependency-respecting order for included files.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to scan for source files (flat, no recursion).
    #[arg(value_name = "DIR")]
    pub dir: String,

    /// File extension selecting which directory entries are catalogued.
    #[arg(long, value_name = "EXT", default_value = "h")]
    pub ext: String,

    /// Check an externally supplied order instead of computing one.
    ///
    /// PATH is a file of whitespace-separated file ids (`-` for stdin).
    /// Ids are the dense zero-based numbers assigned in discovery order;
    /// run without `--check` first to see the catalog.
    #[arg(long, value_name = "PATH")]
    pub check: Option<String>,

    /// Print the dependency graph in Graphviz DOT format and exit.
    #[arg(long)]
    pub dump_graph: bool,

    /// Output format for the computed order / check result.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `INCDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Rendering of results on stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
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
