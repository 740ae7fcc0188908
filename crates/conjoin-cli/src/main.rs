//! conjoin CLI entry point.
//!
//! Provides command-line tools for list formatting:
//! - `conjoin format` - Format a list with builtin or file-provided patterns
//! - `conjoin check` - Validate list pattern data files
//! - `conjoin keys` - Show which pattern key each type and style uses

mod commands;
mod data;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_format, run_keys, CheckArgs, FormatArgs, KeysArgs};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// List formatting tools.
#[derive(Debug, Parser)]
#[command(name = "conjoin")]
#[command(about = "Locale-aware list formatting tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true, env = "CONJOIN_COLOR")]
    pub color: ColorWhen,

    /// Log pattern resolution to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a list of items
    Format(FormatArgs),
    /// Check list pattern data files
    Check(CheckArgs),
    /// Show the pattern key for each list type and style
    Keys(KeysArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr subscriber. `--verbose` enables debug events from the
/// library; otherwise `RUST_LOG` decides.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("conjoin=debug,conjoin_cli=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Check(args) => run_check(args),
        Commands::Keys(args) => run_keys(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
