//! Binary entry point for htmlize.
//!
//! This binary provides the CLI interface for the htmlize renderer.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{InputSource, RenderOptions};
use htmlize::config::HtmlizeConfig;
use htmlize::observability::{self, InitOptions};

/// htmlize - render values as HTML fragments.
#[derive(Parser)]
#[command(name = "htmlize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document (or plain text) as HTML.
    Render {
        /// Input document; read from --file or stdin when omitted.
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,

        /// Read the input from a file.
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Treat the input as plain text instead of JSON.
        #[arg(long)]
        text: bool,

        /// Time the rendering using the configured repetitions.
        #[arg(long)]
        timed: bool,

        /// Number of timed repetitions (implies --timed).
        #[arg(long)]
        reps: Option<i64>,
    },

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match HtmlizeConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_command(cli: Cli, config: &HtmlizeConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Render {
            input,
            file,
            text,
            timed,
            reps,
        } => {
            let source = match (input, file) {
                (Some(input), _) => InputSource::Inline(input),
                (None, Some(path)) => InputSource::File(path),
                (None, None) => InputSource::Stdin,
            };
            commands::cmd_render(config, source, RenderOptions { text, timed, reps })
        },

        Commands::Config { show } => commands::cmd_config(config, show),
    }
}
