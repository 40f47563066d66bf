//! Parfait CLI - flavor stacking analysis from the command line.
//!
//! Parfait reads a menu file of directed stacking rules (one
//! `base -> topping` record per line) and reports how many ordered two-
//! and three-flavor combinations the rules admit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Parfait: flavor stacking analyzer for frozen dessert menus.
#[derive(Parser)]
#[command(name = "parfait")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count two-flavor combinations in a menu
    Pairs {
        /// Menu file: one `base -> topping` rule per line
        menu: PathBuf,

        /// Print only the count, not the combinations
        #[arg(short, long)]
        quiet: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Count three-flavor combinations in a menu
    Triples {
        /// Menu file: one `base -> topping` rule per line
        menu: PathBuf,

        /// Print only the count, not the combinations
        #[arg(short, long)]
        quiet: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check whether one flavor can follow another in a stack
    Check {
        /// Menu file: one `base -> topping` rule per line
        menu: PathBuf,

        /// Flavor at the bottom
        from: String,

        /// Candidate flavor to place above it
        to: String,
    },

    /// Print the stacking rules grouped by base flavor
    Show {
        /// Menu file: one `base -> topping` rule per line
        menu: PathBuf,
    },

    /// Show menu statistics
    Stats {
        /// Menu file: one `base -> topping` rule per line
        menu: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Pairs { menu, quiet, json } => cli::pairs::run(&menu, quiet, json),
        Commands::Triples { menu, quiet, json } => cli::triples::run(&menu, quiet, json),
        Commands::Check { menu, from, to } => cli::check::run(&menu, &from, &to),
        Commands::Show { menu } => cli::show::run(&menu),
        Commands::Stats { menu, json } => cli::stats::run(&menu, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
