//! wordform CLI entry point.
//!
//! Provides command-line access to the wordform library:
//! - `wordform inflect` - Pluralize, singularize and convert naming styles
//! - `wordform insert` - Fill placeholders in a template
//! - `wordform tokenize` - Split a string outside of bounds
//! - `wordform rules` - List a rule table

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_inflect, run_insert, run_rules, run_tokenize, InflectArgs, InsertArgs, RulesArgs,
    TokenizeArgs,
};
use tracing_subscriber::EnvFilter;

/// Word inflection and template tools.
#[derive(Debug, Parser)]
#[command(name = "wordform")]
#[command(about = "Word inflection and template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log rule loading and updates to stderr
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
    /// Inflect one or more words
    Inflect(InflectArgs),
    /// Fill placeholders in a template
    Insert(InsertArgs),
    /// Split a string on a separator outside of bounds
    Tokenize(TokenizeArgs),
    /// List the entries of a rule table
    Rules(RulesArgs),
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

/// Install a stderr subscriber when `--verbose` is given or `RUST_LOG` is set.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wordform=debug")
    } else {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        filter
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

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
        Commands::Inflect(args) => run_inflect(args),
        Commands::Insert(args) => run_insert(args),
        Commands::Tokenize(args) => run_tokenize(args),
        Commands::Rules(args) => run_rules(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
