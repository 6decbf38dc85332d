//! Implementation of the `wordform inflect` command.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;
use wordform::Inflector;

use super::{load_inflector, print_json};
use crate::output::table::{format_inflection_table, InflectionRow};

/// Arguments for the inflect command.
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Operation to apply
    #[arg(value_enum)]
    pub operation: Operation,

    /// Words to inflect
    #[arg(required = true)]
    pub words: Vec<String>,

    /// JSON rule file merged into the default rules
    #[arg(long, env = "WORDFORM_RULES")]
    pub rules: Option<PathBuf>,

    /// Lower-case the first letter when camelizing
    #[arg(long)]
    pub lower: bool,

    /// Replacement for whitespace when building slugs
    #[arg(long, default_value = "-")]
    pub replacement: String,

    /// Separator split on when humanizing
    #[arg(long, default_value = "_")]
    pub separator: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// An inflection operation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Operation {
    Pluralize,
    Singularize,
    Camelize,
    Underscore,
    Slug,
    Humanize,
    Tableize,
    Classify,
}

/// JSON output for one inflected word.
#[derive(Serialize)]
struct InflectionJson<'a> {
    input: &'a str,
    output: &'a str,
}

fn apply(inflector: &Inflector, args: &InflectArgs, word: &str) -> String {
    match args.operation {
        Operation::Pluralize => inflector.pluralize(word),
        Operation::Singularize => inflector.singularize(word),
        Operation::Camelize => inflector.camelize(word, !args.lower),
        Operation::Underscore => inflector.underscore(word),
        Operation::Slug => inflector.slug(word, &args.replacement),
        Operation::Humanize => inflector.humanize(word, &args.separator),
        Operation::Tableize => inflector.tableize(word),
        Operation::Classify => inflector.classify(word),
    }
}

/// Run the inflect command.
pub fn run_inflect(args: InflectArgs) -> miette::Result<i32> {
    let inflector = match load_inflector(args.rules.as_deref()) {
        Ok(inflector) => inflector,
        Err(report) => {
            eprintln!("{:?}", report);
            return Ok(exitcode::DATAERR);
        }
    };

    let rows: Vec<InflectionRow> = args
        .words
        .iter()
        .map(|word| InflectionRow {
            input: word.clone(),
            output: apply(&inflector, &args, word),
        })
        .collect();

    if args.json {
        let json: Vec<InflectionJson<'_>> = rows
            .iter()
            .map(|row| InflectionJson {
                input: &row.input,
                output: &row.output,
            })
            .collect();
        print_json(&json);
    } else if let [row] = rows.as_slice() {
        println!("{}", row.output);
    } else {
        println!("{}", format_inflection_table(&rows));
    }
    Ok(exitcode::OK)
}
