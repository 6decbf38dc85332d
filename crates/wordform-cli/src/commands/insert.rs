//! Implementation of the `wordform insert` command.

use clap::{Args, ValueEnum};
use serde::Serialize;
use wordform::{insert, CleanMethod, CleanOptions, Data, Format, InsertOptions, Value};

use super::print_json;

/// Arguments for the insert command.
#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Template containing placeholders
    #[arg(long, required = true)]
    pub template: String,

    /// Named values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val, conflicts_with = "args")]
    pub params: Vec<(String, String)>,

    /// Positional values, filling `?` marks in order (repeatable)
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Text in front of a placeholder name
    #[arg(long, default_value = "{:")]
    pub before: String,

    /// Text after a placeholder name
    #[arg(long, default_value = "}")]
    pub after: String,

    /// Text that keeps the following placeholder from being replaced
    #[arg(long)]
    pub escape: Option<String>,

    /// Placeholder pattern, with %s standing for the key
    #[arg(long)]
    pub format: Option<String>,

    /// Remove placeholders left without a value
    #[arg(long, value_enum)]
    pub clean: Option<CleanMode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// How leftover placeholders are cleaned.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CleanMode {
    Text,
    Html,
}

/// JSON output for insert results.
#[derive(Serialize)]
pub struct InsertResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Integers become numbers, everything else a string.
fn parse_value(raw: String) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(raw),
    }
}

/// Run the insert command.
pub fn run_insert(args: InsertArgs) -> miette::Result<i32> {
    let data = if args.args.is_empty() {
        Data::Named(
            args.params
                .into_iter()
                .map(|(key, value)| (key, parse_value(value)))
                .collect(),
        )
    } else {
        Data::Positional(args.args.into_iter().map(parse_value).collect())
    };

    let options = InsertOptions::builder()
        .before(args.before)
        .after(args.after)
        .maybe_escape(args.escape)
        .maybe_format(args.format.map(Format::Pattern))
        .maybe_clean(args.clean.map(|mode| match mode {
            CleanMode::Text => CleanOptions::default(),
            CleanMode::Html => CleanOptions::builder().method(CleanMethod::Html).build(),
        }))
        .build();

    match insert(&args.template, data, &options) {
        Ok(result) => {
            if args.json {
                print_json(&InsertResult { result });
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Insert error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
