//! CLI command implementations.

mod inflect;
mod insert;
mod rules;
mod tokenize;

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Report};
use tracing::debug;
use wordform::{Inflector, RuleFile};

use crate::output::RuleFileDiagnostic;

pub use inflect::{run_inflect, InflectArgs};
pub use insert::{run_insert, InsertArgs};
pub use rules::{run_rules, RulesArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};

/// Build an inflector, applying the rule file at `rules` if given.
///
/// JSON errors are reported as source-annotated diagnostics.
fn load_inflector(rules: Option<&Path>) -> Result<Inflector, Report> {
    let mut inflector = Inflector::new();
    let Some(path) = rules else {
        return Ok(inflector);
    };

    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read rule file {}: {}", path.display(), e))?;
    let file = RuleFile::from_json(&content).map_err(|e| {
        RuleFileDiagnostic::new(path, &content, e.line(), e.column(), &e.to_string())
    })?;
    let sections = inflector
        .apply_rule_file(file)
        .map_err(|e| miette!("{}: {}", path.display(), e))?;
    debug!(path = %path.display(), sections, "applied rule file");
    Ok(inflector)
}

/// Print a JSON value to stdout.
fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("JSON serialization should not fail")
    );
}
