//! Error types for rule updates and rule-file loading.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::inflector::RuleCategory;

/// An error raised while updating inflection rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule pattern supplied by the caller does not compile.
    #[error("invalid {category} pattern '{pattern}': {source}")]
    InvalidPattern {
        category: RuleCategory,
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    /// The category name matches none of the rule categories.
    #[error("unknown rule category '{name}'{}", format_suggestions(suggestions))]
    UnknownCategory {
        name: String,
        suggestions: Vec<String>,
    },
}

/// Errors that occur while loading a rule file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the rule file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid rule document.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The document parsed but one of its rules was rejected.
    #[error("{path}: {source}")]
    Rules {
        path: PathBuf,
        #[source]
        source: RuleError,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names of 3 chars or fewer
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
