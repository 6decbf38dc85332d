//! Miette diagnostic wrapper for rule file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed rule files.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid rule file: {message}")]
#[diagnostic(
    code(wordform::rule_file),
    help("rule files are JSON objects with transliteration, uninflected, singular and plural sections")
)]
pub struct RuleFileDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl RuleFileDiagnostic {
    /// Create a diagnostic from a JSON error position with source context.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        RuleFileDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
        }
    }
}
