//! A single compiled inflection rule.

use fancy_regex::Regex;

use crate::pattern::{compile, is_match, replace_all};

/// How a rule pattern treats letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Insensitive,
    Sensitive,
}

/// An ordered (pattern, replacement) pair.
///
/// The replacement may reference capture groups as `$1` or `${1}`; a group
/// that did not take part in the match expands to the empty string.
///
/// ```
/// use wordform::Rule;
///
/// let rule = Rule::new("(quiz)$", "${1}zes").unwrap();
/// assert_eq!(rule.apply("Quiz").as_deref(), Some("Quizzes"));
/// assert_eq!(rule.apply("post"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    replacement: String,
    case: CaseMode,
    regex: Regex,
}

impl Rule {
    /// Compile a case-insensitive rule.
    pub fn new(pattern: &str, replacement: &str) -> Result<Rule, fancy_regex::Error> {
        Rule::with_case(pattern, replacement, CaseMode::Insensitive)
    }

    /// Compile a rule with an explicit case mode.
    pub fn with_case(
        pattern: &str,
        replacement: &str,
        case: CaseMode,
    ) -> Result<Rule, fancy_regex::Error> {
        let regex = compile(pattern, case == CaseMode::Insensitive)?;
        Ok(Rule {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            case,
            regex,
        })
    }

    /// The pattern source as written, without the case flag.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    /// Apply this rule, returning `None` when the pattern does not match.
    pub fn apply(&self, word: &str) -> Option<String> {
        if is_match(&self.regex, word) {
            Some(replace_all(&self.regex, word, &self.replacement).into_owned())
        } else {
            None
        }
    }
}
