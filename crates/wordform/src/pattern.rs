//! Regex helpers shared by the inflector and the text utilities.
//!
//! Patterns are compiled with `fancy-regex` because several default rules need
//! lookbehind and backreferences. Match-time failures (backtracking limits) are
//! logged and treated as "no match" so inflection stays total.

use std::borrow::Cow;

use fancy_regex::{Captures, Error, Regex};
use tracing::warn;

/// Compile `pattern`, optionally matching case-insensitively.
pub(crate) fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex, Error> {
    if case_insensitive {
        Regex::new(&format!("(?i){pattern}"))
    } else {
        Regex::new(pattern)
    }
}

/// Escape every regex metacharacter in `text`.
///
/// ```
/// assert_eq!(wordform::quote("{:name}"), r"\{:name\}");
/// ```
pub fn quote(text: &str) -> Cow<'_, str> {
    fancy_regex::escape(text)
}

/// Escape `$` so a replacement string is inserted literally.
pub(crate) fn literal(replacement: &str) -> Cow<'_, str> {
    if replacement.contains('$') {
        Cow::Owned(replacement.replace('$', "$$"))
    } else {
        Cow::Borrowed(replacement)
    }
}

pub(crate) fn is_match(regex: &Regex, text: &str) -> bool {
    regex.is_match(text).unwrap_or_else(|err| {
        warn!(pattern = regex.as_str(), %err, "regex failed while matching");
        false
    })
}

pub(crate) fn captures<'t>(regex: &Regex, text: &'t str) -> Option<Captures<'t>> {
    regex.captures(text).unwrap_or_else(|err| {
        warn!(pattern = regex.as_str(), %err, "regex failed while capturing");
        None
    })
}

/// Replace every match of `regex`, expanding `$n` group references.
pub(crate) fn replace_all<'t>(regex: &Regex, text: &'t str, replacement: &str) -> Cow<'t, str> {
    regex
        .try_replacen(text, 0, replacement)
        .unwrap_or_else(|err| {
            warn!(pattern = regex.as_str(), %err, "regex failed while replacing");
            Cow::Borrowed(text)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_dollar_signs() {
        assert_eq!(literal("a$1"), "a$$1");
        assert!(matches!(literal("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn case_insensitive_compile_prefixes_flag() {
        let regex = compile("abc$", true).unwrap();
        assert!(is_match(&regex, "xABC"));
        let regex = compile("abc$", false).unwrap();
        assert!(!is_match(&regex, "xABC"));
    }

    #[test]
    fn replace_all_expands_groups() {
        let regex = compile("(quiz)$", true).unwrap();
        assert_eq!(replace_all(&regex, "Quiz", "${1}zes"), "Quizzes");
    }
}
