//! Accent folding applied by `Inflector::slug`.

use std::mem;

use fancy_regex::Regex;

use crate::inflector::defaults::{RESET_TRANSLITERATION, TRANSLITERATION};
use crate::inflector::update::surround_merge;
use crate::pattern::{compile, quote, replace_all};

/// One (pattern, ASCII replacement) pair.
#[derive(Debug, Clone)]
pub struct TransliterationRule {
    pattern: String,
    replacement: String,
    regex: Regex,
}

impl TransliterationRule {
    /// Build a rule from a caller-supplied key.
    ///
    /// A key wrapped in slashes (`/ø|œ/`) is used as a raw pattern. Any other
    /// key is treated as a set of characters, each of which maps to
    /// `replacement`.
    ///
    /// ```
    /// use wordform::TransliterationRule;
    ///
    /// let rule = TransliterationRule::from_key("åä", "a").unwrap();
    /// assert_eq!(rule.pattern(), "å|ä");
    /// ```
    pub fn from_key(key: &str, replacement: &str) -> Result<Self, fancy_regex::Error> {
        Self::from_pattern(&normalize_key(key), replacement)
    }

    /// Build a rule from a raw pattern.
    pub fn from_pattern(pattern: &str, replacement: &str) -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            regex: compile(pattern, false)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Turn a bare character sequence into an alternation of its characters.
fn normalize_key(key: &str) -> String {
    if let Some(raw) = key
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
    {
        return raw.to_string();
    }
    key.chars()
        .map(|c| quote(c.encode_utf8(&mut [0; 4])).into_owned())
        .collect::<Vec<_>>()
        .join("|")
}

/// The ordered transliteration table.
#[derive(Debug, Clone)]
pub struct TransliterationMap {
    rules: Vec<TransliterationRule>,
}

impl TransliterationMap {
    /// The full table an inflector starts with.
    pub fn extended() -> Self {
        Self::from_table(TRANSLITERATION)
    }

    /// The reduced table restored by a reset.
    pub fn reduced() -> Self {
        Self::from_table(RESET_TRANSLITERATION)
    }

    fn from_table(table: &[(&str, &str)]) -> Self {
        let rules = table
            .iter()
            .map(|(pattern, replacement)| {
                TransliterationRule::from_pattern(pattern, replacement)
                    .expect("default transliteration pattern should compile")
            })
            .collect();
        Self { rules }
    }

    /// Merge `added` so it takes precedence over entries with the same pattern.
    pub(crate) fn merge(&mut self, added: Vec<TransliterationRule>) {
        let existing = mem::take(&mut self.rules);
        self.rules = surround_merge(added, existing, TransliterationRule::pattern);
    }

    /// Apply every rule in order.
    pub fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, rule| {
            replace_all(&rule.regex, &acc, &rule.replacement).into_owned()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransliterationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for TransliterationMap {
    fn default() -> Self {
        Self::extended()
    }
}
