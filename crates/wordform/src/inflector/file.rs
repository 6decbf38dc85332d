//! JSON rule files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::inflector::engine::Inflector;
use crate::inflector::error::{LoadError, RuleError};
use crate::inflector::update::{RuleUpdate, TableUpdate};

/// Rule additions read from a JSON document.
///
/// Sections are optional. `singular` and `plural` accept either a list of
/// `[pattern, replacement]` pairs or an object with `rules`, `irregular` and
/// `uninflected` keys.
///
/// ```
/// use wordform::RuleFile;
///
/// let file = RuleFile::from_json(r#"{
///     "uninflected": ["pokemon"],
///     "plural": { "irregular": [["cactus", "cacti"]] }
/// }"#).unwrap();
/// assert_eq!(file.into_updates().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub transliteration: Vec<(String, String)>,

    #[serde(default)]
    pub uninflected: Vec<String>,

    pub singular: Option<TableUpdate>,

    pub plural: Option<TableUpdate>,
}

impl RuleFile {
    pub fn from_json(content: &str) -> Result<RuleFile, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The non-empty sections as updates, in the order they are applied.
    pub fn into_updates(self) -> Vec<RuleUpdate> {
        let mut updates = Vec::new();
        if !self.transliteration.is_empty() {
            updates.push(RuleUpdate::Transliteration(self.transliteration));
        }
        if !self.uninflected.is_empty() {
            updates.push(RuleUpdate::Uninflected(self.uninflected));
        }
        if let Some(singular) = self.singular.filter(|table| !table.is_empty()) {
            updates.push(RuleUpdate::Singular(singular));
        }
        if let Some(plural) = self.plural.filter(|table| !table.is_empty()) {
            updates.push(RuleUpdate::Plural(plural));
        }
        updates
    }
}

impl Inflector {
    /// Load a JSON rule file and apply it.
    ///
    /// Returns the number of sections applied.
    ///
    /// # Example
    ///
    /// ```ignore
    /// inflector.load_rules("config/inflections.json")?;
    /// ```
    pub fn load_rules(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file = RuleFile::from_json(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
        let count = self
            .apply_rule_file(file)
            .map_err(|source| LoadError::Rules {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), sections = count, "loaded rule file");
        Ok(count)
    }

    /// Apply every section of `file`.
    ///
    /// Sections are applied one at a time, so an error in a later section
    /// leaves the earlier ones in place.
    pub fn apply_rule_file(&mut self, file: RuleFile) -> Result<usize, RuleError> {
        let updates = file.into_updates();
        let count = updates.len();
        for update in updates {
            self.rules(update)?;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_table_is_a_rules_update() {
        let file = RuleFile::from_json(r#"{ "singular": [["(octop)odes$", "${1}us"]] }"#).unwrap();
        let singular = file.singular.unwrap();
        assert_eq!(singular.rules.len(), 1);
        assert!(singular.irregular.is_empty());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(RuleFile::from_json(r#"{ "plurals": [] }"#).is_err());
        assert!(RuleFile::from_json(r#"{ "plural": { "rule": [] } }"#).is_err());
    }

    #[test]
    fn empty_sections_produce_no_updates() {
        let file = RuleFile::from_json(r#"{ "plural": { "rules": [] } }"#).unwrap();
        assert!(file.into_updates().is_empty());
    }
}
