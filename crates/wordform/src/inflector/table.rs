//! Per-direction rule tables.

use std::mem;
use std::sync::OnceLock;

use fancy_regex::Regex;
use tracing::warn;

use crate::inflector::defaults::{
    PLURAL_IRREGULAR, PLURAL_RULES, PLURAL_UNINFLECTED, RuleSpec, SINGULAR_RULES,
    SINGULAR_UNINFLECTED,
};
use crate::inflector::rule::Rule;
use crate::inflector::update::surround_merge;
use crate::pattern::{captures, compile, is_match, quote};

/// Which way a table inflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Plural,
    Singular,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Plural => Direction::Singular,
            Direction::Singular => Direction::Plural,
        }
    }
}

/// Ordered word pairs that bypass the rule list.
///
/// Keys are stored lowercase; values keep their case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularMap {
    entries: Vec<(String, String)>,
}

impl IrregularMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = IrregularMap::new();
        let entries = pairs
            .into_iter()
            .map(|(word, inflected)| (word.as_ref().to_lowercase(), inflected.into()))
            .collect();
        map.merge(entries);
        map
    }

    /// Look up the counterpart of a lowercase word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == word)
            .map(|(_, value)| value.as_str())
    }

    /// The map with keys and values swapped.
    pub fn inverted(&self) -> IrregularMap {
        IrregularMap::from_pairs(
            self.entries
                .iter()
                .map(|(word, inflected)| (inflected, word.clone())),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn merge(&mut self, added: Vec<(String, String)>) {
        let existing = mem::take(&mut self.entries);
        self.entries = surround_merge(added, existing, |(key, _)| key.as_str());
    }
}

/// Combined regexes derived from a table and the shared uninflected list.
#[derive(Debug)]
pub(crate) struct Anchors {
    uninflected: Option<Regex>,
    irregular: Option<Regex>,
}

impl Anchors {
    fn build(
        direction: Direction,
        own_uninflected: &[String],
        shared_uninflected: &[String],
        irregular: &IrregularMap,
    ) -> Anchors {
        let words: Vec<&str> = own_uninflected
            .iter()
            .chain(shared_uninflected)
            .map(String::as_str)
            .collect();
        let uninflected = if words.is_empty() {
            None
        } else {
            let alternation = words.join("|");
            let pattern = match direction {
                Direction::Plural => format!("((?:{alternation}))$"),
                Direction::Singular => format!("^((?:{alternation}))$"),
            };
            compile_anchor(&pattern)
        };

        let irregular = if irregular.is_empty() {
            None
        } else {
            let keys: Vec<String> = irregular
                .iter()
                .map(|(key, _)| quote(key).into_owned())
                .collect();
            compile_anchor(&format!(r"(.*)\b((?:{}))$", keys.join("|")))
        };

        Anchors {
            uninflected,
            irregular,
        }
    }

    pub(crate) fn is_uninflected(&self, word: &str) -> bool {
        self.uninflected
            .as_ref()
            .is_some_and(|regex| is_match(regex, word))
    }

    /// Replace a trailing irregular word, keeping the case of its first letter
    /// and any text before it.
    pub(crate) fn apply_irregular(&self, word: &str, irregular: &IrregularMap) -> Option<String> {
        let caps = captures(self.irregular.as_ref()?, word)?;
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let matched = caps.get(2)?.as_str();
        let replacement = irregular.get(&matched.to_lowercase())?;

        let mut result = String::with_capacity(prefix.len() + replacement.len());
        result.push_str(prefix);
        result.extend(matched.chars().take(1));
        result.extend(replacement.chars().skip(1));
        Some(result)
    }
}

fn compile_anchor(pattern: &str) -> Option<Regex> {
    compile(pattern, true)
        .inspect_err(|err| warn!(pattern, %err, "failed to build inflection anchor"))
        .ok()
}

/// The ordered rules, irregular words and uninflected patterns for one
/// direction.
#[derive(Debug)]
pub struct RuleTable {
    direction: Direction,
    rules: Vec<Rule>,
    irregular: IrregularMap,
    uninflected: Vec<String>,
    anchors: OnceLock<Anchors>,
}

impl RuleTable {
    /// The default singular → plural table.
    pub fn plural() -> Self {
        RuleTable {
            direction: Direction::Plural,
            rules: compile_defaults(PLURAL_RULES),
            irregular: IrregularMap::from_pairs(PLURAL_IRREGULAR.iter().copied()),
            uninflected: PLURAL_UNINFLECTED.iter().map(ToString::to_string).collect(),
            anchors: OnceLock::new(),
        }
    }

    /// The default plural → singular table.
    ///
    /// Its irregular map starts empty and is derived from the plural table on
    /// first use.
    pub fn singular() -> Self {
        RuleTable {
            direction: Direction::Singular,
            rules: compile_defaults(SINGULAR_RULES),
            irregular: IrregularMap::new(),
            uninflected: SINGULAR_UNINFLECTED.iter().map(ToString::to_string).collect(),
            anchors: OnceLock::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Irregular words stored on this table.
    pub fn irregular(&self) -> &IrregularMap {
        &self.irregular
    }

    pub fn uninflected(&self) -> &[String] {
        &self.uninflected
    }

    /// First rule that matches `word`, applied.
    pub(crate) fn apply_rules(&self, word: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(word))
    }

    pub(crate) fn anchors(
        &self,
        shared_uninflected: &[String],
        irregular: &IrregularMap,
    ) -> &Anchors {
        self.anchors.get_or_init(|| {
            Anchors::build(
                self.direction,
                &self.uninflected,
                shared_uninflected,
                irregular,
            )
        })
    }

    pub(crate) fn invalidate(&mut self) {
        self.anchors = OnceLock::new();
    }

    pub(crate) fn merge_rules(&mut self, added: Vec<Rule>) {
        let existing = mem::take(&mut self.rules);
        self.rules = surround_merge(added, existing, Rule::pattern);
        self.invalidate();
    }

    pub(crate) fn merge_uninflected(&mut self, added: Vec<String>) {
        let existing = mem::take(&mut self.uninflected);
        self.uninflected = surround_merge(added, existing, String::as_str);
        self.invalidate();
    }

    pub(crate) fn merge_irregular(&mut self, added: IrregularMap) {
        self.irregular.merge(added.entries);
        self.invalidate();
    }

    pub(crate) fn set_irregular(&mut self, irregular: IrregularMap) {
        self.irregular = irregular;
        self.invalidate();
    }
}

fn compile_defaults(specs: &[RuleSpec]) -> Vec<Rule> {
    specs
        .iter()
        .map(|(pattern, replacement, case)| {
            Rule::with_case(pattern, replacement, *case).expect("default rule should compile")
        })
        .collect()
}
