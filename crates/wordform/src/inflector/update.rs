//! Rule update descriptions and the merge they share.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::Builder;
use serde::Deserialize;

use crate::inflector::error::{RuleError, compute_suggestions};

/// The rule tables `Inflector::rules` can extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Transliteration,
    Uninflected,
    Singular,
    Plural,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 4] = [
        RuleCategory::Transliteration,
        RuleCategory::Uninflected,
        RuleCategory::Singular,
        RuleCategory::Plural,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Transliteration => "transliteration",
            RuleCategory::Uninflected => "uninflected",
            RuleCategory::Singular => "singular",
            RuleCategory::Plural => "plural",
        }
    }
}

impl Display for RuleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = RuleError;

    /// Parse a category name.
    ///
    /// ```
    /// use wordform::{RuleCategory, RuleError};
    ///
    /// assert_eq!("plural".parse::<RuleCategory>().unwrap(), RuleCategory::Plural);
    /// let err = "plurl".parse::<RuleCategory>().unwrap_err();
    /// assert!(matches!(err, RuleError::UnknownCategory { ref suggestions, .. } if suggestions == &["plural"]));
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RuleCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| {
                let names = RuleCategory::ALL.map(RuleCategory::as_str);
                RuleError::UnknownCategory {
                    name: name.to_string(),
                    suggestions: compute_suggestions(name, &names),
                }
            })
    }
}

/// Additions for one direction's rule table.
///
/// Each category is merged so the added entries come first and replace
/// existing entries with the same key, while the remaining defaults stay.
///
/// ```
/// use wordform::TableUpdate;
///
/// let update = TableUpdate::builder()
///     .irregular(vec![("cactus".into(), "cacti".into())])
///     .build();
/// assert!(update.rules.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Deserialize)]
#[serde(from = "TableUpdateRepr")]
pub struct TableUpdate {
    /// Ordered (pattern, replacement) pairs.
    #[builder(default)]
    pub rules: Vec<(String, String)>,

    /// (word, inflected word) pairs bypassing the rules.
    #[builder(default)]
    pub irregular: Vec<(String, String)>,

    /// Patterns whose forms do not change in this direction.
    #[builder(default)]
    pub uninflected: Vec<String>,
}

impl TableUpdate {
    /// An update that only adds ordered rules.
    pub fn from_rules<P, R>(rules: impl IntoIterator<Item = (P, R)>) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        TableUpdate {
            rules: rules
                .into_iter()
                .map(|(pattern, replacement)| (pattern.into(), replacement.into()))
                .collect(),
            ..TableUpdate::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.irregular.is_empty() && self.uninflected.is_empty()
    }
}

/// Rule files may give a table either as a bare list of rule pairs or as an
/// object keyed by category.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableUpdateRepr {
    Flat(Vec<(String, String)>),
    Categorized(CategorizedTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CategorizedTable {
    #[serde(default)]
    rules: Vec<(String, String)>,
    #[serde(default)]
    irregular: Vec<(String, String)>,
    #[serde(default)]
    uninflected: Vec<String>,
}

impl From<TableUpdateRepr> for TableUpdate {
    fn from(repr: TableUpdateRepr) -> Self {
        match repr {
            TableUpdateRepr::Flat(rules) => TableUpdate::from_rules(rules),
            TableUpdateRepr::Categorized(table) => TableUpdate {
                rules: table.rules,
                irregular: table.irregular,
                uninflected: table.uninflected,
            },
        }
    }
}

/// A change to one of the inflector's rule tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleUpdate {
    /// (key, replacement) pairs; bare keys are character sets, `/.../` keys
    /// are raw patterns.
    Transliteration(Vec<(String, String)>),

    /// Patterns appended to the list shared by both directions.
    Uninflected(Vec<String>),

    Singular(TableUpdate),

    Plural(TableUpdate),
}

impl RuleUpdate {
    pub fn category(&self) -> RuleCategory {
        match self {
            RuleUpdate::Transliteration(_) => RuleCategory::Transliteration,
            RuleUpdate::Uninflected(_) => RuleCategory::Uninflected,
            RuleUpdate::Singular(_) => RuleCategory::Singular,
            RuleUpdate::Plural(_) => RuleCategory::Plural,
        }
    }

    /// Build an update for `category` from (key, value) pairs.
    ///
    /// For the singular and plural tables the pairs are ordered rules. For
    /// the uninflected list only the keys are used.
    pub fn from_pairs(category: RuleCategory, pairs: Vec<(String, String)>) -> Self {
        match category {
            RuleCategory::Transliteration => RuleUpdate::Transliteration(pairs),
            RuleCategory::Uninflected => {
                RuleUpdate::Uninflected(pairs.into_iter().map(|(word, _)| word).collect())
            }
            RuleCategory::Singular => RuleUpdate::Singular(TableUpdate::from_rules(pairs)),
            RuleCategory::Plural => RuleUpdate::Plural(TableUpdate::from_rules(pairs)),
        }
    }
}

/// Merge `added` in front of `existing`.
///
/// Entries of `existing` whose key also appears in `added` are dropped; a key
/// repeated inside `added` keeps its first position and its last value.
pub(crate) fn surround_merge<T>(
    added: Vec<T>,
    existing: Vec<T>,
    key: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut merged: Vec<T> = Vec::with_capacity(added.len() + existing.len());
    for item in added {
        match merged.iter().position(|m| key(m) == key(&item)) {
            Some(pos) => merged[pos] = item,
            None => merged.push(item),
        }
    }
    let added_len = merged.len();
    for item in existing {
        if !merged[..added_len].iter().any(|m| key(m) == key(&item)) {
            merged.push(item);
        }
    }
    merged
}
