//! The inflection engine.

use std::sync::{LazyLock, OnceLock};

use fancy_regex::Regex;
use tracing::debug;

use crate::inflector::cache::{CacheKind, InflectionCache};
use crate::inflector::defaults::UNINFLECTED;
use crate::inflector::error::RuleError;
use crate::inflector::rule::Rule;
use crate::inflector::table::{Direction, IrregularMap, RuleTable};
use crate::inflector::transliteration::{TransliterationMap, TransliterationRule};
use crate::inflector::update::{RuleCategory, RuleUpdate, TableUpdate};
use crate::pattern::{compile, literal, quote, replace_all};

/// Characters that are neither whitespace, letters nor decimal digits.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s\p{L}\p{Nd}]").expect("slug pattern should compile")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("slug pattern should compile"));

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?<=[a-z])([A-Z])").expect("slug pattern should compile"));

/// Converts words between singular and plural and between naming styles.
///
/// An `Inflector` owns its rule tables, transliteration map and caches. The
/// inflection methods take `&self` and memoize their results; rule updates and
/// [`Inflector::reset`] take `&mut self`.
///
/// # Example
///
/// ```
/// use wordform::Inflector;
///
/// let inflector = Inflector::new();
/// assert_eq!(inflector.pluralize("person"), "people");
/// assert_eq!(inflector.singularize("Quizzes"), "Quiz");
/// assert_eq!(inflector.tableize("BlogPost"), "blog_posts");
/// assert_eq!(inflector.classify("blog_posts"), "BlogPost");
/// ```
#[derive(Debug)]
pub struct Inflector {
    plural: RuleTable,
    singular: RuleTable,

    /// Uninflected patterns shared by both directions.
    uninflected: Vec<String>,

    transliteration: TransliterationMap,

    /// Singular irregular map derived from the plural one, used while the
    /// singular table has no irregular words of its own.
    inverse_irregular: OnceLock<IrregularMap>,

    cache: InflectionCache,
}

impl Default for Inflector {
    fn default() -> Self {
        Inflector {
            plural: RuleTable::plural(),
            singular: RuleTable::singular(),
            uninflected: UNINFLECTED.iter().map(ToString::to_string).collect(),
            transliteration: TransliterationMap::extended(),
            inverse_irregular: OnceLock::new(),
            cache: InflectionCache::new(),
        }
    }
}

impl Inflector {
    /// Create an inflector with the default English rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plural_table(&self) -> &RuleTable {
        &self.plural
    }

    pub fn singular_table(&self) -> &RuleTable {
        &self.singular
    }

    /// The uninflected patterns shared by both directions.
    pub fn uninflected(&self) -> &[String] {
        &self.uninflected
    }

    pub fn transliteration(&self) -> &TransliterationMap {
        &self.transliteration
    }

    pub fn cache(&self) -> &InflectionCache {
        &self.cache
    }

    /// The irregular map consulted when singularizing.
    pub fn singular_irregular(&self) -> &IrregularMap {
        if self.singular.irregular().is_empty() {
            self.inverse_irregular
                .get_or_init(|| self.plural.irregular().inverted())
        } else {
            self.singular.irregular()
        }
    }

    /// Change the plural form of a singular word.
    pub fn pluralize(&self, word: &str) -> String {
        if let Some(hit) = self.cache.get(CacheKind::Pluralize, word) {
            return hit;
        }

        let irregular = self.plural.irregular();
        let anchors = self.plural.anchors(&self.uninflected, irregular);
        let result = if anchors.is_uninflected(word) {
            word.to_string()
        } else if let Some(replaced) = anchors.apply_irregular(word, irregular) {
            replaced
        } else {
            self.plural
                .apply_rules(word)
                .unwrap_or_else(|| word.to_string())
        };
        self.cache.insert(CacheKind::Pluralize, word, result)
    }

    /// Change the singular form of a plural word.
    ///
    /// Irregular words are checked before the uninflected list here, the
    /// reverse of [`Inflector::pluralize`].
    pub fn singularize(&self, word: &str) -> String {
        if let Some(hit) = self.cache.get(CacheKind::Singularize, word) {
            return hit;
        }

        let irregular = self.singular_irregular();
        let anchors = self.singular.anchors(&self.uninflected, irregular);
        let result = if let Some(replaced) = anchors.apply_irregular(word, irregular) {
            replaced
        } else if anchors.is_uninflected(word) {
            word.to_string()
        } else {
            self.singular
                .apply_rules(word)
                .unwrap_or_else(|| word.to_string())
        };
        self.cache.insert(CacheKind::Singularize, word, result)
    }

    /// Turn `red_bike` or `red-bike` into `RedBike`.
    ///
    /// With `capitalize_first` unset the first letter is lower-cased
    /// (`redBike`) and the result is not cached.
    pub fn camelize(&self, word: &str, capitalize_first: bool) -> String {
        if capitalize_first {
            if let Some(hit) = self.cache.get(CacheKind::Camelize, word) {
                return hit;
            }
        }

        let camel = upper_words(&word.replace(['_', '-'], " ")).replace(' ', "");
        if capitalize_first {
            self.cache.insert(CacheKind::Camelize, word, camel)
        } else {
            lower_first(&camel)
        }
    }

    /// Turn `RedBike` into `red_bike`.
    pub fn underscore(&self, word: &str) -> String {
        if let Some(hit) = self.cache.get(CacheKind::Underscore, word) {
            return hit;
        }
        let underscored = self.slug(word, "_").to_lowercase();
        self.cache.insert(CacheKind::Underscore, word, underscored)
    }

    /// Fold accents to ASCII and join the words of `text` with `replacement`.
    ///
    /// ```
    /// use wordform::Inflector;
    ///
    /// let inflector = Inflector::new();
    /// assert_eq!(inflector.slug("Ĉu vi ŝatas café?", "-"), "Ĉu-vi-ŝatas-cafe");
    /// assert_eq!(inflector.slug("ThisIsCamel", "-"), "This-Is-Camel");
    /// ```
    pub fn slug(&self, text: &str, replacement: &str) -> String {
        let folded = self.transliteration.apply(text);
        let spaced = replace_all(&NON_WORD, &folded, " ");
        let joined = replace_all(&WHITESPACE_RUN, &spaced, &literal(replacement));
        let split = replace_all(
            &CASE_BOUNDARY,
            &joined,
            &format!("{}${{1}}", literal(replacement)),
        );
        trim_replacement(&split, replacement)
    }

    /// Turn `red_bike` into `Red Bike`, splitting on `separator`.
    pub fn humanize(&self, word: &str, separator: &str) -> String {
        let key = format!("{word}:{separator}");
        if let Some(hit) = self.cache.get(CacheKind::Humanize, &key) {
            return hit;
        }
        let spaced = if separator.is_empty() {
            word.to_string()
        } else {
            word.replace(separator, " ")
        };
        self.cache.insert(CacheKind::Humanize, &key, upper_words(&spaced))
    }

    /// Class name to table name: `Post` becomes `posts`.
    pub fn tableize(&self, class_name: &str) -> String {
        self.pluralize(&self.underscore(class_name))
    }

    /// Table name to class name: `posts` becomes `Post`.
    pub fn classify(&self, table_name: &str) -> String {
        self.camelize(&self.singularize(table_name), true)
    }

    /// Merge rule additions into one of the rule tables.
    ///
    /// Every pattern is compiled before anything changes, so a malformed
    /// pattern leaves the inflector untouched.
    ///
    /// ```
    /// use wordform::{Inflector, RuleUpdate};
    ///
    /// let mut inflector = Inflector::new();
    /// inflector.rules(RuleUpdate::Uninflected(vec!["bord".into()])).unwrap();
    /// assert_eq!(inflector.pluralize("bord"), "bord");
    /// ```
    pub fn rules(&mut self, update: RuleUpdate) -> Result<(), RuleError> {
        match update {
            RuleUpdate::Transliteration(pairs) => self.merge_transliteration(&pairs),
            RuleUpdate::Uninflected(words) => self.add_uninflected(words),
            RuleUpdate::Singular(table) => self.merge_table(Direction::Singular, table),
            RuleUpdate::Plural(table) => self.merge_table(Direction::Plural, table),
        }
    }

    /// Clear every cache and derived lookup and restore the reduced default
    /// transliteration table.
    ///
    /// Rule tables keep the rules merged into them.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.plural.invalidate();
        self.singular.invalidate();
        self.inverse_irregular = OnceLock::new();
        self.transliteration = TransliterationMap::reduced();
        debug!("inflector reset");
    }

    fn merge_transliteration(&mut self, pairs: &[(String, String)]) -> Result<(), RuleError> {
        let rules = pairs
            .iter()
            .map(|(key, replacement)| {
                TransliterationRule::from_key(key, replacement).map_err(|source| {
                    RuleError::InvalidPattern {
                        category: RuleCategory::Transliteration,
                        pattern: key.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = rules.len(), "merging transliteration rules");
        self.transliteration.merge(rules);
        Ok(())
    }

    fn add_uninflected(&mut self, words: Vec<String>) -> Result<(), RuleError> {
        validate_patterns(RuleCategory::Uninflected, &words)?;
        debug!(count = words.len(), "adding uninflected words");
        for word in words {
            self.cache.remove(CacheKind::Pluralize, &word);
            self.cache.remove(CacheKind::Singularize, &word);
            if !self.uninflected.contains(&word) {
                self.uninflected.push(word);
            }
        }
        self.plural.invalidate();
        self.singular.invalidate();
        Ok(())
    }

    fn merge_table(&mut self, direction: Direction, update: TableUpdate) -> Result<(), RuleError> {
        let category = match direction {
            Direction::Plural => RuleCategory::Plural,
            Direction::Singular => RuleCategory::Singular,
        };
        let rules = update
            .rules
            .iter()
            .map(|(pattern, replacement)| {
                Rule::new(pattern, replacement).map_err(|source| RuleError::InvalidPattern {
                    category,
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        validate_patterns(category, &update.uninflected)?;

        debug!(
            %category,
            rules = rules.len(),
            irregular = update.irregular.len(),
            uninflected = update.uninflected.len(),
            "merging rule table"
        );

        let table = match direction {
            Direction::Plural => &mut self.plural,
            Direction::Singular => &mut self.singular,
        };
        if !rules.is_empty() {
            table.merge_rules(rules);
        }
        if !update.uninflected.is_empty() {
            table.merge_uninflected(update.uninflected);
        }
        if !update.irregular.is_empty() {
            self.merge_irregular(direction, IrregularMap::from_pairs(update.irregular));
        }

        self.plural.invalidate();
        self.singular.invalidate();
        Ok(())
    }

    /// Merge irregular words into one direction and rebuild the other
    /// direction's map as its inverse.
    fn merge_irregular(&mut self, direction: Direction, added: IrregularMap) {
        match direction {
            Direction::Plural => {
                self.plural.merge_irregular(added);
                self.singular.set_irregular(self.plural.irregular().inverted());
            }
            Direction::Singular => {
                let current = self.singular_irregular().clone();
                self.singular.set_irregular(current);
                self.singular.merge_irregular(added);
                self.plural.set_irregular(self.singular.irregular().inverted());
            }
        }
        self.inverse_irregular = OnceLock::new();
        debug!(updated = ?direction, rebuilt = ?direction.opposite(), "rebuilt irregular inverse");
    }
}

fn validate_patterns(category: RuleCategory, patterns: &[String]) -> Result<(), RuleError> {
    for pattern in patterns {
        compile(pattern, true).map_err(|source| RuleError::InvalidPattern {
            category,
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Uppercase the first letter of every whitespace-separated word.
fn upper_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    result
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip leading and trailing runs made of `replacement`'s characters.
fn trim_replacement(text: &str, replacement: &str) -> String {
    if replacement.is_empty() {
        return text.to_string();
    }
    let class = replacement
        .chars()
        .map(|c| quote(c.encode_utf8(&mut [0; 4])).into_owned())
        .collect::<Vec<_>>()
        .join("|");
    match compile(&format!("^(?:{class})+|(?:{class})+$"), false) {
        Ok(regex) => replace_all(&regex, text, "").into_owned(),
        Err(_) => text.to_string(),
    }
}
