//! Shared inflector for the `global` feature.
//!
//! Provides thread-safe access to one process-wide `Inflector`, so callers do
//! not have to thread an instance through their code.

use std::sync::{LazyLock, RwLock};

use crate::{Inflector, RuleError, RuleUpdate};

static GLOBAL_INFLECTOR: LazyLock<RwLock<Inflector>> =
    LazyLock::new(|| RwLock::new(Inflector::new()));

/// Provides read access to the global inflector.
pub fn with_inflector<T>(f: impl FnOnce(&Inflector) -> T) -> T {
    let guard = GLOBAL_INFLECTOR
        .read()
        .expect("global inflector lock poisoned");
    f(&guard)
}

/// Provides write access to the global inflector.
pub fn with_inflector_mut<T>(f: impl FnOnce(&mut Inflector) -> T) -> T {
    let mut guard = GLOBAL_INFLECTOR
        .write()
        .expect("global inflector lock poisoned");
    f(&mut guard)
}

pub fn pluralize(word: &str) -> String {
    with_inflector(|inflector| inflector.pluralize(word))
}

pub fn singularize(word: &str) -> String {
    with_inflector(|inflector| inflector.singularize(word))
}

pub fn camelize(word: &str, capitalize_first: bool) -> String {
    with_inflector(|inflector| inflector.camelize(word, capitalize_first))
}

pub fn underscore(word: &str) -> String {
    with_inflector(|inflector| inflector.underscore(word))
}

pub fn slug(text: &str, replacement: &str) -> String {
    with_inflector(|inflector| inflector.slug(text, replacement))
}

pub fn humanize(word: &str, separator: &str) -> String {
    with_inflector(|inflector| inflector.humanize(word, separator))
}

pub fn tableize(class_name: &str) -> String {
    with_inflector(|inflector| inflector.tableize(class_name))
}

pub fn classify(table_name: &str) -> String {
    with_inflector(|inflector| inflector.classify(table_name))
}

/// Merge rule additions into the global inflector.
pub fn rules(update: RuleUpdate) -> Result<(), RuleError> {
    with_inflector_mut(|inflector| inflector.rules(update))
}

/// Reset the global inflector's caches and transliteration table.
pub fn reset() {
    with_inflector_mut(Inflector::reset);
}
