#![cfg(feature = "global")]

//! Integration tests for the `global` feature.

use wordform::global::{self, with_inflector, with_inflector_mut};
use wordform::RuleUpdate;

// =========================================================================
// Free Functions
// =========================================================================

#[test]
fn free_functions_use_shared_inflector() {
    assert_eq!(global::pluralize("person"), "people");
    assert_eq!(global::singularize("quizzes"), "quiz");
    assert_eq!(global::camelize("red_bike", true), "RedBike");
    assert_eq!(global::underscore("RedBike"), "red_bike");
    assert_eq!(global::humanize("red_bike", "_"), "Red Bike");
    assert_eq!(global::tableize("Post"), "posts");
    assert_eq!(global::classify("posts"), "Post");
    assert_eq!(global::slug("a b", "-"), "a-b");
}

#[test]
fn rules_update_shared_inflector() {
    global::rules(RuleUpdate::Uninflected(vec!["sharedword".to_string()])).unwrap();
    assert_eq!(global::pluralize("sharedword"), "sharedword");
    assert!(with_inflector(|inflector| {
        inflector.uninflected().iter().any(|w| w == "sharedword")
    }));
}

// =========================================================================
// Accessors
// =========================================================================

#[test]
fn with_inflector_mut_allows_updates() {
    let len = with_inflector_mut(|inflector| {
        inflector
            .rules(RuleUpdate::Uninflected(vec!["otherword".to_string()]))
            .unwrap();
        inflector.uninflected().len()
    });
    assert!(len > 80);
}
