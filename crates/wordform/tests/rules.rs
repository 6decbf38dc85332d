//! Integration tests for rule updates.

use insta::assert_snapshot;
use tracing_test::traced_test;
use wordform::{
    Inflector, Rule, RuleCategory, RuleError, RuleUpdate, TableUpdate, TransliterationRule,
};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
        .collect()
}

fn listing(rules: &[Rule], count: usize) -> String {
    rules
        .iter()
        .take(count)
        .map(|rule| format!("{} => {}", rule.pattern(), rule.replacement()))
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// Table Rules
// =========================================================================

#[test]
fn default_plural_rules_listing() {
    let inflector = Inflector::new();
    assert_snapshot!(listing(inflector.plural_table().rules(), 4), @r"
    (s)tatus$ => ${1}tatuses
    (quiz)$ => ${1}zes
    ^(ox)$ => ${1}en
    ([m|l])ouse$ => ${1}ice
    ");
}

#[test]
fn added_rules_come_first() {
    let mut inflector = Inflector::new();
    let before = inflector.plural_table().rules().len();
    inflector
        .rules(RuleUpdate::Plural(TableUpdate::from_rules([
            ("(bor)d$", "${1}den"),
            ("(quiz)$", "${1}zeses"),
        ])))
        .unwrap();

    // The quiz rule replaces the default one instead of being appended.
    assert_eq!(inflector.plural_table().rules().len(), before + 1);
    assert_snapshot!(listing(inflector.plural_table().rules(), 3), @r"
    (bor)d$ => ${1}den
    (quiz)$ => ${1}zeses
    (s)tatus$ => ${1}tatuses
    ");
    assert_eq!(inflector.pluralize("bord"), "borden");
    assert_eq!(inflector.pluralize("quiz"), "quizzeses");
}

#[test]
fn singular_rules_are_merged() {
    let mut inflector = Inflector::new();
    inflector
        .rules(RuleUpdate::Singular(TableUpdate::from_rules([(
            "(octop)odes$",
            "${1}us",
        )])))
        .unwrap();
    assert_eq!(inflector.singularize("octopodes"), "octopus");
}

#[test]
fn table_uninflected_goes_first() {
    let mut inflector = Inflector::new();
    let update = TableUpdate::builder()
        .uninflected(vec!["pokemon".to_string()])
        .build();
    inflector.rules(RuleUpdate::Plural(update)).unwrap();
    assert_eq!(inflector.pluralize("pokemon"), "pokemon");
    assert_eq!(inflector.singularize("pokemons"), "pokemon");
    assert_eq!(inflector.plural_table().uninflected()[0], "pokemon");
}

#[test]
fn invalid_rule_leaves_tables_unchanged() {
    let mut inflector = Inflector::new();
    let before = inflector.plural_table().rules().len();
    let err = inflector
        .rules(RuleUpdate::Plural(TableUpdate::from_rules([
            ("(good)$", "${1}s"),
            ("(unclosed", "x"),
        ])))
        .unwrap_err();

    assert!(matches!(
        err,
        RuleError::InvalidPattern { category: RuleCategory::Plural, ref pattern, .. }
            if pattern == "(unclosed"
    ));
    assert_eq!(inflector.plural_table().rules().len(), before);
}

// =========================================================================
// Irregular Words
// =========================================================================

#[test]
fn plural_irregular_rebuilds_singular_map() {
    let mut inflector = Inflector::new();
    let update = TableUpdate::builder()
        .irregular(pairs(&[("cactus", "cactuses")]))
        .build();
    inflector.rules(RuleUpdate::Plural(update)).unwrap();

    assert_eq!(inflector.pluralize("cactus"), "cactuses");
    assert_eq!(inflector.singularize("cactuses"), "cactus");
    assert_eq!(inflector.singularize("people"), "person");
}

#[test]
fn singular_irregular_rebuilds_plural_map() {
    let mut inflector = Inflector::new();
    let update = TableUpdate::builder()
        .irregular(pairs(&[("geese", "goose")]))
        .build();
    inflector.rules(RuleUpdate::Singular(update)).unwrap();

    assert_eq!(inflector.singularize("geese"), "goose");
    assert_eq!(inflector.pluralize("goose"), "geese");
    assert_eq!(inflector.pluralize("person"), "people");
    assert_eq!(inflector.singularize("children"), "child");
}

#[test]
fn irregular_keys_are_case_insensitive() {
    let mut inflector = Inflector::new();
    let update = TableUpdate::builder()
        .irregular(pairs(&[("Foot", "feet")]))
        .build();
    inflector.rules(RuleUpdate::Plural(update)).unwrap();
    assert_eq!(inflector.pluralize("foot"), "feet");
    assert_eq!(inflector.pluralize("Foot"), "Feet");
}

// =========================================================================
// Uninflected and Cache
// =========================================================================

#[test]
fn uninflected_update_drops_cached_results() {
    let mut inflector = Inflector::new();
    assert_eq!(inflector.pluralize("pokemon"), "pokemons");

    inflector
        .rules(RuleUpdate::Uninflected(vec!["pokemon".to_string()]))
        .unwrap();
    assert_eq!(inflector.pluralize("pokemon"), "pokemon");
    assert_eq!(inflector.singularize("pokemon"), "pokemon");
    assert!(inflector.uninflected().iter().any(|w| w == "pokemon"));
}

#[test]
fn uninflected_update_skips_known_words() {
    let mut inflector = Inflector::new();
    let before = inflector.uninflected().len();
    inflector
        .rules(RuleUpdate::Uninflected(vec!["bison".to_string()]))
        .unwrap();
    assert_eq!(inflector.uninflected().len(), before);
}

#[test]
fn cached_result_survives_rule_update_until_reset() {
    let mut inflector = Inflector::new();
    assert_eq!(inflector.pluralize("bord"), "bords");

    inflector
        .rules(RuleUpdate::Plural(TableUpdate::from_rules([(
            "(bor)d$", "${1}den",
        )])))
        .unwrap();
    assert_eq!(inflector.pluralize("bord"), "bords");

    inflector.reset();
    assert_eq!(inflector.pluralize("bord"), "borden");
}

// =========================================================================
// Transliteration
// =========================================================================

#[test]
fn transliteration_keys_become_alternations() {
    let mut inflector = Inflector::new();
    inflector
        .rules(RuleUpdate::Transliteration(pairs(&[
            ("ŝĉ", "sx"),
            ("/ø|œ/", "oe"),
        ])))
        .unwrap();

    let first = inflector.transliteration().iter().next().unwrap();
    assert_eq!(first.pattern(), "ŝ|ĉ");
    assert_eq!(inflector.slug("ŝati", "-"), "sxati");
    assert_eq!(inflector.slug("sœur", "-"), "soeur");
}

#[test]
fn transliteration_merge_replaces_same_pattern() {
    let mut inflector = Inflector::new();
    let before = inflector.transliteration().len();
    inflector
        .rules(RuleUpdate::Transliteration(pairs(&[("/ä|æ/", "a")])))
        .unwrap();
    assert_eq!(inflector.transliteration().len(), before);
    assert_eq!(inflector.slug("Bär", "-"), "Bar");
}

#[test]
fn transliteration_rule_rejects_bad_raw_pattern() {
    assert!(TransliterationRule::from_key("/(/", "x").is_err());
    let mut inflector = Inflector::new();
    let err = inflector
        .rules(RuleUpdate::Transliteration(pairs(&[("/(/", "x")])))
        .unwrap_err();
    assert!(matches!(
        err,
        RuleError::InvalidPattern {
            category: RuleCategory::Transliteration,
            ..
        }
    ));
}

// =========================================================================
// Categories
// =========================================================================

#[test]
fn category_parse_suggests_close_names() {
    let err = "singuler".parse::<RuleCategory>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown rule category 'singuler', did you mean: singular?"
    );

    let err = "xyz".parse::<RuleCategory>().unwrap_err();
    assert_eq!(err.to_string(), "unknown rule category 'xyz'");
}

#[test]
fn updates_from_category_pairs() {
    let mut inflector = Inflector::new();
    let category: RuleCategory = "plural".parse().unwrap();
    let update = RuleUpdate::from_pairs(category, pairs(&[("(bor)d$", "${1}den")]));
    inflector.rules(update).unwrap();
    assert_eq!(inflector.pluralize("bord"), "borden");
}

// =========================================================================
// Logging
// =========================================================================

#[traced_test]
#[test]
fn rule_updates_are_logged() {
    let mut inflector = Inflector::new();
    inflector
        .rules(RuleUpdate::Uninflected(vec!["pokemon".to_string()]))
        .unwrap();
    inflector.reset();

    assert!(logs_contain("adding uninflected words"));
    assert!(logs_contain("inflector reset"));
}
