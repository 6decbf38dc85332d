//! Integration tests for word inflection.

use wordform::{CacheKind, Inflector};

const IRREGULAR: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("child", "children"),
    ("genus", "genera"),
    ("leaf", "leaves"),
    ("man", "men"),
    ("money", "monies"),
    ("mythos", "mythoi"),
    ("numen", "numina"),
    ("ox", "oxen"),
    ("person", "people"),
    ("soliloquy", "soliloquies"),
    ("testis", "testes"),
];

const REGULAR: &[&str] = &[
    "post",
    "comment",
    "category",
    "box",
    "bus",
    "quiz",
    "status",
    "matrix",
    "mouse",
    "house",
    "knife",
    "wolf",
    "analysis",
    "datum",
];

// =========================================================================
// Pluralize and Singularize
// =========================================================================

#[test]
fn pluralize_applies_first_matching_rule() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("post"), "posts");
    assert_eq!(inflector.pluralize("quiz"), "quizzes");
    assert_eq!(inflector.pluralize("category"), "categories");
    assert_eq!(inflector.pluralize("knife"), "knives");
    assert_eq!(inflector.pluralize("status"), "statuses");
}

#[test]
fn singularize_applies_first_matching_rule() {
    let inflector = Inflector::new();
    assert_eq!(inflector.singularize("posts"), "post");
    assert_eq!(inflector.singularize("quizzes"), "quiz");
    assert_eq!(inflector.singularize("matrices"), "matrix");
    assert_eq!(inflector.singularize("houses"), "house");
    assert_eq!(inflector.singularize("buses"), "bus");
}

#[test]
fn regular_words_round_trip() {
    let inflector = Inflector::new();
    for word in REGULAR {
        let plural = inflector.pluralize(word);
        assert_eq!(inflector.singularize(&plural), *word, "via {plural}");
    }
}

#[test]
fn empty_word_stays_empty() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize(""), "");
    assert_eq!(inflector.singularize(""), "");
}

// =========================================================================
// Irregular Words
// =========================================================================

#[test]
fn irregular_pairs_inflect_both_ways() {
    let inflector = Inflector::new();
    for (singular, plural) in IRREGULAR {
        assert_eq!(inflector.pluralize(singular), *plural);
        assert_eq!(inflector.singularize(plural), *singular);
    }
}

#[test]
fn irregular_keeps_first_letter_case() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("Person"), "People");
    assert_eq!(inflector.singularize("Children"), "Child");
    assert_eq!(inflector.pluralize("Ox"), "Oxen");
}

#[test]
fn irregular_matches_last_word_only() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("sales person"), "sales people");
    assert_eq!(inflector.pluralize("box"), "boxes");
}

// =========================================================================
// Uninflected Words
// =========================================================================

#[test]
fn uninflected_words_do_not_change() {
    let inflector = Inflector::new();
    // Irregular lookups run first when singularizing, so these three map to
    // their irregular singulars instead.
    let irregular_first = ["graffiti", "testes", "People"];
    let plain_words = inflector
        .uninflected()
        .iter()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| !irregular_first.contains(&word.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    assert!(plain_words.len() > 70);

    for word in &plain_words {
        assert_eq!(&inflector.pluralize(word), word);
        assert_eq!(&inflector.singularize(word), word);
    }
}

#[test]
fn singularize_checks_irregular_before_uninflected() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("People"), "People");
    assert_eq!(inflector.singularize("People"), "Person");
    assert_eq!(inflector.singularize("graffiti"), "graffito");
}

#[test]
fn plural_uninflected_matches_suffix() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("swordfish"), "swordfish");
    assert_eq!(inflector.pluralize("Japanese"), "Japanese");
    assert_eq!(inflector.singularize("swordfish"), "swordfish");
}

#[test]
fn singular_only_patterns() {
    let inflector = Inflector::new();
    assert_eq!(inflector.singularize("glass"), "glass");
    assert_eq!(inflector.pluralize("glass"), "glasses");
}

// =========================================================================
// Naming Styles
// =========================================================================

#[test]
fn camelize_capitalizes_each_word() {
    let inflector = Inflector::new();
    assert_eq!(inflector.camelize("red_bike", true), "RedBike");
    assert_eq!(inflector.camelize("red-bike", true), "RedBike");
    assert_eq!(inflector.camelize("red_bike", false), "redBike");
}

#[test]
fn camelize_only_caches_capitalized_form() {
    let inflector = Inflector::new();
    inflector.camelize("blue_car", false);
    assert!(!inflector.cache().contains(CacheKind::Camelize, "blue_car"));
    inflector.camelize("blue_car", true);
    assert!(inflector.cache().contains(CacheKind::Camelize, "blue_car"));
    assert_eq!(inflector.camelize("blue_car", false), "blueCar");
}

#[test]
fn underscore_splits_camel_case() {
    let inflector = Inflector::new();
    assert_eq!(inflector.underscore("RedBike"), "red_bike");
    assert_eq!(inflector.underscore("Red Bike"), "red_bike");
    assert_eq!(inflector.underscore("redBikeShop"), "red_bike_shop");
}

#[test]
fn humanize_uses_separator() {
    let inflector = Inflector::new();
    assert_eq!(inflector.humanize("red_bike", "_"), "Red Bike");
    assert_eq!(inflector.humanize("red-bike", "-"), "Red Bike");
    assert_eq!(inflector.humanize("red_bike", "-"), "Red_bike");
    assert!(inflector.cache().contains(CacheKind::Humanize, "red_bike:-"));
}

#[test]
fn tableize_and_classify() {
    let inflector = Inflector::new();
    assert_eq!(inflector.tableize("Post"), "posts");
    assert_eq!(inflector.tableize("BlogComment"), "blog_comments");
    assert_eq!(inflector.classify("posts"), "Post");
    assert_eq!(inflector.classify("blog_comments"), "BlogComment");
    assert_eq!(inflector.classify("people"), "Person");
}

// =========================================================================
// Slug
// =========================================================================

#[test]
fn slug_folds_accents_and_joins_words() {
    let inflector = Inflector::new();
    assert_eq!(inflector.slug("Über straße", "-"), "Ueber-strasse");
    assert_eq!(inflector.slug("  hello, world!  ", "-"), "hello-world");
    assert_eq!(inflector.slug("ThisIsATest", "_"), "This_Is_ATest");
}

#[test]
fn slug_keeps_digits_and_non_latin_letters() {
    let inflector = Inflector::new();
    assert_eq!(inflector.slug("Привет мир 2024", "-"), "Привет-мир-2024");
}

#[test]
fn slug_replacement_is_literal() {
    let inflector = Inflector::new();
    assert_eq!(inflector.slug("a b", "$1"), "a$1b");
    assert_eq!(inflector.slug("a b", "."), "a.b");
}

// =========================================================================
// Cache and Reset
// =========================================================================

#[test]
fn results_are_cached_per_operation() {
    let inflector = Inflector::new();
    assert!(inflector.cache().is_empty());
    inflector.pluralize("post");
    inflector.singularize("posts");
    inflector.underscore("BlogPost");
    assert_eq!(inflector.cache().len(CacheKind::Pluralize), 1);
    assert_eq!(inflector.cache().get(CacheKind::Singularize, "posts").as_deref(), Some("post"));
    assert!(inflector.cache().contains(CacheKind::Underscore, "BlogPost"));
}

#[test]
fn reset_clears_caches() {
    let mut inflector = Inflector::new();
    inflector.pluralize("post");
    inflector.humanize("a_b", "_");
    inflector.reset();
    assert!(inflector.cache().is_empty());
}

#[test]
fn reset_restores_reduced_transliteration() {
    let mut inflector = Inflector::new();
    assert_eq!(inflector.transliteration().len(), 28);
    assert_eq!(inflector.slug("Élan vital", "-"), "Elan-vital");

    inflector.reset();
    assert_eq!(inflector.transliteration().len(), 22);
    assert_eq!(inflector.slug("Élan vital", "-"), "Élan-vital");
    assert_eq!(inflector.slug("élan vital", "-"), "elan-vital");
}

#[test]
fn inflector_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Inflector>();
}
