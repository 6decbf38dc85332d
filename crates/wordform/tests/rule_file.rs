//! Integration tests for JSON rule files.

use std::io::Write;

use tempfile::NamedTempFile;
use wordform::{Inflector, LoadError, RuleError, RuleFile};

const RULES: &str = r#"{
    "transliteration": [["ä", "ae"], ["/ø|œ/", "oe"]],
    "uninflected": ["pokemon"],
    "singular": [["(octop)odes$", "${1}us"]],
    "plural": {
        "rules": [["(bor)d$", "${1}den"]],
        "irregular": [["cactus", "cacti"]],
        "uninflected": ["sheep"]
    }
}"#;

fn rule_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_rules_applies_every_section() {
    let file = rule_file(RULES);
    let mut inflector = Inflector::new();
    let count = inflector.load_rules(file.path()).unwrap();

    assert_eq!(count, 4);
    assert_eq!(inflector.slug("søster", "-"), "soester");
    assert_eq!(inflector.pluralize("pokemon"), "pokemon");
    assert_eq!(inflector.singularize("octopodes"), "octopus");
    assert_eq!(inflector.pluralize("bord"), "borden");
    assert_eq!(inflector.pluralize("cactus"), "cacti");
    assert_eq!(inflector.singularize("cacti"), "cactus");
}

#[test]
fn apply_rule_file_from_string() {
    let file = RuleFile::from_json(r#"{ "uninflected": ["bord"] }"#).unwrap();
    let mut inflector = Inflector::new();
    assert_eq!(inflector.apply_rule_file(file).unwrap(), 1);
    assert_eq!(inflector.pluralize("bord"), "bord");
}

#[test]
fn empty_document_applies_nothing() {
    let file = rule_file("{}");
    let mut inflector = Inflector::new();
    assert_eq!(inflector.load_rules(file.path()).unwrap(), 0);
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Inflector::new().load_rules(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn syntax_error_reports_position() {
    let file = rule_file("{\n  \"plural\": [\n    [\"a\", ]\n  ]\n}");
    let err = Inflector::new().load_rules(file.path()).unwrap_err();
    match err {
        LoadError::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert!(column > 0);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_parse_error() {
    let file = rule_file(r#"{ "plurals": [] }"#);
    let err = Inflector::new().load_rules(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn bad_pattern_is_rules_error() {
    let file = rule_file(r#"{ "plural": [["(bad", "x"]] }"#);
    let err = Inflector::new().load_rules(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Rules {
            source: RuleError::InvalidPattern { .. },
            ..
        }
    ));
}

#[test]
fn earlier_sections_stay_applied_after_error() {
    let file = rule_file(r#"{ "uninflected": ["bord"], "plural": [["(bad", "x"]] }"#);
    let mut inflector = Inflector::new();
    assert!(inflector.load_rules(file.path()).is_err());
    assert_eq!(inflector.pluralize("bord"), "bord");
}
