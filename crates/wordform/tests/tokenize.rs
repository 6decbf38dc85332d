//! Integration tests for the bound-aware tokenizer.

use wordform::{TokenizeOptions, tokenize};

fn default_tokens(data: &str) -> Vec<String> {
    tokenize(data, &TokenizeOptions::default())
}

// =========================================================================
// Default Options
// =========================================================================

#[test]
fn splits_outside_parentheses() {
    assert_eq!(default_tokens("a,(b,c),d"), ["a", "(b,c)", "d"]);
}

#[test]
fn nested_bounds_keep_separators() {
    assert_eq!(default_tokens("a,(b,(c,d)),e"), ["a", "(b,(c,d))", "e"]);
}

#[test]
fn tokens_are_trimmed() {
    assert_eq!(default_tokens(" a , b ,c "), ["a", "b", "c"]);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(default_tokens("").is_empty());
}

#[test]
fn input_without_separator_is_one_token() {
    assert_eq!(default_tokens("count(id)"), ["count(id)"]);
}

#[test]
fn empty_tokens_are_kept() {
    assert_eq!(default_tokens("a,,b"), ["a", "", "b"]);
}

#[test]
fn unbalanced_right_bound_stops_splitting() {
    assert_eq!(default_tokens("a),b"), ["a),b"]);
}

// =========================================================================
// Custom Options
// =========================================================================

#[test]
fn custom_separator_and_bounds() {
    let options = TokenizeOptions::builder()
        .separator(";")
        .left_bound("[")
        .right_bound("]")
        .build();
    assert_eq!(tokenize("x;[y;z];w", &options), ["x", "[y;z]", "w"]);
}

#[test]
fn identical_bounds_toggle() {
    let options = TokenizeOptions::builder()
        .left_bound("\"")
        .right_bound("\"")
        .build();
    assert_eq!(
        tokenize(r#"a,"b,c",d,"e""#, &options),
        ["a", r#""b,c""#, "d", r#""e""#]
    );
}

#[test]
fn multi_character_markers() {
    let options = TokenizeOptions::builder()
        .separator(" AND ")
        .left_bound("BEGIN")
        .right_bound("END")
        .build();
    assert_eq!(
        tokenize("x AND BEGIN y AND z END AND w", &options),
        ["x", "BEGIN y AND z END", "w"]
    );
}
