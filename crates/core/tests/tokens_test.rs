//! Tests for token-stream normalization: newline marking, dehyphenization,
//! text normalization, and token-list utilities.

use regex::Regex;

use quire_core::Token;
use quire_core::tokens::{
    contains_token, dehyphenize, mark_line_breaks, normalize_text, split_by_pattern,
    sub_list_by_offset, to_text, token_pos, token_pos_matching,
};

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn line_tok(text: &str, y: f64) -> Token {
    Token::new(text).with_coords(1, 0.0, y, 5.0, 10.0)
}

// ============================================================================
// mark_line_breaks
// ============================================================================

#[test]
fn test_mark_line_breaks_flags_predecessor() {
    let tokens = vec![Token::new("a"), Token::new("\n"), Token::new("b")];
    let marked = mark_line_breaks(&tokens);
    assert!(marked[0].newline_after);
    assert_eq!(marked[1].text, " ");
    assert!(!marked[1].newline_after);
    assert!(!marked[2].newline_after);
    // the input is untouched
    assert!(!tokens[0].newline_after);
    assert_eq!(tokens[1].text, "\n");
}

// ============================================================================
// dehyphenize
// ============================================================================

#[test]
fn test_dehyphenize_rejoins_word_across_line_break() {
    // hyphen shares the first line, continuation is lower-case on the next
    let tokens = vec![
        line_tok("inter", 10.0),
        line_tok("-", 10.0),
        Token::new("\n"),
        line_tok("national", 20.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["inter", "national"]);
    assert_eq!(to_text(&out), "international");
}

#[test]
fn test_dehyphenize_uses_coordinates_when_newline_is_missing() {
    // no newline token at all: the y jump stands in for the line break
    let tokens = vec![
        line_tok("inter", 10.0),
        line_tok("-", 10.0),
        Token::new(" "),
        line_tok("national", 20.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["inter", "national"]);
}

#[test]
fn test_dehyphenize_keeps_literal_hyphen_before_capital() {
    let tokens = vec![
        line_tok("well", 10.0),
        line_tok("-", 10.0),
        line_tok("Known", 10.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["well", "-", "Known"]);
}

#[test]
fn test_dehyphenize_keeps_numeric_range() {
    let tokens = vec![
        line_tok("1994", 10.0),
        line_tok("-", 10.0),
        Token::new("\n"),
        line_tok("1995", 20.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["1994", "-", "\n", "1995"]);
}

#[test]
fn test_dehyphenize_keeps_inline_compound() {
    // same line, no break anywhere: "state-of" stays hyphenated
    let tokens = vec![
        line_tok("state", 10.0),
        line_tok("-", 10.0),
        line_tok("of", 10.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["state", "-", "of"]);
}

#[test]
fn test_dehyphenize_superscript_hyphen_untouched() {
    let mut hyphen = line_tok("-", 10.0);
    hyphen.superscript = true;
    let tokens = vec![
        line_tok("x", 10.0),
        hyphen,
        Token::new("\n"),
        line_tok("y", 20.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["x", "-", "\n", "y"]);
}

#[test]
fn test_dehyphenize_leading_hyphen_trusts_continuation() {
    // sublist starting at the hyphen: no backward context to check
    let tokens = vec![
        line_tok("-", 10.0),
        Token::new("\n"),
        line_tok("national", 20.0),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["national"]);
}

#[test]
fn test_dehyphenize_without_any_geometry() {
    // scanned text: no coordinates anywhere, the newline token decides
    let tokens = vec![
        Token::new("inter"),
        Token::new("-"),
        Token::new("\n"),
        Token::new("national"),
    ];
    let out = dehyphenize(&tokens);
    assert_eq!(texts(&out), vec!["inter", "national"]);
}

#[test]
fn test_dehyphenize_is_idempotent() {
    let tokens = vec![
        line_tok("inter", 10.0),
        line_tok("-", 10.0),
        Token::new("\n"),
        line_tok("national", 20.0),
        Token::new(" "),
        line_tok("1994", 20.0),
        line_tok("-", 20.0),
        Token::new("\n"),
        line_tok("1995", 30.0),
    ];
    let once = dehyphenize(&tokens);
    let twice = dehyphenize(&once);
    assert_eq!(once, twice);
}

// ============================================================================
// normalize_text
// ============================================================================

#[test]
fn test_normalize_text_collapses_whitespace() {
    let tokens = vec![
        Token::new("a"),
        Token::new(" "),
        Token::new(" "),
        Token::new("b"),
        Token::new("\n"),
        Token::new("c"),
    ];
    assert_eq!(normalize_text(&tokens), "a b c");
}

#[test]
fn test_normalize_text_dehyphenizes_first() {
    let tokens = vec![
        line_tok("inter", 10.0),
        line_tok("-", 10.0),
        Token::new("\n"),
        line_tok("national", 20.0),
        Token::new(" "),
        line_tok("trade", 20.0),
    ];
    assert_eq!(normalize_text(&tokens), "international trade");
}

// ============================================================================
// sub_list_by_offset
// ============================================================================

#[test]
fn test_sub_list_by_offset_filters_range() {
    let tokens = vec![
        Token::new("a").with_offset(0),
        Token::new("b").with_offset(2),
        Token::new("c").with_offset(5),
        Token::new("d"), // synthetic, no offset
    ];
    assert_eq!(texts(&sub_list_by_offset(&tokens, 0..5)), vec!["a", "b"]);
    assert_eq!(texts(&sub_list_by_offset(&tokens, 2..)), vec!["b", "c"]);
    assert!(sub_list_by_offset(&tokens, 6..).is_empty());
}

// ============================================================================
// token search and splitting
// ============================================================================

#[test]
fn test_token_search() {
    let tokens = vec![Token::new("a"), Token::new(";"), Token::new("b")];
    assert!(contains_token(&tokens, ";"));
    assert!(!contains_token(&tokens, ","));
    assert_eq!(token_pos(&tokens, "b"), Some(2));
    assert_eq!(token_pos(&tokens, "z"), None);

    let punct = Regex::new(r"[;,]").unwrap();
    assert_eq!(token_pos_matching(&tokens, &punct), Some(1));
}

#[test]
fn test_split_by_pattern_preserves_separator() {
    let punct = Regex::new(r"[;,]").unwrap();
    let tokens = vec![
        Token::new("a"),
        Token::new(";"),
        Token::new("b"),
        Token::new(","),
        Token::new("c"),
    ];
    let chunks = split_by_pattern(&tokens, &punct, true, true);
    assert_eq!(chunks.len(), 3);
    assert_eq!(texts(&chunks[0]), vec!["a", ";"]);
    assert_eq!(texts(&chunks[1]), vec!["b", ","]);
    assert_eq!(texts(&chunks[2]), vec!["c"]);
}

#[test]
fn test_split_by_pattern_drops_leftovers_on_request() {
    let punct = Regex::new(r"[;,]").unwrap();
    let tokens = vec![
        Token::new("a"),
        Token::new(";"),
        Token::new("b"),
    ];
    let chunks = split_by_pattern(&tokens, &punct, false, false);
    assert_eq!(chunks.len(), 1);
    assert_eq!(texts(&chunks[0]), vec!["a"]);
}

#[test]
fn test_split_by_pattern_requires_full_match() {
    // a separator embedded in a longer token does not split
    let punct = Regex::new(r"[;,]").unwrap();
    let tokens = vec![Token::new("a;b"), Token::new("c")];
    let chunks = split_by_pattern(&tokens, &punct, false, true);
    assert_eq!(chunks.len(), 1);
    assert_eq!(texts(&chunks[0]), vec!["a;b", "c"]);
}
