//! Token-stream normalization.
//!
//! Rewrites a raw layout-token stream into clean text while preserving
//! offset traceability: newline-adjacency marking, dehyphenization across
//! visual line breaks, whitespace collapsing, and offset-range sub-listing.
//! Every rewriting operation returns a fresh token vector; caller-owned
//! slices are never mutated.

use std::ops::RangeBounds;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::token::Token;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ]{2,}").unwrap());

/// Plain concatenation of the token texts.
pub fn to_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// True for the literal whitespace tokens produced by layout extraction.
pub fn spacey_token(text: &str) -> bool {
    matches!(text, " " | "\u{00A0}" | "\n")
}

/// True for literal newline tokens.
pub fn newline_token(text: &str) -> bool {
    matches!(text, "\n" | "\r" | "\r\n")
}

/// Folds literal newline tokens into the stream structure: a token
/// immediately followed by a `"\n"` token is flagged `newline_after`, and
/// the newline token itself becomes a single space.
pub fn mark_line_breaks(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let mut token = token.clone();
        if tokens.get(i + 1).is_some_and(|next| next.text == "\n") {
            token.newline_after = true;
        }
        if token.text == "\n" {
            token.text = " ".to_string();
        }
        out.push(token);
    }
    out
}

/// The normalized text view handed to the sentence detector: dehyphenized,
/// newlines mapped to spaces, runs of spaces collapsed to one.
pub fn normalize_text(tokens: &[Token]) -> String {
    let text = to_text(&dehyphenize(tokens)).replace('\n', " ");
    MULTI_SPACE.replace_all(&text, " ").into_owned()
}

/// Removes hyphenation artifacts introduced by visual line breaks.
///
/// A `"-"` token is dropped, together with the separator tokens after it,
/// when the next word continues in lower case on a later line — detected
/// through interleaved newline tokens or, when those are missing, through
/// the `y` coordinates on either side of the hyphen. Literal hyphens
/// (capitalized continuations, numeric ranges, in-line compounds) are kept
/// unchanged. The surviving word fragments become adjacent in the output;
/// no spurious separators remain between them.
pub fn dehyphenize(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.text != "-" || token.superscript || token.subscript {
            out.push(token.clone());
            i += 1;
            continue;
        }

        // scan forward over interleaved separators to the next word
        let y0 = token.y;
        let mut j = i + 1;
        let mut breaklines = 0usize;
        while j < tokens.len() && matches!(tokens[j].text.as_str(), " " | "\n") {
            if tokens[j].text == "\n" {
                breaklines += 1;
            }
            j += 1;
        }

        let forward = tokens.get(j).is_some_and(|next| lowercase_word(&next.text));
        // a missing newline token is substituted by a downward jump in y
        let break_found = breaklines > 0 || (forward && tokens[j].y > y0);

        let hyphenation = forward
            && if i < 1 {
                // hyphen opens the stream: no backward context, trust the
                // continuation
                true
            } else {
                break_found && backward_line_above(tokens, i, y0, break_found)
            };

        if hyphenation {
            // drop the hyphen and every skipped separator; the fragments
            // become adjacent
            i = j;
        } else {
            // literal hyphen: keep it, and keep any immediately following
            // newline tokens in place
            out.push(token.clone());
            let mut k = i + 1;
            while k < tokens.len() && tokens[k].text == "\n" {
                out.push(tokens[k].clone());
                k += 1;
            }
            i = k;
        }
    }
    out
}

/// Tokens whose offset lies in `range`. Tokens without an offset never
/// match. Pure filter, preserves order.
pub fn sub_list_by_offset<R: RangeBounds<usize>>(tokens: &[Token], range: R) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| t.offset.is_some_and(|o| range.contains(&o)))
        .cloned()
        .collect()
}

/// True iff some token carries exactly `text`.
pub fn contains_token(tokens: &[Token], text: &str) -> bool {
    tokens.iter().any(|t| t.text == text)
}

/// Index of the first token carrying exactly `text`.
pub fn token_pos(tokens: &[Token], text: &str) -> Option<usize> {
    tokens.iter().position(|t| t.text == text)
}

/// Index of the first token whose whole text matches `pattern`.
pub fn token_pos_matching(tokens: &[Token], pattern: &Regex) -> Option<usize> {
    tokens.iter().position(|t| full_match(pattern, &t.text))
}

/// Splits the token stream on separator tokens whose whole text matches
/// `pattern`.
///
/// With `preserve_separator` the matching token stays at the tail of its
/// chunk; without `preserve_leftovers` a trailing chunk with no closing
/// separator is dropped.
pub fn split_by_pattern(
    tokens: &[Token],
    pattern: &Regex,
    preserve_separator: bool,
    preserve_leftovers: bool,
) -> Vec<Vec<Token>> {
    let mut chunks: Vec<Vec<Token>> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    for token in tokens {
        if full_match(pattern, &token.text) {
            if preserve_separator {
                current.push(token.clone());
            }
            chunks.push(std::mem::take(&mut current));
        } else {
            current.push(token.clone());
        }
    }
    if preserve_leftovers && !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn full_match(pattern: &Regex, text: &str) -> bool {
    pattern
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

fn coord_set(y: f64) -> bool {
    y >= 0.0
}

fn lowercase_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
}

fn alphabetic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

// The word fragment before the hyphen must share the hyphen's line or sit
// above it: walk back over separators to the nearest token and require it
// alphabetic with y <= the hyphen's y, or without coordinates while a
// forward break was seen.
fn backward_line_above(tokens: &[Token], i: usize, y0: f64, break_found: bool) -> bool {
    let mut k = i;
    while k > 0 {
        k -= 1;
        let prev = &tokens[k];
        if matches!(prev.text.as_str(), " " | "\n") {
            continue;
        }
        if !alphabetic_word(&prev.text) {
            return false;
        }
        if coord_set(prev.y) {
            return prev.y <= y0;
        }
        return break_found;
    }
    // separators all the way back to the stream start: same as the
    // hyphen-first edge case
    true
}
