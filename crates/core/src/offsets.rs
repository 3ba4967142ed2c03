//! Offset interval algebra and offset ↔ token-index mapping.
//!
//! Character intervals throughout this module are byte offsets into the
//! concatenation of exactly the supplied token list's texts (the
//! sublist-relative convention — intervals computed over a larger document
//! string must be rebased by the caller first). Token-index intervals are
//! half-open like every other `OffsetPosition`.

use crate::model::position::OffsetPosition;
use crate::model::token::Token;

/// Sorted, non-overlapping, minimal cover of the union of both interval
/// lists. Either input empty returns the other input unchanged.
pub fn merge_positions(
    first: &[OffsetPosition],
    second: &[OffsetPosition],
) -> Vec<OffsetPosition> {
    if first.is_empty() {
        return second.to_vec();
    }
    if second.is_empty() {
        return first.to_vec();
    }

    let mut all: Vec<OffsetPosition> = Vec::with_capacity(first.len() + second.len());
    all.extend_from_slice(first);
    all.extend_from_slice(second);
    all.sort_unstable();

    let mut result = Vec::with_capacity(all.len());
    let mut current = all[0];
    for next in all.into_iter().skip(1) {
        if next.end <= current.end {
            // fully contained
            continue;
        }
        if next.start <= current.end {
            current.end = next.end;
        } else {
            result.push(current);
            current = next;
        }
    }
    result.push(current);
    result
}

/// Maps character intervals to token-index intervals.
///
/// For each interval the token list is walked with a running byte cursor;
/// the output interval opens at the first token reached at or past the
/// interval start and closes at the token whose text reaches the interval
/// end (exhaustion closes at the last visited token). Empty-text tokens are
/// skipped entirely. An interval lying wholly beyond the token text yields
/// no output interval.
pub fn string_offsets_to_token_offsets(
    positions: &[OffsetPosition],
    tokens: &[Token],
) -> Vec<OffsetPosition> {
    let mut result = Vec::with_capacity(positions.len());
    for position in positions {
        let mut cursor = 0usize;
        let mut open: Option<usize> = None;
        let mut last_visited: Option<usize> = None;
        let mut closed = false;
        for (index, token) in tokens.iter().enumerate() {
            if token.text.is_empty() {
                continue;
            }
            last_visited = Some(index);
            if open.is_none() && cursor >= position.start {
                open = Some(index);
            }
            if let Some(start) = open {
                if cursor + token.text.len() >= position.end {
                    result.push(OffsetPosition::new(start, index + 1));
                    closed = true;
                    break;
                }
            }
            cursor += token.text.len();
        }
        if !closed {
            if let (Some(start), Some(last)) = (open, last_visited) {
                result.push(OffsetPosition::new(start, last + 1));
            }
        }
    }
    result
}

/// Maps token-index intervals back to character intervals over the
/// concatenated token texts. Out-of-range indices are clamped to the token
/// count.
pub fn token_offsets_to_string_offsets(
    positions: &[OffsetPosition],
    tokens: &[Token],
) -> Vec<OffsetPosition> {
    // byte offset of each token start, plus the total length
    let mut starts = Vec::with_capacity(tokens.len() + 1);
    let mut cursor = 0usize;
    for token in tokens {
        starts.push(cursor);
        cursor += token.text.len();
    }
    starts.push(cursor);

    positions
        .iter()
        .map(|p| {
            let start = starts[p.start.min(tokens.len())];
            let end = starts[p.end.min(tokens.len())];
            OffsetPosition::new(start, end)
        })
        .collect()
}
