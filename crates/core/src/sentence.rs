//! Sentence boundary reconciliation.
//!
//! Sentence boundary *detection* is a pluggable external capability; this
//! module only corrects its output against layout and textual constraints:
//! no boundary inside a forbidden span (typically a citation marker's
//! character range), and trailing superscript reference numbers reattached
//! to the sentence they punctuate.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::Result;
use crate::model::position::OffsetPosition;
use crate::model::token::Token;

// superscript numeric reference markers: digits with list punctuation
static REF_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9,()\[\]-]+$").unwrap());

/// Pluggable sentence boundary detector.
///
/// Implementations return candidate sentence intervals as byte offsets into
/// the supplied text, and must be safe to share across document-processing
/// workers. The language hint is an opaque pass-through; detectors without
/// language support fall back to [`SentenceDetector::detect`].
pub trait SentenceDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<Vec<OffsetPosition>>;

    fn detect_with_language(&self, text: &str, _language: &str) -> Result<Vec<OffsetPosition>> {
        self.detect(text)
    }
}

impl<T: SentenceDetector + ?Sized> SentenceDetector for &T {
    fn detect(&self, text: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect(text)
    }

    fn detect_with_language(&self, text: &str, language: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect_with_language(text, language)
    }
}

impl<T: SentenceDetector + ?Sized> SentenceDetector for Box<T> {
    fn detect(&self, text: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect(text)
    }

    fn detect_with_language(&self, text: &str, language: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect_with_language(text, language)
    }
}

impl<T: SentenceDetector + ?Sized> SentenceDetector for std::sync::Arc<T> {
    fn detect(&self, text: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect(text)
    }

    fn detect_with_language(&self, text: &str, language: &str) -> Result<Vec<OffsetPosition>> {
        (**self).detect_with_language(text, language)
    }
}

/// Corrects detector-produced sentence boundaries against forbidden spans
/// and, optionally, a synchronized token stream.
///
/// The detector is injected at construction; the reconciler holds no other
/// state and is `Send + Sync` whenever its detector is.
pub struct SentenceReconciler<D> {
    detector: D,
}

impl<D: SentenceDetector> SentenceReconciler<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Plain sentence segmentation with no constraints.
    pub fn segment(&self, text: &str) -> Option<Vec<OffsetPosition>> {
        self.segment_synced(text, &[], None, None)
    }

    /// Segmentation with forbidden-span constraints only.
    pub fn segment_constrained(
        &self,
        text: &str,
        forbidden: &[OffsetPosition],
    ) -> Option<Vec<OffsetPosition>> {
        self.segment_synced(text, forbidden, None, None)
    }

    /// Full reconciliation: forbidden spans, optional synchronized token
    /// stream, optional language hint.
    ///
    /// Returns corrected sentence intervals over `text`, `Some(vec![])` for
    /// empty text, and `None` when the detector fails — a single document's
    /// segmentation failure must not abort a batch, so the error is logged
    /// and swallowed here.
    pub fn segment_synced(
        &self,
        text: &str,
        forbidden: &[OffsetPosition],
        tokens: Option<&[Token]>,
        language: Option<&str>,
    ) -> Option<Vec<OffsetPosition>> {
        if text.is_empty() {
            return Some(Vec::new());
        }

        let detected = match language {
            Some(lang) => self.detector.detect_with_language(text, lang),
            None => self.detector.detect(text),
        };
        let candidates = match detected {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("cannot detect sentences: {err}");
                return None;
            }
        };

        let mut sentences = apply_forbidden_spans(candidates, forbidden);

        // degenerate input: treat the whole text as one sentence
        if sentences.is_empty() {
            sentences.push(OffsetPosition::new(0, text.len()));
        }

        if let Some(tokens) = tokens {
            if !tokens.is_empty() {
                sentences = reattach_reference_markers(text, sentences, tokens);
            }
        }

        Some(sentences)
    }
}

/// Pushes every sentence end out of forbidden spans by merging with the
/// following candidate until the end no longer falls inside a span.
///
/// Forbidden spans are sorted internally before the sweep; candidates are
/// consumed in order with a monotone span index, so the whole pass is a
/// single left-to-right sweep.
fn apply_forbidden_spans(
    candidates: Vec<OffsetPosition>,
    forbidden: &[OffsetPosition],
) -> Vec<OffsetPosition> {
    if forbidden.is_empty() {
        return candidates;
    }
    let mut forbidden = forbidden.to_vec();
    forbidden.sort_unstable();

    let mut result = Vec::with_capacity(candidates.len());
    let mut forbidden_index = 0;
    let mut j = 0;
    while j < candidates.len() {
        let mut position = candidates[j];
        let mut i = forbidden_index;
        while i < forbidden.len() {
            let span = forbidden[i];
            if span.end < position.end {
                // span entirely before this boundary
                i += 1;
                continue;
            }
            if span.start > position.end {
                // sorted order: no later span can straddle this boundary
                break;
            }
            while span.start < position.end && position.end < span.end {
                if j + 1 < candidates.len() {
                    // boundary sits inside the span: absorb the next
                    // candidate sentence
                    j += 1;
                    position.end = candidates[j].end;
                    forbidden_index = i;
                } else {
                    break;
                }
            }
            i += 1;
        }
        result.push(position);
        j += 1;
    }
    result
}

fn to_skip_token(text: &str) -> bool {
    matches!(text, "-" | " " | "\n" | "\t")
}

fn lookahead_separator(text: &str) -> bool {
    matches!(text, " " | "\t")
}

/// Walks tokens and sentences in lockstep and pulls trailing superscript
/// reference markers (e.g. a `1,2` note call-out after the full stop) into
/// the sentence they punctuate, trimming the following sentence.
fn reattach_reference_markers(
    text: &str,
    mut sentences: Vec<OffsetPosition>,
    tokens: &[Token],
) -> Vec<OffsetPosition> {
    let mut ti = 0usize;
    let mut s = 0usize;
    while s < sentences.len() && ti < tokens.len() {
        let sent = sentences[s];
        let chunk = match text.get(sent.start..sent.end) {
            Some(chunk) => chunk,
            None => break,
        };
        // cursor inside the sentence substring
        let mut pos = 0usize;
        // bytes of separator tokens skipped since the last matched token
        let mut pending_sep = 0usize;
        while ti < tokens.len() {
            let token = &tokens[ti];
            if token.text.is_empty() || to_skip_token(&token.text) {
                if lookahead_separator(&token.text) {
                    pending_sep += token.text.len();
                }
                ti += 1;
                continue;
            }
            if let Some(found) = chunk.get(pos..).and_then(|rest| rest.find(token.text.as_str()))
            {
                pos += found + token.text.len();
                pending_sep = 0;
                ti += 1;
                continue;
            }

            // the token is not part of this sentence: either the next
            // sentence starts here, or a dangling reference marker run
            // follows the sentence end
            let mut scanned = 0usize;
            let mut marker_run = 0usize;
            let mut k = ti;
            while k < tokens.len() {
                let t = &tokens[k];
                if t.text == "\n" {
                    break;
                }
                if lookahead_separator(&t.text) {
                    scanned += t.text.len();
                    k += 1;
                    continue;
                }
                if t.superscript && REF_MARKER.is_match(&t.text) {
                    scanned += t.text.len();
                    marker_run = scanned;
                    k += 1;
                    continue;
                }
                break;
            }

            if marker_run > 0 {
                let extension = pending_sep + marker_run;
                let new_end = sent.end + extension;
                if new_end <= text.len() {
                    sentences[s].end = new_end;
                    if s + 1 < sentences.len() {
                        if sentences[s + 1].end <= new_end {
                            // the whole next sentence was the marker run
                            sentences.remove(s + 1);
                        } else if sentences[s + 1].start < new_end {
                            sentences[s + 1].start = new_end;
                        }
                    }
                    ti = k;
                }
            }
            break;
        }
        s += 1;
    }
    sentences
}
