//! Layout tokens as produced by an upstream PDF-layout extractor.

/// A positioned lexical unit: text plus page geometry and style flags.
///
/// Tokens arrive in document reading order with non-decreasing offsets.
/// Whitespace and newline tokens carry the literal texts `" "` and `"\n"`;
/// all other Unicode space variants are normalized upstream. Tokens without
/// geometry (scanned text, synthetic separators) carry `page == -1` or a
/// non-positive `width` — a normal degraded state, not an error.
///
/// This crate never mutates caller-owned tokens: rewriting operations in
/// [`crate::tokens`] return fresh token vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Absolute byte offset of the token in the document character stream;
    /// `None` for synthetic tokens inserted during analysis.
    pub offset: Option<usize>,
    pub page: i32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub superscript: bool,
    pub subscript: bool,
    /// Set during normalization when the token was followed by a literal
    /// newline token in the raw stream.
    pub newline_after: bool,
}

impl Token {
    /// A token with text only: no offset, no geometry.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: None,
            page: -1,
            x: -1.0,
            y: -1.0,
            width: 0.0,
            height: 0.0,
            superscript: false,
            subscript: false,
            newline_after: false,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_coords(mut self, page: i32, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.page = page;
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_superscript(mut self, superscript: bool) -> Self {
        self.superscript = superscript;
        self
    }

    pub fn with_subscript(mut self, subscript: bool) -> Self {
        self.subscript = subscript;
        self
    }

    /// True iff the token carries usable page geometry.
    pub fn has_coords(&self) -> bool {
        self.page != -1 && self.width > 0.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new("")
    }
}
