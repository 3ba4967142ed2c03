//! quire - layout-token text reconciliation for scholarly PDF processing.
//!
//! Sits between a raw PDF-layout extractor and a sequence-labelling
//! document-structuring stage. Takes an ordered stream of positioned lexical
//! tokens and derives three mutually consistent views of the same content:
//!
//! - a normalized text string (dehyphenized, whitespace-collapsed),
//! - per-visual-line bounding boxes for re-rendering highlight regions,
//! - corrected sentence-level offset spans that respect both textual and
//!   layout constraints.
//!
//! All operations are synchronous, stateless and in-memory; the PDF
//! extraction itself and the sentence boundary detection algorithm are
//! external collaborators.

pub mod boxes;
pub mod error;
pub mod model;
pub mod offsets;
pub mod sentence;
pub mod tokens;

pub use boxes::BoxParams;
pub use error::{QuireError, Result};
pub use model::bbox::BoundingBox;
pub use model::position::OffsetPosition;
pub use model::token::Token;
pub use sentence::{SentenceDetector, SentenceReconciler};
