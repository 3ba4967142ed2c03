//! Data model for layout reconciliation.
//!
//! - `Token`: a positioned lexical unit extracted from a page
//! - `OffsetPosition`: a half-open character or token-index interval
//! - `BoundingBox`: an axis-aligned rectangle in page coordinates

pub mod bbox;
pub mod position;
pub mod token;

pub use bbox::BoundingBox;
pub use position::OffsetPosition;
pub use token::Token;
