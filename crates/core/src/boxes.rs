//! Bounding-box derivation from token streams.
//!
//! Groups per-token boxes into one box per visual line segment: consecutive
//! tokens whose boxes sit on the same baseline and nearly touch horizontally
//! are merged, anything else starts a new box. The merge test only looks at
//! the most recently accumulated box, so a token that resumes an earlier
//! line does not re-merge — downstream coordinate rendering relies on that
//! granularity.

use itertools::Itertools;

use crate::model::bbox::BoundingBox;
use crate::model::token::Token;

/// Thresholds for merging adjacent token boxes into one line box, in page
/// coordinate units (typically PDF points).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxParams {
    /// Maximum horizontal gap between a box and its predecessor on the
    /// same line.
    pub eps_x: f64,
    /// Maximum baseline drift (top and bottom edges) within one line.
    pub eps_y: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            eps_x: 10.0,
            eps_y: 3.0,
        }
    }
}

/// One bounding box per visual line segment, using default thresholds.
pub fn calculate(tokens: &[Token]) -> Vec<BoundingBox> {
    calculate_with(tokens, &BoxParams::default())
}

/// One bounding box per visual line segment.
///
/// Tokens without geometry or with a degenerate (zero-area) box are
/// ignored. Empty input yields an empty list.
pub fn calculate_with(tokens: &[Token], params: &BoxParams) -> Vec<BoundingBox> {
    let mut result: Vec<BoundingBox> = Vec::new();
    for b in tokens.iter().filter_map(BoundingBox::from_token) {
        if b.width().abs() <= f64::MIN_POSITIVE || b.height().abs() <= f64::MIN_POSITIVE {
            continue;
        }
        if let Some(last) = result.last_mut() {
            if near(last, &b, params) {
                *last = last.bound_box(&b);
                continue;
            }
        }
        result.push(b);
    }
    result
}

/// A single box spanning every token's geometry, or `None` when no token
/// carries geometry. Tokens on a different page than the first geometric
/// token are skipped.
pub fn calculate_one_box(tokens: &[Token]) -> Option<BoundingBox> {
    let mut acc: Option<BoundingBox> = None;
    for b in tokens.iter().filter_map(BoundingBox::from_token) {
        acc = match acc {
            None => Some(b),
            Some(prev) if prev.page() == b.page() => Some(prev.bound_box(&b)),
            Some(prev) => Some(prev),
        };
    }
    acc
}

/// True when any two adjacent boxes are vertically farther apart than
/// `distance` — used to reject discontinuous coordinate runs.
pub fn too_far_away_vertically(boxes: &[BoundingBox], distance: f64) -> bool {
    boxes
        .iter()
        .tuple_windows()
        .any(|(a, b)| a.vertical_distance_to(b) > distance)
}

/// Line boxes of a token run rendered as a `;`-separated coordinate string.
pub fn coords_string(tokens: &[Token]) -> String {
    calculate(tokens).iter().map(|b| b.to_string()).join(";")
}

// same page, same baseline within eps_y, and b follows last with a
// horizontal gap below eps_x
fn near(last: &BoundingBox, b: &BoundingBox, params: &BoxParams) -> bool {
    last.page() == b.page()
        && (last.y() - b.y()).abs() < params.eps_y
        && (last.y2() - b.y2()).abs() < params.eps_y
        && b.x() - last.x2() < params.eps_x
}
