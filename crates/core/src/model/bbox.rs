//! Axis-aligned bounding boxes in page coordinates.

use std::fmt;

use super::token::Token;

/// An axis-aligned rectangle on a single page, stored as origin plus
/// dimensions. `x2`/`y2` are the derived far corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    page: i32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    pub fn from_point_and_dimensions(page: i32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            page,
            x,
            y,
            width,
            height,
        }
    }

    /// Box of a single token, or `None` when the token has no geometry.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.has_coords() {
            return None;
        }
        Some(Self::from_point_and_dimensions(
            token.page,
            token.x,
            token.y,
            token.width,
            token.height,
        ))
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x2(&self) -> f64 {
        self.x + self.width
    }

    pub fn y2(&self) -> f64 {
        self.y + self.height
    }

    /// Minimal axis-aligned box covering both boxes.
    ///
    /// Both boxes must lie on the same page; the result keeps `self.page`.
    /// Callers in this crate check the page before merging.
    pub fn bound_box(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let x2 = self.x2().max(other.x2());
        let y2 = self.y2().max(other.y2());
        BoundingBox::from_point_and_dimensions(self.page, x, y, x2 - x, y2 - y)
    }

    /// Vertical gap between the two boxes; 0.0 when their vertical extents
    /// overlap or touch. Page is ignored.
    pub fn vertical_distance_to(&self, other: &BoundingBox) -> f64 {
        let gap = self.y.max(other.y) - self.y2().min(other.y2());
        gap.max(0.0)
    }
}

/// Renders as `page,x,y,width,height` with two-decimal coordinates, the
/// format consumed by downstream coordinate annotation.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.2},{:.2},{:.2},{:.2}",
            self.page, self.x, self.y, self.width, self.height
        )
    }
}
