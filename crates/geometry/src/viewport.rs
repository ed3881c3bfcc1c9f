//! Viewport metrics and visibility tests.
//!
//! Client rectangles are viewport-relative: `(0, 0)` is the top-left of the
//! visible area. Page coordinates add the scroll offset.

use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// The visible area of a scrolled page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Horizontal scroll offset of the page.
    pub scroll_x: f64,
    /// Vertical scroll offset of the page.
    pub scroll_y: f64,
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl ViewportMetrics {
    pub fn new(scroll_x: f64, scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_x,
            scroll_y,
            width,
            height,
        }
    }

    /// A viewport of the given size at scroll origin.
    pub fn unscrolled(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Convert a client rectangle to page coordinates.
    pub fn to_page(&self, client: &Rect) -> Rect {
        client.translated(self.scroll_x, self.scroll_y)
    }

    /// Whether any part of `client` overlaps the viewport.
    ///
    /// Edges that merely touch the viewport do not count.
    pub fn intersects(&self, client: &Rect) -> bool {
        client.bottom() > 0.0
            && client.right() > 0.0
            && client.top() < self.height
            && client.left() < self.width
    }

    /// Whether `client` lies entirely inside the viewport (edges inclusive).
    pub fn contains(&self, client: &Rect) -> bool {
        client.top() >= 0.0
            && client.left() >= 0.0
            && client.bottom() <= self.height
            && client.right() <= self.width
    }

    /// Visible horizontal and vertical extent of `client`, in pixels.
    pub fn visible_extent(&self, client: &Rect) -> (f64, f64) {
        let x = (client.right().min(self.width) - client.left().max(0.0)).max(0.0);
        let y = (client.bottom().min(self.height) - client.top().max(0.0)).max(0.0);
        (x, y)
    }
}
