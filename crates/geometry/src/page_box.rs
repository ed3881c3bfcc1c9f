//! Element geometry and visibility relative to the page and viewport.

use serde::{Deserialize, Serialize};

use crate::rect::Rect;
use crate::viewport::ViewportMetrics;

/// Layout and visibility snapshot for one element.
///
/// Built from the element's client (viewport-relative) rectangle and the
/// viewport it was measured in. Page coordinates include the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    pub width: f64,
    pub height: f64,
    /// Page-relative top edge.
    pub top: f64,
    /// Page-relative left edge.
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    /// Same as `left`.
    pub x: f64,
    /// Same as `top`.
    pub y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
    /// The client rectangle as measured.
    pub relative_to_viewport: Rect,
    /// The client rectangle shifted by the scroll offset.
    pub relative_to_page: Rect,
    /// Any part overlaps the viewport.
    pub is_in_viewport: bool,
    /// Entirely inside the viewport.
    pub is_fully_visible: bool,
    /// Visible fraction of the width, `0` for a zero-width element.
    pub viewport_ratio_x: f64,
    /// Visible fraction of the height, `0` for a zero-height element.
    pub viewport_ratio_y: f64,
}

impl PageBox {
    /// Measure `client` against `viewport`.
    pub fn measure(client: &Rect, viewport: &ViewportMetrics) -> Self {
        let page = viewport.to_page(client);
        let (center_x, center_y) = page.center();
        let (visible_x, visible_y) = viewport.visible_extent(client);

        Self {
            width: client.width,
            height: client.height,
            top: page.top(),
            left: page.left(),
            right: page.right(),
            bottom: page.bottom(),
            x: page.left(),
            y: page.top(),
            center_x,
            center_y,
            scroll_x: viewport.scroll_x,
            scroll_y: viewport.scroll_y,
            relative_to_viewport: *client,
            relative_to_page: page,
            is_in_viewport: viewport.intersects(client),
            is_fully_visible: viewport.contains(client),
            viewport_ratio_x: visible_ratio(visible_x, client.width),
            viewport_ratio_y: visible_ratio(visible_y, client.height),
        }
    }
}

/// Measure an element that may be absent.
pub fn create_page_box(client: Option<&Rect>, viewport: &ViewportMetrics) -> Option<PageBox> {
    client.map(|rect| PageBox::measure(rect, viewport))
}

fn visible_ratio(visible: f64, size: f64) -> f64 {
    if size > 0.0 {
        visible / size
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible_element() {
        let vp = ViewportMetrics::new(0.0, 1000.0, 1280.0, 720.0);
        let pb = PageBox::measure(&Rect::new(100.0, 50.0, 200.0, 100.0), &vp);

        assert_eq!(pb.top, 1050.0);
        assert_eq!(pb.left, 100.0);
        assert_eq!(pb.right, 300.0);
        assert_eq!(pb.bottom, 1150.0);
        assert_eq!((pb.x, pb.y), (pb.left, pb.top));
        assert_eq!(pb.center_x, 200.0);
        assert_eq!(pb.center_y, 1100.0);
        assert_eq!(pb.scroll_y, 1000.0);
        assert!(pb.is_in_viewport);
        assert!(pb.is_fully_visible);
        assert_eq!(pb.viewport_ratio_x, 1.0);
        assert_eq!(pb.viewport_ratio_y, 1.0);
        assert_eq!(pb.relative_to_page, Rect::new(100.0, 1050.0, 200.0, 100.0));
    }

    #[test]
    fn test_partially_scrolled_out() {
        let vp = ViewportMetrics::unscrolled(800.0, 600.0);
        let pb = PageBox::measure(&Rect::new(0.0, -50.0, 400.0, 200.0), &vp);
        assert!(pb.is_in_viewport);
        assert!(!pb.is_fully_visible);
        assert_eq!(pb.viewport_ratio_x, 1.0);
        assert!((pb.viewport_ratio_y - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_offscreen_element() {
        let vp = ViewportMetrics::unscrolled(800.0, 600.0);
        let pb = PageBox::measure(&Rect::new(900.0, 10.0, 50.0, 50.0), &vp);
        assert!(!pb.is_in_viewport);
        assert!(!pb.is_fully_visible);
        assert_eq!(pb.viewport_ratio_x, 0.0);
        assert_eq!(pb.viewport_ratio_y, 1.0);
    }

    #[test]
    fn test_zero_size_element_has_zero_ratio() {
        let vp = ViewportMetrics::unscrolled(800.0, 600.0);
        let pb = PageBox::measure(&Rect::new(10.0, 10.0, 0.0, 0.0), &vp);
        assert_eq!(pb.viewport_ratio_x, 0.0);
        assert_eq!(pb.viewport_ratio_y, 0.0);
        assert!(pb.is_fully_visible);
    }

    #[test]
    fn test_absent_element() {
        let vp = ViewportMetrics::unscrolled(800.0, 600.0);
        assert!(create_page_box(None, &vp).is_none());
        assert!(create_page_box(Some(&Rect::new(0.0, 0.0, 1.0, 1.0)), &vp).is_some());
    }

    #[test]
    fn test_serializes_snake_case() {
        let vp = ViewportMetrics::unscrolled(800.0, 600.0);
        let pb = PageBox::measure(&Rect::new(0.0, 0.0, 10.0, 10.0), &vp);
        let json = serde_json::to_value(pb).unwrap();
        assert_eq!(json["is_in_viewport"], true);
        assert_eq!(json["relative_to_page"]["width"], 10.0);
    }
}
