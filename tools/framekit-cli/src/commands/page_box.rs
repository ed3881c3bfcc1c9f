//! Compute page geometry for a client rectangle.

use framekit_common::FrameKitError;
use framekit_geometry::{PageBox, Rect, ViewportMetrics};

#[allow(clippy::too_many_arguments)]
pub fn run(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    scroll_x: f64,
    scroll_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> anyhow::Result<()> {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return Err(FrameKitError::invalid_argument(format!(
            "viewport must have a positive size (got {viewport_width}x{viewport_height})"
        ))
        .into());
    }
    if width < 0.0 || height < 0.0 {
        return Err(FrameKitError::invalid_argument("element size must not be negative").into());
    }

    let viewport = ViewportMetrics::new(scroll_x, scroll_y, viewport_width, viewport_height);
    let page_box = PageBox::measure(&Rect::new(x, y, width, height), &viewport);
    tracing::debug!(
        in_viewport = page_box.is_in_viewport,
        fully_visible = page_box.is_fully_visible,
        "page box measured"
    );

    println!("{}", serde_json::to_string_pretty(&page_box)?);
    Ok(())
}
