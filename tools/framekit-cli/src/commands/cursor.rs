//! Map a pointer position into each cursor space.

use framekit_geometry::{clamp_cursor_to_canvas, cursor_3d, cursor_parallax, Point2D};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CursorReport {
    client: Point2D,
    parallax: Point2D,
    ndc: Point2D,
    canvas: Point2D,
}

pub fn run(x: f64, y: f64, width: f64, height: f64) -> anyhow::Result<()> {
    if width <= 0.0 || height <= 0.0 {
        tracing::warn!(width, height, "degenerate container; axes map to center");
    }

    let report = CursorReport {
        client: Point2D::new(x, y),
        parallax: cursor_parallax(x, y, width, height),
        ndc: cursor_3d(x, y, width, height),
        canvas: clamp_cursor_to_canvas(x, y, width, height),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
