//! Pointer coordinate mappings.
//!
//! Each mapping takes a client-space pointer position and the size of the
//! container it moves over. A container dimension of zero (or less) maps
//! that axis to its neutral value instead of dividing by zero.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Centered offset for parallax effects.
///
/// Left/top edge map to `-0.5`, right/bottom edge to `+0.5`.
pub fn cursor_parallax(client_x: f64, client_y: f64, width: f64, height: f64) -> Point2D {
    Point2D::new(
        fraction(client_x, width) - 0.5,
        fraction(client_y, height) - 0.5,
    )
}

/// Normalized device coordinates, as used for ray casting into a 3D scene.
///
/// Bottom-left maps to `(-1, -1)`, top-right to `(1, 1)`; the y axis is
/// flipped relative to client space.
pub fn cursor_3d(client_x: f64, client_y: f64, width: f64, height: f64) -> Point2D {
    Point2D::new(
        fraction(client_x, width) * 2.0 - 1.0,
        -(fraction(client_y, height) * 2.0) + 1.0,
    )
}

/// Pixel position clamped to `[0, width] x [0, height]`.
pub fn clamp_cursor_to_canvas(client_x: f64, client_y: f64, width: f64, height: f64) -> Point2D {
    Point2D::new(
        0.0_f64.max(width.min(client_x)),
        0.0_f64.max(height.min(client_y)),
    )
}

/// `value / size`, with degenerate sizes mapping to the center (0.5).
fn fraction(value: f64, size: f64) -> f64 {
    if size > 0.0 {
        value / size
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parallax_edges() {
        assert_eq!(
            cursor_parallax(0.0, 0.0, 200.0, 100.0),
            Point2D::new(-0.5, -0.5)
        );
        assert_eq!(
            cursor_parallax(200.0, 100.0, 200.0, 100.0),
            Point2D::new(0.5, 0.5)
        );
        assert_eq!(
            cursor_parallax(100.0, 50.0, 200.0, 100.0),
            Point2D::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_cursor_3d_corners() {
        assert_eq!(cursor_3d(0.0, 100.0, 200.0, 100.0), Point2D::new(-1.0, -1.0));
        assert_eq!(cursor_3d(200.0, 0.0, 200.0, 100.0), Point2D::new(1.0, 1.0));
        assert_eq!(cursor_3d(100.0, 50.0, 200.0, 100.0), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_size_container_maps_to_center() {
        assert_eq!(cursor_parallax(30.0, 40.0, 0.0, 0.0), Point2D::new(0.0, 0.0));
        assert_eq!(cursor_3d(30.0, 40.0, 0.0, 0.0), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn test_clamp_to_canvas() {
        assert_eq!(
            clamp_cursor_to_canvas(-5.0, 50.0, 100.0, 80.0),
            Point2D::new(0.0, 50.0)
        );
        assert_eq!(
            clamp_cursor_to_canvas(150.0, 90.0, 100.0, 80.0),
            Point2D::new(100.0, 80.0)
        );
    }

    proptest! {
        #[test]
        fn clamped_cursor_stays_on_canvas(
            x in -1.0e4..1.0e4f64,
            y in -1.0e4..1.0e4f64,
            w in 0.0..4096.0f64,
            h in 0.0..4096.0f64,
        ) {
            let p = clamp_cursor_to_canvas(x, y, w, h);
            prop_assert!(p.x >= 0.0 && p.x <= w);
            prop_assert!(p.y >= 0.0 && p.y <= h);
        }

        #[test]
        fn parallax_inside_container_is_bounded(
            fx in 0.0..=1.0f64,
            fy in 0.0..=1.0f64,
            w in 1.0..4096.0f64,
            h in 1.0..4096.0f64,
        ) {
            let p = cursor_parallax(fx * w, fy * h, w, h);
            prop_assert!(p.x >= -0.5 - 1e-9 && p.x <= 0.5 + 1e-9);
            prop_assert!(p.y >= -0.5 - 1e-9 && p.y <= 0.5 + 1e-9);
        }
    }
}
