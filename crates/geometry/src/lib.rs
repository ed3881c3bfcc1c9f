//! framekit Geometry
//!
//! Pure layout math for animation and layout code:
//! - **Rect / ViewportMetrics:** client and page rectangles, visibility tests
//! - **PageBox:** per-element position, center, and viewport coverage
//! - **Cursor:** pointer mappings for parallax, 3D picking, and canvas drawing
//!
//! No DOM access happens here; callers measure elements and pass the
//! rectangles in.

pub mod cursor;
pub mod page_box;
pub mod rect;
pub mod viewport;

pub use cursor::*;
pub use page_box::*;
pub use rect::*;
pub use viewport::*;
