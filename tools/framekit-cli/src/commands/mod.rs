pub mod clock;
pub mod config;
pub mod cursor;
pub mod page_box;
pub mod tween;

use std::time::Duration;

use framekit_common::{FrameKitError, FrameKitResult};

/// Highest frame rate the timed commands accept.
pub const MAX_FPS: u32 = 10_000;

/// Timer period for `fps`, rejecting rates outside `1..=MAX_FPS`.
pub fn frame_period(fps: u32) -> FrameKitResult<Duration> {
    if fps == 0 || fps > MAX_FPS {
        return Err(FrameKitError::invalid_argument(format!(
            "--fps must be between 1 and {MAX_FPS} (got {fps})"
        )));
    }
    Ok(Duration::from_secs_f64(1.0 / f64::from(fps)))
}
