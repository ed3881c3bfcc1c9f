//! framekit Motion
//!
//! Frame-driven animation primitives:
//! - **Math:** clamp, lerp, damp, and range mapping helpers
//! - **Easing:** quadratic ease-in/out curves and the [`Easing`] selector
//! - **Scheduling:** the [`FrameScheduler`] seam and the host-drained [`FrameQueue`]
//! - **Animator:** [`FrameAnimator`], which tweens a value once per frame
//!
//! Single-threaded by construction: time and frames are injected, nothing
//! here sleeps or spawns.

pub mod animator;
pub mod easing;
pub mod math;
pub mod scheduler;

pub use animator::{AnimationHandle, FrameAnimator, Tween};
pub use easing::{Easing, EasingFn};
pub use scheduler::{FrameCallback, FrameQueue, FrameScheduler};
