//! Time sources and the per-frame clock.
//!
//! Every timing consumer in framekit reads time through [`TimeSource`],
//! a zero-argument monotonic reading in milliseconds. This keeps the
//! frame clock and the animator testable without a real rendering host:
//! tests and simulations drive a [`ManualTimeSource`], live loops use
//! [`MonotonicTimeSource`].

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// A monotonic time reading in milliseconds.
///
/// Implementations must never decrease between reads under normal
/// operation. Nothing in framekit detects or corrects a source that does.
pub trait TimeSource {
    /// Current reading, in milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Wall-clock time source backed by [`Instant`].
///
/// Readings are milliseconds since the source was created. Copies share
/// the same origin.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTimeSource {
    origin: Instant,
}

impl MonotonicTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// The instant that reads as `0.0`.
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for MonotonicTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTimeSource {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A hand-driven time source.
///
/// Clones share the same reading, so a test can hand one clone to a
/// clock or animator and advance time through another. Moving the reading
/// backwards is allowed and simulates clock skew.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now_ms: Rc<Cell<f64>>,
}

impl ManualTimeSource {
    /// Create a source reading `start_ms`.
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Set the reading.
    pub fn set_ms(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    /// Move the reading forward (or backward, if negative).
    pub fn advance_ms(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }

    /// Move the reading by a number of seconds.
    pub fn advance_secs(&self, delta_secs: f64) {
        self.advance_ms(delta_secs * 1000.0);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

/// Per-frame clock: elapsed time, frame delta, and an estimated frame rate.
///
/// `delta_secs` mutates the clock, so call it once per tick you want to
/// measure. Calling it twice in a row yields a near-zero delta and a huge
/// rate estimate; that is expected, not guarded against.
///
/// Negative deltas from a skewed source are passed through unclamped.
#[derive(Debug, Clone)]
pub struct FrameClock<T: TimeSource = MonotonicTimeSource> {
    source: T,
    start_ms: f64,
    last_sample_ms: f64,
    last_delta_secs: f64,
    estimated_rate: f64,
}

impl FrameClock<MonotonicTimeSource> {
    /// Create a clock on a fresh monotonic source, anchored to now.
    pub fn new() -> Self {
        Self::with_source(MonotonicTimeSource::new())
    }
}

impl Default for FrameClock<MonotonicTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> FrameClock<T> {
    /// Create a clock reading from `source`, anchored to its current reading.
    pub fn with_source(source: T) -> Self {
        let now = source.now_ms();
        Self {
            source,
            start_ms: now,
            last_sample_ms: now,
            last_delta_secs: 0.0,
            estimated_rate: 0.0,
        }
    }

    /// Seconds since construction or the last [`reset`](Self::reset).
    pub fn elapsed_secs(&self) -> f64 {
        (self.source.now_ms() - self.start_ms) / 1000.0
    }

    /// Seconds since the previous delta query, then re-anchor to now.
    ///
    /// Also updates the rate estimate to `1 / delta`, or to `0` when the
    /// delta is exactly zero.
    pub fn delta_secs(&mut self) -> f64 {
        let now = self.source.now_ms();
        let delta = (now - self.last_sample_ms) / 1000.0;
        self.last_sample_ms = now;
        self.last_delta_secs = delta;
        self.estimated_rate = if delta == 0.0 { 0.0 } else { 1.0 / delta };
        delta
    }

    /// The most recent delta, without sampling. `0` before the first query.
    pub fn last_delta_secs(&self) -> f64 {
        self.last_delta_secs
    }

    /// Rounded frames-per-second estimate from the most recent delta.
    pub fn estimated_frame_rate(&self) -> f64 {
        self.estimated_rate.round()
    }

    /// Re-anchor both timestamps to now and forget the last delta.
    ///
    /// Use when resuming after a pause so the next delta and elapsed
    /// readings do not spike.
    pub fn reset(&mut self) {
        let now = self.source.now_ms();
        tracing::debug!(
            elapsed_secs = (now - self.start_ms) / 1000.0,
            "frame clock reset"
        );
        self.start_ms = now;
        self.last_sample_ms = now;
        self.last_delta_secs = 0.0;
        self.estimated_rate = 0.0;
    }

    /// The time source this clock reads from.
    pub fn source(&self) -> &T {
        &self.source
    }
}
