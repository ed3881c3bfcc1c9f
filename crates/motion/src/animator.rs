//! Frame-driven tweening.
//!
//! [`FrameAnimator::animate`] moves one number from `start` to `end` over a
//! fixed duration. Each scheduled frame reads the time source, computes
//! progress, applies the easing curve, and hands the interpolated value to
//! the update callback. The completion callback fires once, after the final
//! update, when progress reaches 1.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use framekit_common::clock::{MonotonicTimeSource, TimeSource};

use crate::easing::Easing;
use crate::math::{clamp, lerp};
use crate::scheduler::{FrameQueue, FrameScheduler};

/// What to animate: endpoints, duration and easing.
#[derive(Debug, Clone)]
pub struct Tween {
    pub start: f64,
    pub end: f64,
    /// Duration in seconds. Zero, negative and NaN durations complete
    /// immediately.
    pub duration_secs: f64,
    pub easing: Easing,
}

impl Tween {
    /// A linear tween.
    pub fn new(start: f64, end: f64, duration_secs: f64) -> Self {
        Self {
            start,
            end,
            duration_secs,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Progress in `[0, 1]` after `elapsed_secs`.
    pub fn progress_at(&self, elapsed_secs: f64) -> f64 {
        if self.completes_immediately() {
            return 1.0;
        }
        clamp(elapsed_secs / self.duration_secs, 0.0, 1.0)
    }

    /// Interpolated value at a given progress.
    ///
    /// Eased progress is clamped by [`lerp`], so the value stays between
    /// `start` and `end` even for overshooting curves.
    pub fn value_at_progress(&self, progress: f64) -> f64 {
        lerp(self.start, self.end, self.easing.apply(progress))
    }

    /// Interpolated value after `elapsed_secs`.
    pub fn value_at(&self, elapsed_secs: f64) -> f64 {
        self.value_at_progress(self.progress_at(elapsed_secs))
    }

    fn completes_immediately(&self) -> bool {
        self.duration_secs.is_nan() || self.duration_secs <= 0.0
    }
}

#[derive(Debug, Default)]
struct Status {
    cancelled: Cell<bool>,
    finished: Cell<bool>,
    frames: Cell<u64>,
}

/// Handle to a running animation.
///
/// Dropping the handle does not stop the animation.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    status: Rc<Status>,
}

impl AnimationHandle {
    /// Stop the animation before its next frame.
    ///
    /// No further updates are delivered and the completion callback never
    /// fires. Has no effect once the animation has finished.
    ///
    /// The frame already requested stays queued: the scheduler is not
    /// told about the cancellation, so [`FrameQueue::is_idle`] stays false
    /// until the next `run_frame` discards it. That frame also releases
    /// the animation's state and callbacks.
    pub fn cancel(&self) {
        if !self.status.finished.get() {
            self.status.cancelled.set(true);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.cancelled.get()
    }

    /// The final update has been delivered.
    pub fn is_finished(&self) -> bool {
        self.status.finished.get()
    }

    /// Neither finished nor cancelled.
    pub fn is_active(&self) -> bool {
        !self.is_finished() && !self.is_cancelled()
    }

    /// Number of update callbacks delivered so far.
    pub fn frames(&self) -> u64 {
        self.status.frames.get()
    }
}

type UpdateFn = Box<dyn FnMut(f64)>;
type CompleteFn = Box<dyn FnOnce(f64)>;

/// Starts tweens on an injected time source and frame scheduler.
///
/// Every call to `animate` owns its own state; concurrent animations only
/// share the (read-only) time source.
#[derive(Debug, Clone)]
pub struct FrameAnimator<T = MonotonicTimeSource, S = FrameQueue> {
    time: T,
    scheduler: S,
}

impl<T, S> FrameAnimator<T, S>
where
    T: TimeSource + Clone + 'static,
    S: FrameScheduler + Clone + 'static,
{
    pub fn new(time: T, scheduler: S) -> Self {
        Self { time, scheduler }
    }

    /// Start a tween with an update callback.
    pub fn animate<U>(&self, tween: Tween, on_update: U) -> AnimationHandle
    where
        U: FnMut(f64) + 'static,
    {
        self.launch(tween, Box::new(on_update), None)
    }

    /// Start a tween with update and completion callbacks.
    ///
    /// `on_complete` receives `tween.end`.
    pub fn animate_then<U, C>(&self, tween: Tween, on_update: U, on_complete: C) -> AnimationHandle
    where
        U: FnMut(f64) + 'static,
        C: FnOnce(f64) + 'static,
    {
        self.launch(tween, Box::new(on_update), Some(Box::new(on_complete)))
    }

    pub fn time_source(&self) -> &T {
        &self.time
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn launch(
        &self,
        tween: Tween,
        mut on_update: UpdateFn,
        on_complete: Option<CompleteFn>,
    ) -> AnimationHandle {
        let status = Rc::new(Status::default());
        let handle = AnimationHandle {
            status: Rc::clone(&status),
        };

        if tween.completes_immediately() {
            tracing::debug!(
                duration_secs = tween.duration_secs,
                "non-positive duration; completing immediately"
            );
            status.frames.set(1);
            on_update(tween.end);
            status.finished.set(true);
            if let Some(on_complete) = on_complete {
                on_complete(tween.end);
            }
            return handle;
        }

        tracing::debug!(
            start = tween.start,
            end = tween.end,
            duration_secs = tween.duration_secs,
            easing = %tween.easing,
            "animation started"
        );

        let run = Rc::new(Run {
            tween,
            started_ms: self.time.now_ms(),
            time: self.time.clone(),
            scheduler: self.scheduler.clone(),
            on_update: RefCell::new(on_update),
            on_complete: Cell::new(on_complete),
            status,
        });
        run.schedule();
        handle
    }
}

/// Per-invocation state, shared between the scheduled frame callbacks.
struct Run<T, S> {
    tween: Tween,
    started_ms: f64,
    time: T,
    scheduler: S,
    on_update: RefCell<UpdateFn>,
    on_complete: Cell<Option<CompleteFn>>,
    status: Rc<Status>,
}

impl<T, S> Run<T, S>
where
    T: TimeSource + 'static,
    S: FrameScheduler + 'static,
{
    fn schedule(self: Rc<Self>) {
        let next = Rc::clone(&self);
        self.scheduler.request_frame(Box::new(move || next.tick()));
    }

    fn tick(self: Rc<Self>) {
        if self.status.cancelled.get() {
            tracing::trace!("animation cancelled; dropping frame");
            return;
        }

        let elapsed = (self.time.now_ms() - self.started_ms) / 1000.0;
        let progress = self.tween.progress_at(elapsed);
        let value = self.tween.value_at_progress(progress);

        self.status.frames.set(self.status.frames.get() + 1);
        (&mut *self.on_update.borrow_mut())(value);

        // The update callback may have cancelled us.
        if self.status.cancelled.get() {
            return;
        }

        if progress < 1.0 {
            self.schedule();
        } else {
            self.finish();
        }
    }

    fn finish(&self) {
        self.status.finished.set(true);
        tracing::debug!(
            frames = self.status.frames.get(),
            end = self.tween.end,
            "animation complete"
        );
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(self.tween.end);
        }
    }
}
