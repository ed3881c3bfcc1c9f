//! Frame scheduling
//!
//! The animator never waits or sleeps. It asks a [`FrameScheduler`] to run
//! a callback before the next rendering frame, and the host decides when
//! frames happen.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A callback to run once on the next frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// "Run this once before the next frame."
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &S {
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback)
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback)
    }
}

/// Single-threaded frame queue drained by the host loop.
///
/// Clones share one queue. Each [`run_frame`](Self::run_frame) runs the
/// callbacks that were pending when it started; callbacks requested while
/// a frame is running wait for the following frame.
///
/// A pending animation frame holds a clone of the queue it was scheduled
/// on. Dropping the last outside handle to a queue that still has pending
/// callbacks leaks them along with the queue. Drain it with
/// [`run_until_idle`](Self::run_until_idle), after cancelling any
/// animations that should not finish, before letting it go.
#[derive(Clone, Default)]
pub struct FrameQueue {
    pending: Rc<RefCell<VecDeque<FrameCallback>>>,
    frames_run: Rc<Cell<u64>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame. Returns the number of callbacks executed.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        self.frames_run.set(self.frames_run.get() + 1);

        let count = due.len();
        for callback in due {
            callback();
        }
        tracing::trace!(callbacks = count, "frame executed");
        count
    }

    /// Run frames until nothing is pending or `max_frames` have run.
    ///
    /// Returns the number of frames run.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && !self.is_idle() {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    /// Callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Total frames run on this queue.
    pub fn frames_run(&self) -> u64 {
        self.frames_run.get()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .field("frames_run", &self.frames_run())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_pending_callbacks_once() {
        let queue = FrameQueue::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            queue.request_frame(Box::new(move || hits.set(hits.get() + 1)));
        }
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_frame(), 3);
        assert_eq!(hits.get(), 3);
        assert!(queue.is_idle());
        assert_eq!(queue.run_frame(), 0);
        assert_eq!(queue.frames_run(), 2);
    }

    #[test]
    fn test_requests_during_frame_wait_for_next_frame() {
        let queue = FrameQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let inner_queue = queue.clone();
        let inner_order = Rc::clone(&order);
        queue.request_frame(Box::new(move || {
            inner_order.borrow_mut().push("first");
            let order = Rc::clone(&inner_order);
            inner_queue.request_frame(Box::new(move || order.borrow_mut().push("second")));
        }));

        queue.run_frame();
        assert_eq!(*order.borrow(), vec!["first"]);
        assert_eq!(queue.pending(), 1);

        queue.run_frame();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        fn requeue_forever(queue: FrameQueue) {
            let next = queue.clone();
            queue.request_frame(Box::new(move || requeue_forever(next)));
        }

        let queue = FrameQueue::new();
        requeue_forever(queue.clone());
        assert_eq!(queue.run_until_idle(5), 5);
        assert_eq!(queue.pending(), 1);
    }
}
