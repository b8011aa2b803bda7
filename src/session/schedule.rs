use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

/// Handle to one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Per-frame callback scheduling, in the style of `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Request one callback on the next frame.
    fn request_frame(&mut self) -> FrameRequest;
    /// Cancel a pending request. Unknown or already-fired requests are ignored.
    fn cancel_frame(&mut self, req: FrameRequest);
}

/// Scheduler whose frames fire only when the owner pops them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameRequest>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, i.e. "the next frame fires".
    pub fn next_due(&mut self) -> Option<FrameRequest> {
        self.pending.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let req = FrameRequest(self.next_id);
        self.pending.push_back(req);
        req
    }

    fn cancel_frame(&mut self, req: FrameRequest) {
        self.pending.retain(|r| *r != req);
    }
}

/// Monotonic time source, in seconds.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Wall-clock monotonic time from [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Settable clock. Clones share the same time, so a driver can keep a handle while the
/// renderer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(now_secs: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_secs)),
        }
    }

    pub fn set(&self, now_secs: f64) {
        self.now.set(now_secs);
    }

    pub fn advance(&self, delta_secs: f64) {
        self.now.set(self.now.get() + delta_secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/schedule.rs"]
mod tests;
