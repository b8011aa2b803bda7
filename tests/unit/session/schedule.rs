use super::*;

#[test]
fn requests_fire_in_fifo_order() {
    let mut s = ManualScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    assert_ne!(a, b);
    assert_eq!(s.pending_len(), 2);
    assert_eq!(s.next_due(), Some(a));
    assert_eq!(s.next_due(), Some(b));
    assert_eq!(s.next_due(), None);
}

#[test]
fn cancel_removes_only_that_request() {
    let mut s = ManualScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    s.cancel_frame(a);
    s.cancel_frame(a);
    s.cancel_frame(FrameRequest(999));
    assert_eq!(s.next_due(), Some(b));
    assert_eq!(s.pending_len(), 0);
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(1.0);
    let handle = clock.clone();
    handle.advance(0.5);
    assert_eq!(clock.now_secs(), 1.5);
    handle.set(10.0);
    assert_eq!(clock.now_secs(), 10.0);
}

#[test]
fn monotonic_clock_does_not_go_backwards() {
    let clock = MonotonicClock::default();
    let a = clock.now_secs();
    let b = clock.now_secs();
    assert!(a >= 0.0);
    assert!(b >= a);
}
