use super::*;
use crate::render::recording::{RecordingHost, RecordingSurface};
use crate::session::schedule::{ManualClock, ManualScheduler};

type TestRenderer = WaveFieldRenderer<RecordingSurface, ManualClock>;

fn vp(width: u32, height: u32) -> Viewport {
    Viewport { width, height }
}

fn renderer(seed: u64) -> (TestRenderer, ManualClock) {
    let clock = ManualClock::new(100.0);
    let r = WaveFieldRenderer::initialize(
        &mut RecordingHost::default(),
        vp(800, 600),
        WaveFieldConfig::default(),
        Some(seed),
        clock.clone(),
    )
    .unwrap();
    (r, clock)
}

fn fire(r: &mut TestRenderer, s: &mut ManualScheduler) -> bool {
    let req = s.next_due().expect("a frame is pending");
    r.tick(req, s).unwrap()
}

#[test]
fn initialize_binds_viewport_and_background_layer() {
    let (r, _) = renderer(1);
    assert_eq!(r.lifecycle(), Lifecycle::Idle);
    assert_eq!(r.surface().size(), vp(800, 600));
    assert_eq!(r.surface().layer(), Some(SurfaceLayer::BACKGROUND));
    assert_eq!(r.field().len(), 12);
    assert_eq!(r.state().scroll_y, 0.0);
}

#[test]
fn missing_surface_disables_renderer() {
    let mut host = RecordingHost { available: false };
    let err = TestRenderer::initialize(
        &mut host,
        vp(800, 600),
        WaveFieldConfig::default(),
        None,
        ManualClock::default(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, WavelengthError::Surface(_)));

    let disabled = TestRenderer::initialize_or_disable(
        &mut host,
        vp(800, 600),
        WaveFieldConfig::default(),
        None,
        ManualClock::default(),
    );
    assert!(disabled.is_none());
}

#[test]
fn empty_viewport_is_rejected() {
    let res = TestRenderer::initialize(
        &mut RecordingHost::default(),
        vp(0, 600),
        WaveFieldConfig::default(),
        None,
        ManualClock::default(),
    );
    assert!(res.is_err());
}

#[test]
fn ticks_draw_and_reschedule() {
    let (mut r, clock) = renderer(2);
    let mut s = ManualScheduler::new();
    r.start(&mut s);
    assert_eq!(r.lifecycle(), Lifecycle::Running);
    assert_eq!(s.pending_len(), 1);

    clock.advance(0.5);
    assert!(fire(&mut r, &mut s));
    assert_eq!(r.state().elapsed_secs, 0.5);
    assert_eq!(r.surface().strokes().len(), 12);
    assert_eq!(s.pending_len(), 1);

    clock.advance(0.25);
    assert!(fire(&mut r, &mut s));
    assert_eq!(r.state().elapsed_secs, 0.75);
    assert_eq!(r.frames_drawn(), 2);
}

#[test]
fn start_twice_requests_one_frame() {
    let (mut r, _) = renderer(3);
    let mut s = ManualScheduler::new();
    r.start(&mut s);
    r.start(&mut s);
    assert_eq!(s.pending_len(), 1);
}

#[test]
fn stop_cancels_pending_and_ignores_stale_callbacks() {
    let (mut r, _) = renderer(4);
    let mut s = ManualScheduler::new();
    r.start(&mut s);
    assert!(fire(&mut r, &mut s));
    let stale = r.pending_request().unwrap();

    r.stop(&mut s);
    assert_eq!(r.lifecycle(), Lifecycle::Stopped);
    assert_eq!(s.pending_len(), 0);

    // A callback that was already enqueued by the host still fires.
    for _ in 0..5 {
        assert!(!r.tick(stale, &mut s).unwrap());
    }
    assert_eq!(r.frames_drawn(), 1);
    assert_eq!(r.surface().total_strokes(), 12);
    assert_eq!(s.pending_len(), 0);

    r.stop(&mut s);
    assert_eq!(r.lifecycle(), Lifecycle::Stopped);
}

#[test]
fn stopped_renderer_cannot_restart() {
    let (mut r, _) = renderer(5);
    let mut s = ManualScheduler::new();
    r.start(&mut s);
    r.stop(&mut s);
    r.start(&mut s);
    assert_eq!(r.lifecycle(), Lifecycle::Stopped);
    assert_eq!(s.pending_len(), 0);
}

#[test]
fn tick_before_start_draws_nothing() {
    let (mut r, _) = renderer(6);
    let mut s = ManualScheduler::new();
    assert!(!r.tick(FrameRequest(1), &mut s).unwrap());
    assert_eq!(r.surface().total_strokes(), 0);
}

#[test]
fn resize_replaces_field_and_sets_exact_dimensions() {
    let (mut r, _) = renderer(7);
    let before = r.field().clone();
    r.on_resize(1280, 720).unwrap();
    assert_eq!(r.surface().size(), vp(1280, 720));
    assert_eq!((r.state().width, r.state().height), (1280, 720));
    assert_eq!(r.field().len(), 12);
    assert_ne!(r.field(), &before);
    assert!(r.on_resize(0, 720).is_err());
}

#[test]
fn scroll_moves_baselines_without_regenerating() {
    let (mut r, _) = renderer(8);
    let mut s = ManualScheduler::new();
    let field = r.field().clone();
    r.start(&mut s);
    fire(&mut r, &mut s);
    let y0: Vec<f64> = r.surface().strokes().iter().map(|o| o.points[0].y).collect();

    r.on_scroll(250.0);
    assert_eq!(r.state().scroll_y, 250.0);
    assert_eq!(r.field(), &field);
    fire(&mut r, &mut s);
    let y1: Vec<f64> = r.surface().strokes().iter().map(|o| o.points[0].y).collect();
    assert_ne!(y0, y1);
}

#[test]
fn non_finite_scroll_keeps_last_position() {
    let (mut r, _) = renderer(8);
    let mut s = ManualScheduler::new();
    r.on_scroll(120.0);
    r.on_scroll(f64::INFINITY);
    r.on_scroll(f64::NAN);
    assert_eq!(r.state().scroll_y, 120.0);

    r.start(&mut s);
    fire(&mut r, &mut s);
    assert!(
        r.surface()
            .strokes()
            .iter()
            .flat_map(|o| &o.points)
            .all(|p| p.x.is_finite() && p.y.is_finite())
    );
}

#[test]
fn seeded_renderers_match() {
    let (a, _) = renderer(42);
    let (b, _) = renderer(42);
    assert_eq!(a.field(), b.field());
}
