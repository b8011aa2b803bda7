use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{CpuSurface, CpuSurfaceHost, CpuSurfaceOpts};
use crate::scene::config::SceneConfig;
use crate::session::renderer::WaveFieldRenderer;
use crate::session::schedule::{ManualClock, ManualScheduler};

/// Offline render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the scene.
    pub frames_total: u64,
    /// Frames drawn and pushed to the sink.
    pub frames_rendered: u64,
}

type OfflineRenderer = WaveFieldRenderer<CpuSurface, ManualClock>;

/// Renderer on a CPU surface plus the clock and scheduler that drive it.
struct OfflineDriver {
    renderer: OfflineRenderer,
    clock: ManualClock,
    scheduler: ManualScheduler,
}

impl OfflineDriver {
    fn new(scene: &SceneConfig) -> WavelengthResult<Self> {
        scene.validate()?;
        let clock = ManualClock::new(0.0);
        let mut host =
            CpuSurfaceHost::new(CpuSurfaceOpts::default().with_clear_rgba(scene.clear_rgba()));
        let mut renderer = WaveFieldRenderer::initialize(
            &mut host,
            scene.viewport,
            scene.waves,
            scene.seed,
            clock.clone(),
        )?;
        let mut scheduler = ManualScheduler::new();
        renderer.start(&mut scheduler);
        Ok(Self {
            renderer,
            clock,
            scheduler,
        })
    }

    /// Advance to `time_secs` / `scroll_y` and fire the pending frame.
    fn draw_at(&mut self, time_secs: f64, scroll_y: f64) -> WavelengthResult<FrameRGBA> {
        self.clock.set(time_secs);
        self.renderer.on_scroll(scroll_y);
        let req = self
            .scheduler
            .next_due()
            .ok_or_else(|| WavelengthError::render("no frame pending on the offline scheduler"))?;
        if !self.renderer.tick(req, &mut self.scheduler)? {
            return Err(WavelengthError::render("renderer skipped a scheduled frame"));
        }
        Ok(self.renderer.surface().frame())
    }

    fn finish(mut self) {
        self.renderer.stop(&mut self.scheduler);
    }
}

/// Render every frame of `scene` into `sink`.
///
/// Frame `i` is drawn at `i / fps` seconds with the page scrolled to `scroll_speed * t`.
#[tracing::instrument(skip_all, fields(width = scene.viewport.width, height = scene.viewport.height))]
pub fn render_animation(
    scene: &SceneConfig,
    sink: &mut dyn FrameSink,
) -> WavelengthResult<RenderStats> {
    let mut driver = OfflineDriver::new(scene)?;
    let frames_total = scene.duration_frames();

    sink.begin(SinkConfig {
        width: scene.viewport.width,
        height: scene.viewport.height,
        fps: scene.fps,
    })?;

    let mut stats = RenderStats {
        frames_total,
        frames_rendered: 0,
    };
    for i in 0..frames_total {
        let t = scene.fps.frames_to_secs(i);
        let frame = driver.draw_at(t, scene.scroll_speed * t)?;
        sink.push_frame(FrameIndex(i), &frame)?;
        stats.frames_rendered += 1;
    }

    driver.finish();
    sink.end()?;
    tracing::info!(frames = stats.frames_rendered, "animation rendered");
    Ok(stats)
}

/// Render a single frame of `scene` at `time_secs` with the page scrolled to `scroll_y`.
pub fn render_still(
    scene: &SceneConfig,
    time_secs: f64,
    scroll_y: f64,
) -> WavelengthResult<FrameRGBA> {
    if !time_secs.is_finite() || time_secs < 0.0 {
        return Err(WavelengthError::validation(
            "time must be a non-negative number of seconds",
        ));
    }
    if !scroll_y.is_finite() {
        return Err(WavelengthError::validation(format!(
            "scroll position must be finite, got {scroll_y}"
        )));
    }
    let mut driver = OfflineDriver::new(scene)?;
    let frame = driver.draw_at(time_secs, scroll_y)?;
    driver.finish();
    Ok(frame)
}
