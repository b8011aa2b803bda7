use crate::foundation::core::Viewport;
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::render::backend::{BACKGROUND_SURFACE_ID, DrawSurface, SurfaceHost, SurfaceLayer};
use crate::render::frame::render_frame;
use crate::session::schedule::{Clock, FrameRequest, FrameScheduler, MonotonicClock};
use crate::wave::generate::{WaveFieldConfig, generate_wave_field};
use crate::wave::model::WaveField;
use crate::wave::rng::WaveRng;
use crate::wave::sample::RenderState;

/// Renderer lifecycle. There is no path from `Stopped` back to `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, no frame requested yet.
    Idle,
    Running,
    Stopped,
}

/// Animated wave background bound to one drawing surface.
///
/// The renderer never schedules itself implicitly: call [`WaveFieldRenderer::start`], then feed
/// every fired frame request to [`WaveFieldRenderer::tick`]. Resize and scroll notifications go
/// through [`WaveFieldRenderer::on_resize`] and [`WaveFieldRenderer::on_scroll`].
pub struct WaveFieldRenderer<S, C = MonotonicClock> {
    surface: S,
    clock: C,
    config: WaveFieldConfig,
    field: WaveField,
    state: RenderState,
    start_secs: f64,
    rng: WaveRng,
    noise: WaveRng,
    lifecycle: Lifecycle,
    pending: Option<FrameRequest>,
    frames_drawn: u64,
}

impl<S: DrawSurface, C: Clock> WaveFieldRenderer<S, C> {
    /// Acquire the background surface from `host`, size it to `viewport` and build the first field.
    pub fn initialize<H>(
        host: &mut H,
        viewport: Viewport,
        config: WaveFieldConfig,
        seed: Option<u64>,
        clock: C,
    ) -> WavelengthResult<Self>
    where
        H: SurfaceHost<Surface = S>,
    {
        let viewport = Viewport::new(viewport.width, viewport.height)?;
        let surface = host.acquire(BACKGROUND_SURFACE_ID, viewport)?;
        Self::with_surface(surface, config, seed, clock)
    }

    /// Like [`WaveFieldRenderer::initialize`], but a failure is logged and yields `None` so the
    /// caller can carry on without a background.
    pub fn initialize_or_disable<H>(
        host: &mut H,
        viewport: Viewport,
        config: WaveFieldConfig,
        seed: Option<u64>,
        clock: C,
    ) -> Option<Self>
    where
        H: SurfaceHost<Surface = S>,
    {
        match Self::initialize(host, viewport, config, seed, clock) {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                tracing::error!(error = %err, "wave background disabled");
                None
            }
        }
    }

    /// Build a renderer around an already acquired surface.
    pub fn with_surface(
        mut surface: S,
        config: WaveFieldConfig,
        seed: Option<u64>,
        clock: C,
    ) -> WavelengthResult<Self> {
        config.validate()?;
        let size = surface.size();
        if size.width == 0 || size.height == 0 {
            return Err(WavelengthError::surface("surface width/height must be non-zero"));
        }
        surface.apply_layer(&SurfaceLayer::BACKGROUND);

        let mut rng = WaveRng::from_optional_seed(seed);
        let noise = rng.noise_stream();
        let field = generate_wave_field(&config, &mut rng);
        let start_secs = clock.now_secs();
        tracing::debug!(
            width = size.width,
            height = size.height,
            waves = field.len(),
            "wave renderer initialized"
        );

        Ok(Self {
            surface,
            clock,
            config,
            field,
            state: RenderState {
                width: size.width,
                height: size.height,
                scroll_y: 0.0,
                elapsed_secs: 0.0,
            },
            start_secs,
            rng,
            noise,
            lifecycle: Lifecycle::Idle,
            pending: None,
            frames_drawn: 0,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn config(&self) -> &WaveFieldConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Frames drawn since construction.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Pending frame request, if one is scheduled.
    pub fn pending_request(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Discard the current field and draw a fresh one.
    pub fn regenerate(&mut self) {
        self.field = generate_wave_field(&self.config, &mut self.rng);
    }

    /// Match the surface to a new viewport size and regenerate the field.
    pub fn on_resize(&mut self, width: u32, height: u32) -> WavelengthResult<()> {
        let viewport = Viewport::new(width, height)?;
        self.surface.resize(viewport)?;
        self.state.width = width;
        self.state.height = height;
        self.regenerate();
        tracing::debug!(width, height, "wave renderer resized");
        Ok(())
    }

    /// Record the page scroll position used for parallax. Non-finite positions are ignored.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            tracing::warn!(scroll_y, "ignoring non-finite scroll position");
            return;
        }
        self.state.scroll_y = scroll_y;
    }

    /// Request the first frame. Ignored unless the renderer is idle.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        match self.lifecycle {
            Lifecycle::Idle => {
                self.pending = Some(scheduler.request_frame());
                self.lifecycle = Lifecycle::Running;
                tracing::debug!("wave renderer started");
            }
            Lifecycle::Running => {}
            Lifecycle::Stopped => {
                tracing::warn!("start() on a stopped wave renderer is ignored");
            }
        }
    }

    /// Handle a fired frame request: draw one frame and request the next.
    ///
    /// Returns `Ok(false)` without drawing when the renderer is not running or `req` is not the
    /// request it is waiting for (e.g. a callback that fires after [`WaveFieldRenderer::stop`]).
    pub fn tick(
        &mut self,
        req: FrameRequest,
        scheduler: &mut dyn FrameScheduler,
    ) -> WavelengthResult<bool> {
        if self.lifecycle != Lifecycle::Running || self.pending != Some(req) {
            tracing::trace!(?req, lifecycle = ?self.lifecycle, "stale frame request ignored");
            return Ok(false);
        }
        self.pending = None;

        self.state.elapsed_secs = self.clock.now_secs() - self.start_secs;
        if let Err(err) = render_frame(
            &mut self.surface,
            &self.field,
            &self.state,
            &mut self.noise,
        ) {
            self.lifecycle = Lifecycle::Stopped;
            return Err(err);
        }
        self.frames_drawn += 1;

        self.pending = Some(scheduler.request_frame());
        Ok(true)
    }

    /// Cancel the pending frame and stop for good. Idempotent.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(req) = self.pending.take() {
            scheduler.cancel_frame(req);
        }
        if self.lifecycle != Lifecycle::Stopped {
            self.lifecycle = Lifecycle::Stopped;
            tracing::debug!(frames = self.frames_drawn, "wave renderer stopped");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/renderer.rs"]
mod tests;
