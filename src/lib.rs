//! Wavelength renders a procedural background of layered, breathing sine waves.
//!
//! - Generate a [`WaveField`] from the bass/mid/treble/harmony archetypes
//! - Drive a [`WaveFieldRenderer`] with a [`FrameScheduler`] and a [`Clock`]
//! - Render offline into a [`FrameSink`] (PNG sequence or in-memory)
//!
//! The [`projects`] module renders a JSON project list into HTML cards.
#![forbid(unsafe_code)]

mod foundation;

/// Encoding sinks.
pub mod encode;
/// Project list and card markup.
pub mod projects;
/// Drawing surfaces and frame rendering.
pub mod render;
/// Scene configuration.
pub mod scene;
/// Renderer lifecycle and offline rendering.
pub mod session;
/// Wave model, generation and sampling.
pub mod wave;

pub use crate::foundation::core::{BezPath, Fps, FrameIndex, Point, Rgb8, Viewport};
pub use crate::foundation::error::{WavelengthError, WavelengthResult};

pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::render::backend::{
    BACKGROUND_SURFACE_ID, DrawSurface, FrameRGBA, StrokeStyle, SurfaceHost, SurfaceLayer,
};
pub use crate::render::cpu::{CpuSurface, CpuSurfaceHost, CpuSurfaceOpts};
pub use crate::render::frame::render_frame;
pub use crate::render::recording::{RecordingHost, RecordingSurface, StrokeOp};
pub use crate::scene::config::SceneConfig;
pub use crate::session::offline::{RenderStats, render_animation, render_still};
pub use crate::session::renderer::{Lifecycle, WaveFieldRenderer};
pub use crate::session::schedule::{
    Clock, FrameRequest, FrameScheduler, ManualClock, ManualScheduler, MonotonicClock,
};
pub use crate::wave::generate::{WaveFieldConfig, generate_wave_field, y_offset_ratio};
pub use crate::wave::model::{ARCHETYPES, Archetype, Palette, Wave, WaveField, WaveNoise};
pub use crate::wave::rng::WaveRng;
pub use crate::wave::sample::RenderState;
