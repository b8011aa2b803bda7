use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::foundation::math::unpremul_u8;
use crate::render::backend::FrameRGBA;
use std::path::PathBuf;

/// Configuration provided to a [`FrameSink`] at the start of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> WavelengthResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavelengthResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> WavelengthResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> WavelengthResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavelengthResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> WavelengthResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    scratch: Vec<u8>,
    written: u64,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            scratch: Vec::new(),
            written: 0,
        }
    }

    /// Path of the file written for `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Number of frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> WavelengthResult<()> {
        use anyhow::Context as _;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output directory '{}'", self.dir.display()))?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WavelengthResult<()> {
        let path = self.frame_path(idx);
        write_png(&path, frame, &mut self.scratch)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> WavelengthResult<()> {
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// Write `frame` as a straight-alpha RGBA PNG, un-premultiplying into `scratch` when needed.
pub fn write_png(
    path: &std::path::Path,
    frame: &FrameRGBA,
    scratch: &mut Vec<u8>,
) -> WavelengthResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(WavelengthError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }

    let bytes: &[u8] = if frame.premultiplied {
        scratch.clear();
        scratch.extend(frame.data.chunks_exact(4).flat_map(|px| {
            let a = px[3];
            [
                unpremul_u8(px[0], a),
                unpremul_u8(px[1], a),
                unpremul_u8(px[2], a),
                a,
            ]
        }));
        scratch.as_slice()
    } else {
        &frame.data
    };

    image::save_buffer_with_format(
        path,
        bytes,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| WavelengthError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
