use crate::foundation::core::{Fps, Rgb8, Viewport};
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::wave::generate::WaveFieldConfig;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON description of an offline wave background render.
///
/// Every field has a default, so `{}` is a valid scene (800x600, 30 fps, 5 s, twelve noisy waves).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub fps: Fps,
    pub duration_secs: f64,
    /// Simulated page scroll speed in pixels per second, for parallax.
    pub scroll_speed: f64,
    pub waves: WaveFieldConfig,
    /// Seed for field generation and noise. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Opaque page colour behind the waves. `None` keeps the background transparent.
    pub background: Option<Rgb8>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: 800,
                height: 600,
            },
            fps: Fps { num: 30, den: 1 },
            duration_secs: 5.0,
            scroll_speed: 0.0,
            waves: WaveFieldConfig::default(),
            seed: None,
            background: None,
        }
    }
}

impl SceneConfig {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WavelengthResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WavelengthError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WavelengthResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WavelengthError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> WavelengthResult<()> {
        Viewport::new(self.viewport.width, self.viewport.height)?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(WavelengthError::validation(format!(
                "duration_secs must be a positive number, got {}",
                self.duration_secs
            )));
        }
        if !self.scroll_speed.is_finite() {
            return Err(WavelengthError::validation("scroll_speed must be finite"));
        }
        self.waves.validate()
    }

    /// Number of frames in the scene, at least one.
    pub fn duration_frames(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_secs).max(1)
    }

    /// Straight-alpha clear colour for raster surfaces.
    pub fn clear_rgba(&self) -> Option<[u8; 4]> {
        self.background.map(|c| c.with_opacity(1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
