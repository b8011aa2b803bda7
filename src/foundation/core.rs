use crate::foundation::error::{WavelengthError, WavelengthResult};

pub use kurbo::{BezPath, Point};

/// Absolute 0-based frame index in an offline render.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> WavelengthResult<Self> {
        if den == 0 {
            return Err(WavelengthError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(WavelengthError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Viewport (and drawing surface) dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a validated viewport; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> WavelengthResult<Self> {
        if width == 0 || height == 0 {
            return Err(WavelengthError::validation(format!(
                "viewport must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Straight (non-premultiplied) 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a colour from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Straight RGBA8 with `opacity` in `[0, 1]` mapped onto the alpha channel.
    pub fn with_opacity(self, opacity: f64) -> [u8; 4] {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
