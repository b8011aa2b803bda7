use crate::foundation::core::Rgb8;
use crate::foundation::error::{WavelengthError, WavelengthResult};

/// Number of waves in a default field.
pub const DEFAULT_WAVE_COUNT: usize = 12;

/// Parameter ranges shared by every wave generated from one "instrument".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Archetype {
    /// Human-readable label, used in logs only.
    pub name: &'static str,
    /// `[min, max)` amplitude in pixels.
    pub amplitude: [f64; 2],
    /// `[min, max)` frequency in radians per horizontal pixel.
    pub frequency: [f64; 2],
    /// `[min, max)` phase speed in radians per second.
    pub speed: [f64; 2],
    /// Stroke width.
    pub thickness: f64,
    /// Noise level baseline, scaled per wave in the noisy profile.
    pub noise_level: f64,
}

/// Bass, mid, treble and harmony archetypes, cycled by wave index.
pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        name: "bass",
        amplitude: [40.0, 80.0],
        frequency: [0.002, 0.004],
        speed: [0.5, 1.2],
        thickness: 2.5,
        noise_level: 0.08,
    },
    Archetype {
        name: "mid",
        amplitude: [15.0, 45.0],
        frequency: [0.006, 0.012],
        speed: [1.0, 2.5],
        thickness: 1.8,
        noise_level: 0.05,
    },
    Archetype {
        name: "treble",
        amplitude: [5.0, 25.0],
        frequency: [0.015, 0.035],
        speed: [2.0, 4.5],
        thickness: 1.2,
        noise_level: 0.03,
    },
    Archetype {
        name: "harmony",
        amplitude: [10.0, 30.0],
        frequency: [0.008, 0.018],
        speed: [0.8, 3.2],
        thickness: 1.5,
        noise_level: 0.06,
    },
];

/// Archetype used for the wave at `index`.
pub fn archetype_for(index: usize) -> &'static Archetype {
    &ARCHETYPES[index % ARCHETYPES.len()]
}

/// Two-colour palette with a weighted pick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub primary: Rgb8,
    pub secondary: Rgb8,
    /// Probability of picking `primary`, in `[0, 1]`.
    pub primary_weight: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb8::new(68, 100, 173),
            secondary: Rgb8::new(164, 176, 245),
            primary_weight: 0.5,
        }
    }
}

impl Palette {
    /// Pick a colour from a unit sample `r` in `[0, 1)`.
    pub fn pick(&self, r: f64) -> Rgb8 {
        if r > 1.0 - self.primary_weight {
            self.primary
        } else {
            self.secondary
        }
    }

    pub fn validate(&self) -> WavelengthResult<()> {
        if !(0.0..=1.0).contains(&self.primary_weight) {
            return Err(WavelengthError::validation(format!(
                "palette primary_weight must be in [0, 1], got {}",
                self.primary_weight
            )));
        }
        Ok(())
    }
}

/// Organic jitter parameters, only present in the noisy profile.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveNoise {
    /// Jitter magnitude as a fraction of the wave amplitude.
    pub level: f64,
    /// Rate of the smooth time-varying noise term.
    pub frequency: f64,
}

/// One oscillating curve. Immutable once generated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    /// Baseline as a fraction of surface height, in `(0, 1)`.
    pub y_offset_ratio: f64,
    pub opacity: f64,
    pub phase: f64,
    pub color: Rgb8,
    pub thickness: f64,
    /// Number of stacked overtones, in `1..=3`.
    pub harmonics: u32,
    pub mod_speed: f64,
    pub mod_depth: f64,
    /// Parallax coupling to page scroll.
    pub scroll_factor: f64,
    pub noise: Option<WaveNoise>,
}

/// Ordered set of waves; later waves are drawn on top.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveField {
    waves: Vec<Wave>,
}

impl WaveField {
    pub fn new(waves: Vec<Wave>) -> Self {
        Self { waves }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/model.rs"]
mod tests;
