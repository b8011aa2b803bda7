use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::foundation::math::lerp_range;
use crate::wave::model::{DEFAULT_WAVE_COUNT, Palette, Wave, WaveField, WaveNoise, archetype_for};
use rand::{Rng, RngCore};
use std::f64::consts::TAU;

const OPACITY: [f64; 2] = [0.3, 0.6];
const MOD_SPEED: [f64; 2] = [0.1, 0.4];
const MOD_DEPTH: [f64; 2] = [0.2, 0.6];
const SCROLL_FACTOR: [f64; 2] = [0.3, 0.7];
const NOISE_SCALE: [f64; 2] = [0.7, 1.3];
const NOISE_FREQUENCY: [f64; 2] = [0.5, 2.0];
const MAX_HARMONICS: u32 = 3;

/// Parameters for generating a [`WaveField`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveFieldConfig {
    /// Number of waves.
    pub count: usize,
    /// Noisy profile: per-pixel jitter plus a smooth time-varying noise term.
    pub with_noise: bool,
    pub palette: Palette,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_WAVE_COUNT,
            with_noise: true,
            palette: Palette::default(),
        }
    }
}

impl WaveFieldConfig {
    pub fn validate(&self) -> WavelengthResult<()> {
        if self.count == 0 {
            return Err(WavelengthError::validation("wave count must be > 0"));
        }
        self.palette.validate()
    }
}

/// Baseline of wave `index` out of `count`, as a fraction of surface height.
///
/// Evenly spaced with a margin of 1.5 slots above and below.
pub fn y_offset_ratio(index: usize, count: usize) -> f64 {
    (index as f64 + 1.5) / (count as f64 + 3.0)
}

/// Draw a fresh field of `cfg.count` waves.
///
/// Each call is an independent draw from the same distribution.
pub fn generate_wave_field(cfg: &WaveFieldConfig, rng: &mut dyn RngCore) -> WaveField {
    let waves = (0..cfg.count)
        .map(|i| generate_wave(i, cfg, rng))
        .collect::<Vec<_>>();
    tracing::debug!(count = waves.len(), with_noise = cfg.with_noise, "generated wave field");
    WaveField::new(waves)
}

fn generate_wave(index: usize, cfg: &WaveFieldConfig, rng: &mut dyn RngCore) -> Wave {
    let arch = archetype_for(index);
    let mut unit = || rng.r#gen::<f64>();

    let amplitude = lerp_range(arch.amplitude, unit());
    let frequency = lerp_range(arch.frequency, unit());
    let speed = lerp_range(arch.speed, unit());
    let opacity = lerp_range(OPACITY, unit());
    let phase = unit() * TAU;
    let color = cfg.palette.pick(unit());
    let harmonics = 1 + ((unit() * f64::from(MAX_HARMONICS)) as u32).min(MAX_HARMONICS - 1);
    let mod_speed = lerp_range(MOD_SPEED, unit());
    let mod_depth = lerp_range(MOD_DEPTH, unit());
    let scroll_factor = lerp_range(SCROLL_FACTOR, unit());
    let noise = cfg.with_noise.then(|| WaveNoise {
        level: arch.noise_level * lerp_range(NOISE_SCALE, unit()),
        frequency: lerp_range(NOISE_FREQUENCY, unit()),
    });

    Wave {
        amplitude,
        frequency,
        speed,
        y_offset_ratio: y_offset_ratio(index, cfg.count),
        opacity,
        phase,
        color,
        thickness: arch.thickness,
        harmonics,
        mod_speed,
        mod_depth,
        scroll_factor,
        noise,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/generate.rs"]
mod tests;
