use crate::foundation::core::{BezPath, Point};
use crate::wave::model::Wave;
use rand::{Rng, RngCore};

/// Horizontal distance between sampled points, in pixels.
pub const SAMPLE_STEP_PX: usize = 2;

/// Extra vertical travel below the surface before a wave wraps back to the top.
const WRAP_MARGIN: f64 = 100.0;

/// Per-frame inputs shared by every wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub width: u32,
    pub height: u32,
    /// Page scroll position in pixels. Not assumed bounded.
    pub scroll_y: f64,
    /// Seconds since the renderer started.
    pub elapsed_secs: f64,
}

/// Scrolled baseline of `wave`, cycled so it never sits more than `WRAP_MARGIN` below the surface.
pub fn wrapped_baseline(wave: &Wave, height: f64, scroll_y: f64) -> f64 {
    let cycle = height + 2.0 * WRAP_MARGIN;
    let base_y = height * wave.y_offset_ratio;
    let y = base_y + (scroll_y * wave.scroll_factor) % cycle;
    if y > height + WRAP_MARGIN { y - cycle } else { y }
}

/// Breathing envelope applied to every harmonic's amplitude.
pub fn amplitude_modulation(wave: &Wave, elapsed_secs: f64) -> f64 {
    1.0 + (elapsed_secs * wave.mod_speed).sin() * wave.mod_depth
}

/// Sum of the wave's harmonics at column `x`.
pub fn harmonic_sum(wave: &Wave, x: f64, time_offset: f64, amp_mod: f64) -> f64 {
    (1..=wave.harmonics)
        .map(|h| {
            let h = f64::from(h);
            let amp = wave.amplitude * amp_mod / (h * 1.5);
            amp * (wave.frequency * h * x + time_offset + wave.phase * h).sin()
        })
        .sum()
}

/// Jitter at column `x`: a uniform random term plus a smooth time-varying term.
///
/// Zero when the wave carries no noise parameters. No randomness is drawn in that case.
pub fn noise_at(wave: &Wave, x: f64, elapsed_secs: f64, rng: &mut dyn RngCore) -> f64 {
    let Some(noise) = wave.noise else {
        return 0.0;
    };
    let scale = wave.amplitude * noise.level;
    let jitter = (rng.r#gen::<f64>() - 0.5) * scale;
    let smooth = (elapsed_secs * noise.frequency + x * 0.001).sin() * scale * 0.3;
    jitter + smooth
}

/// Sample one wave into points at every `SAMPLE_STEP_PX` from `x = 0` to `x = width` inclusive.
pub fn sample_wave(wave: &Wave, state: &RenderState, rng: &mut dyn RngCore) -> Vec<Point> {
    let time_offset = state.elapsed_secs * wave.speed;
    let amp_mod = amplitude_modulation(wave, state.elapsed_secs);
    let baseline = wrapped_baseline(wave, f64::from(state.height), state.scroll_y);

    (0..=state.width as usize)
        .step_by(SAMPLE_STEP_PX)
        .map(|x| {
            let x = x as f64;
            let y = harmonic_sum(wave, x, time_offset, amp_mod)
                + noise_at(wave, x, state.elapsed_secs, rng);
            Point::new(x, baseline + y)
        })
        .collect()
}

/// Connected poly-line through `points`.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/wave/sample.rs"]
mod tests;
