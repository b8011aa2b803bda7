use crate::foundation::error::WavelengthResult;
use crate::render::backend::{DrawSurface, StrokeStyle};
use crate::wave::model::{Wave, WaveField};
use crate::wave::sample::{RenderState, polyline, sample_wave};
use rand::RngCore;

/// Stroke style for `wave`.
pub fn stroke_style(wave: &Wave) -> StrokeStyle {
    StrokeStyle {
        color: wave.color,
        opacity: wave.opacity,
        width: wave.thickness,
        round_caps: true,
    }
}

/// Clear `surface` and draw every wave of `field` in order, then present.
///
/// Only waves generated with noise parameters draw from `noise`. With a deterministic `noise`
/// source the output only depends on `field` and `state`.
pub fn render_frame(
    surface: &mut dyn DrawSurface,
    field: &WaveField,
    state: &RenderState,
    noise: &mut dyn RngCore,
) -> WavelengthResult<()> {
    surface.clear();
    for wave in field.waves() {
        let points = sample_wave(wave, state, noise);
        surface.stroke(&polyline(&points), &stroke_style(wave));
    }
    surface.present()
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
