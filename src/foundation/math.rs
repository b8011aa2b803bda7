pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Undo premultiplication of a single channel by `a`.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Uniform draw in `[lo, hi)` from a unit sample `r` in `[0, 1)`.
pub(crate) fn lerp_range(range: [f64; 2], r: f64) -> f64 {
    range[0] + r * (range[1] - range[0])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
