use super::*;
use crate::foundation::core::Rgb8;
use crate::wave::model::WaveNoise;
use crate::wave::rng::WaveRng;
use rand::RngCore as _;

fn wave() -> Wave {
    Wave {
        amplitude: 40.0,
        frequency: 0.003,
        speed: 1.0,
        y_offset_ratio: 0.5,
        opacity: 0.5,
        phase: 0.0,
        color: Rgb8::new(68, 100, 173),
        thickness: 2.5,
        harmonics: 1,
        mod_speed: 0.2,
        mod_depth: 0.3,
        scroll_factor: 0.5,
        noise: None,
    }
}

fn state(width: u32, height: u32) -> RenderState {
    RenderState {
        width,
        height,
        scroll_y: 0.0,
        elapsed_secs: 0.0,
    }
}

#[test]
fn baseline_without_scroll_is_ratio_of_height() {
    assert_eq!(wrapped_baseline(&wave(), 600.0, 0.0), 300.0);
}

#[test]
fn baseline_wraps_past_bottom_margin() {
    // 300 + 0.5 * 900 = 750 > 700, wraps by 800.
    let y = wrapped_baseline(&wave(), 600.0, 900.0);
    assert!((y - -50.0).abs() < 1e-9);
}

#[test]
fn wrapped_baseline_never_exceeds_bottom_margin() {
    let mut w = wave();
    for ratio in [0.01, 0.3, 0.5, 0.99] {
        for factor in [0.0, 0.3, 0.7, 1.0] {
            w.y_offset_ratio = ratio;
            w.scroll_factor = factor;
            for height in [1.0, 100.0, 600.0, 2160.0] {
                let mut scroll = -5000.0;
                while scroll < 50_000.0 {
                    assert!(wrapped_baseline(&w, height, scroll) <= height + 100.0);
                    scroll += 37.3;
                }
            }
        }
    }
}

#[test]
fn modulation_is_identity_at_time_zero() {
    assert_eq!(amplitude_modulation(&wave(), 0.0), 1.0);
    let w = wave();
    let t = std::f64::consts::FRAC_PI_2 / w.mod_speed;
    assert!((amplitude_modulation(&w, t) - 1.3).abs() < 1e-9);
}

#[test]
fn harmonics_stack_with_decreasing_strength() {
    let mut w = wave();
    w.harmonics = 2;
    w.frequency = 1.0;
    let x = std::f64::consts::FRAC_PI_2;
    // h=1: 40/1.5 * sin(pi/2); h=2: 40/3 * sin(pi)
    let expected = 40.0 / 1.5;
    assert!((harmonic_sum(&w, x, 0.0, 1.0) - expected).abs() < 1e-9);
}

#[test]
fn samples_every_two_pixels_inclusive_of_width() {
    let mut rng = WaveRng::from_seed_u64(0);
    let pts = sample_wave(&wave(), &state(10, 100), &mut rng);
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let odd = sample_wave(&wave(), &state(9, 100), &mut rng);
    assert_eq!(odd.last().unwrap().x, 8.0);
}

#[test]
fn first_sample_sits_on_baseline_plus_phase_term() {
    let mut rng = WaveRng::from_seed_u64(0);
    let pts = sample_wave(&wave(), &state(800, 600), &mut rng);
    assert_eq!(pts[0].y, 300.0);
}

#[test]
fn noise_only_applies_to_waves_with_noise_parameters() {
    let mut w = wave();
    w.noise = Some(WaveNoise {
        level: 0.08,
        frequency: 1.0,
    });
    let mut rng = WaveRng::from_seed_u64(4);
    assert_eq!(noise_at(&wave(), 10.0, 1.0, &mut rng), 0.0);

    // |jitter| <= 0.5 * scale, |smooth| <= 0.3 * scale
    let scale = w.amplitude * 0.08;
    for i in 0..200 {
        let n = noise_at(&w, f64::from(i), 1.0, &mut rng);
        assert!(n.abs() <= 0.8 * scale + 1e-12);
    }
}

#[test]
fn polyline_connects_points_in_order() {
    let pts = [
        Point::new(0.0, 1.0),
        Point::new(2.0, 3.0),
        Point::new(4.0, 5.0),
    ];
    let path = polyline(&pts);
    assert_eq!(path.elements().len(), 3);
    assert!(polyline(&[]).elements().is_empty());
}

#[test]
fn quiet_wave_draws_nothing_from_the_noise_source() {
    let mut used = WaveRng::from_seed_u64(11);
    let mut fresh = WaveRng::from_seed_u64(11);
    sample_wave(&wave(), &state(64, 100), &mut used);
    assert_eq!(used.next_u64(), fresh.next_u64());
}
