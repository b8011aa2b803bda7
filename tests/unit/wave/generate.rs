use super::*;
use crate::wave::model::ARCHETYPES;
use crate::wave::rng::WaveRng;

fn field(seed: u64, cfg: &WaveFieldConfig) -> WaveField {
    let mut rng = WaveRng::from_seed_u64(seed);
    generate_wave_field(cfg, &mut rng)
}

#[test]
fn default_field_has_twelve_waves_on_fifteenths() {
    let f = field(1, &WaveFieldConfig::default());
    assert_eq!(f.len(), 12);
    for (i, w) in f.waves().iter().enumerate() {
        let expected = (i as f64 + 1.5) / 15.0;
        assert!((w.y_offset_ratio - expected).abs() < 1e-12);
    }
}

#[test]
fn y_offsets_strictly_increase_inside_unit_interval() {
    for count in [1usize, 2, 5, 12, 40] {
        let cfg = WaveFieldConfig {
            count,
            ..WaveFieldConfig::default()
        };
        let f = field(3, &cfg);
        let ratios: Vec<f64> = f.waves().iter().map(|w| w.y_offset_ratio).collect();
        assert!(ratios.iter().all(|r| *r > 0.0 && *r < 1.0));
        assert!(ratios.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn parameters_stay_in_declared_ranges() {
    for seed in 0..20 {
        let f = field(seed, &WaveFieldConfig::default());
        for (i, w) in f.waves().iter().enumerate() {
            let a = &ARCHETYPES[i % ARCHETYPES.len()];
            assert!(w.amplitude >= a.amplitude[0] && w.amplitude < a.amplitude[1]);
            assert!(w.frequency >= a.frequency[0] && w.frequency < a.frequency[1]);
            assert!(w.speed >= a.speed[0] && w.speed < a.speed[1]);
            assert_eq!(w.thickness, a.thickness);
            assert!((1..=3).contains(&w.harmonics));
            assert!((0.0..=1.0).contains(&w.opacity));
            assert!((0.0..std::f64::consts::TAU).contains(&w.phase));
            assert!((0.0..=1.0).contains(&w.scroll_factor));
            assert!(w.mod_speed >= 0.1 && w.mod_speed < 0.4);
            assert!(w.mod_depth >= 0.2 && w.mod_depth < 0.6);

            let noise = w.noise.expect("noisy profile carries noise");
            assert!(noise.level >= a.noise_level * 0.7 && noise.level < a.noise_level * 1.3);
            assert!(noise.frequency >= 0.5 && noise.frequency < 2.0);
        }
    }
}

#[test]
fn harmonics_cover_all_values_over_many_draws() {
    let mut seen = [false; 3];
    for seed in 0..50 {
        for w in field(seed, &WaveFieldConfig::default()).waves() {
            seen[(w.harmonics - 1) as usize] = true;
        }
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn quiet_profile_has_no_noise() {
    let cfg = WaveFieldConfig {
        with_noise: false,
        ..WaveFieldConfig::default()
    };
    assert!(field(5, &cfg).waves().iter().all(|w| w.noise.is_none()));
}

#[test]
fn colors_come_from_palette() {
    let cfg = WaveFieldConfig::default();
    for w in field(8, &cfg).waves() {
        assert!(w.color == cfg.palette.primary || w.color == cfg.palette.secondary);
    }
}

#[test]
fn same_seed_same_field_and_repeat_draws_differ() {
    let cfg = WaveFieldConfig::default();
    assert_eq!(field(11, &cfg), field(11, &cfg));

    let mut rng = WaveRng::from_seed_u64(11);
    let a = generate_wave_field(&cfg, &mut rng);
    let b = generate_wave_field(&cfg, &mut rng);
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

#[test]
fn config_validation() {
    assert!(WaveFieldConfig::default().validate().is_ok());
    let empty = WaveFieldConfig {
        count: 0,
        ..WaveFieldConfig::default()
    };
    assert!(empty.validate().is_err());
}
