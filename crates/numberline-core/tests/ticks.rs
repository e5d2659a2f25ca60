// File: crates/numberline-core/tests/ticks.rs
// Purpose: Tick level selection, ordering, classification and density caps.

use numberline_core::{compute_tick_levels, compute_ticks, Domain, LinearScale, TickParams};

fn scale(min: f64, max: f64, width: f64) -> LinearScale {
    LinearScale::new(Domain::new(min, max).unwrap(), (0.0, width))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn half_decade_major_step_for_dense_target() {
    let params = TickParams {
        target_major_ticks: 5.0,
        min_pixel_separation: 40.0,
        separation_multiplier: 5.0,
        ..TickParams::default()
    };
    let levels = compute_tick_levels(&scale(0.0, 2.0, 760.0), 760.0, &params).expect("levels");
    assert_eq!(levels.major_step, 0.5);
    assert_eq!(levels.minor_step, Some(0.05));

    let majors: Vec<f64> = levels
        .ticks
        .iter()
        .filter(|t| t.is_major && t.value >= 0.0 && t.value <= 2.0)
        .map(|t| t.value)
        .collect();
    assert_eq!(majors, vec![0.0, 0.5, 1.0, 1.5, 2.0]);

    let quarter = levels.ticks.iter().find(|t| close(t.value, 0.25)).expect("0.25 tick");
    assert!(quarter.is_mid_minor && !quarter.is_major);
    let tenth = levels.ticks.iter().find(|t| close(t.value, 0.1)).expect("0.1 tick");
    assert!(!tenth.is_major && !tenth.is_mid_minor);
}

#[test]
fn default_config_on_unit_pair() {
    let levels = compute_tick_levels(&scale(0.0, 2.0, 760.0), 760.0, &TickParams::default()).expect("levels");
    assert_eq!(levels.major_step, 1.0);
    assert_eq!(levels.minor_step, Some(0.1));
    let mid = levels.ticks.iter().find(|t| t.value == 0.5).expect("0.5 tick");
    assert!(mid.is_mid_minor);
}

#[test]
fn ticks_sorted_unique_and_majors_on_step() {
    let params = TickParams::default();
    let domains = [(0.0, 1.0), (-3.7, 12.2), (1000.0, 1000.5), (-1e-6, 1e-6), (0.0, 1e6), (-250.0, -249.99)];
    for (min, max) in domains {
        for width in [120.0, 760.0, 1900.0] {
            let Some(levels) = compute_tick_levels(&scale(min, max, width), width, &params) else {
                panic!("no levels for [{min}, {max}] at {width}");
            };
            assert!(!levels.ticks.is_empty(), "[{min}, {max}] at {width}");
            for pair in levels.ticks.windows(2) {
                assert!(pair[0].value < pair[1].value, "not strictly increasing: {pair:?}");
            }
            if let Some(minor) = levels.minor_step {
                assert!(close(levels.major_step, minor * 10.0));
            }
            for t in levels.ticks.iter().filter(|t| t.is_major) {
                let ratio = t.value / levels.major_step;
                assert!((ratio - ratio.round()).abs() < 1e-6, "{} not on {}", t.value, levels.major_step);
            }
        }
    }
}

#[test]
fn major_spacing_stays_in_pixel_band_where_possible() {
    let params = TickParams::default();
    for (min, max) in [(0.0, 2.0), (0.0, 7.0), (-40.0, 60.0), (0.1, 0.13)] {
        let levels = compute_tick_levels(&scale(min, max, 760.0), 760.0, &params).expect("levels");
        let px = levels.major_step * 760.0 / (max - min);
        assert!(px >= params.min_pixel_separation / 2.0, "[{min}, {max}] major {px}px");
        assert!(px <= params.max_pixel_separation() * 1.5, "[{min}, {max}] major {px}px");
    }
}

#[test]
fn huge_domain_respects_cap() {
    let params = TickParams::default();
    let ticks = compute_ticks(&scale(1.0, 1e9, 800.0), 800.0, &params);
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= params.max_ticks);

    let tight = TickParams { max_ticks: 5, min_pixel_separation: 1.0, separation_multiplier: 2.0, ..params };
    let ticks = compute_ticks(&scale(0.0, 1000.0, 800.0), 800.0, &tight);
    assert!(ticks.len() <= 5);
}

#[test]
fn degenerate_inputs_yield_nothing() {
    let params = TickParams::default();
    assert!(compute_ticks(&scale(0.0, 2.0, 760.0), 0.0, &params).is_empty());
    assert!(compute_ticks(&scale(0.0, 2.0, 760.0), f64::NAN, &params).is_empty());
    let collapsed = scale(0.0, 2.0, 760.0).rescale(numberline_core::ZoomTransform::new(f64::INFINITY, 0.0));
    assert!(compute_ticks(&collapsed, 760.0, &params).is_empty());
}

#[test]
fn zero_is_positive_zero() {
    let ticks = compute_ticks(&scale(-1.0, 1.0, 760.0), 760.0, &TickParams::default());
    let zero = ticks.iter().find(|t| t.value == 0.0).expect("zero tick");
    assert!(zero.value.is_sign_positive());
    assert!(zero.is_major);
}

#[test]
fn far_from_origin_ticks_stay_distinct() {
    let (lo, hi) = (1e9, 1e9 + 0.01);
    let levels = compute_tick_levels(&scale(lo, hi, 760.0), 760.0, &TickParams::default()).expect("levels");
    assert_eq!(levels.major_step, 0.01);
    assert_eq!(levels.minor_step, Some(0.001));

    let visible: Vec<_> = levels.ticks.iter().filter(|t| t.value >= lo && t.value <= hi + 1e-6).collect();
    assert!(visible.len() > 2, "{} visible ticks", visible.len());
    assert!(levels.ticks.windows(2).all(|w| w[0].value < w[1].value));

    let end = levels.ticks.iter().find(|t| (t.value - hi).abs() < 1e-6).expect("tick at upper end");
    assert!(end.is_major);
    let majors = visible.iter().filter(|t| t.is_major).count();
    assert_eq!(majors, 2);
}
