// File: crates/numberline-core/tests/scale.rs
// Purpose: Domain validation, base/effective scales and engine state transitions.

use numberline_core::{AxisError, Domain, LinearScale, Margins, ScaleEngine, ZoomTransform};

fn engine(min: f64, max: f64, surface: f64) -> ScaleEngine {
    let mut e = ScaleEngine::new(Domain::new(min, max).unwrap(), (0.001, 1000.0));
    e.update_dimensions(surface, Margins::default(), 800.0);
    e
}

#[test]
fn domain_rejects_bad_bounds() {
    assert!(matches!(Domain::new(1.0, 1.0), Err(AxisError::EmptyDomain { .. })));
    assert!(matches!(Domain::new(2.0, 1.0), Err(AxisError::EmptyDomain { .. })));
    assert!(matches!(Domain::new(f64::NAN, 1.0), Err(AxisError::NonFiniteDomain { .. })));
    assert!(matches!(Domain::try_from([0.0, f64::INFINITY]), Err(AxisError::NonFiniteDomain { .. })));
    let d = Domain::new(2.0, 6.0).unwrap();
    assert_eq!(d.midpoint(), 4.0);
    assert_eq!(d.width(), 4.0);
}

#[test]
fn map_invert_round_trip_under_zoom() {
    let e = engine(-3.0, 7.0, 800.0);
    for t in [ZoomTransform::IDENTITY, ZoomTransform::new(3.5, -420.0), ZoomTransform::new(0.25, 90.0)] {
        let s = e.rescale(t);
        for v in [-3.0, -0.125, 0.0, 2.5, 6.999] {
            let back = s.invert(s.map(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back} under {t:?}");
        }
    }
}

#[test]
fn base_range_tracks_chart_width() {
    let e = engine(0.0, 2.0, 800.0);
    assert_eq!(e.chart_width(), 760.0);
    assert_eq!(e.base_scale().range(), (0.0, 760.0));
    assert_eq!(e.base_scale().map(1.0), 380.0);
}

#[test]
fn narrow_and_missing_surfaces_fall_back() {
    let e = engine(0.0, 2.0, 30.0);
    assert_eq!(e.chart_width(), 15.0);
    let e = engine(0.0, 2.0, 0.0);
    assert_eq!(e.chart_width(), 760.0);
}

#[test]
fn set_domain_resets_transform() {
    let mut e = engine(0.0, 2.0, 800.0);
    e.set_transform(ZoomTransform::new(4.0, -100.0));
    e.set_domain(2.0, 6.0).unwrap();
    assert_eq!(e.transform(), ZoomTransform::IDENTITY);
    assert_eq!(e.effective().domain(), (2.0, 6.0));
}

#[test]
fn set_domain_failures_leave_state() {
    let mut e = engine(0.0, 2.0, 800.0);
    e.set_transform(ZoomTransform::new(2.0, 0.0));
    assert!(e.set_domain(5.0, 5.0).is_err());
    assert_eq!(e.domain().bounds(), (0.0, 2.0));
    assert_eq!(e.transform().k, 2.0);

    let mut unmeasured = ScaleEngine::new(Domain::DEFAULT, (0.5, 2.0));
    assert!(matches!(unmeasured.set_domain(1.0, 3.0), Err(AxisError::NoDrawableWidth(_))));
    assert_eq!(unmeasured.domain(), Domain::DEFAULT);
}

#[test]
fn zoom_factor_is_clamped() {
    let mut e = engine(0.0, 2.0, 800.0);
    assert_eq!(e.set_transform(ZoomTransform::new(1e6, 0.0)).k, 1000.0);
    assert_eq!(e.set_transform(ZoomTransform::new(1e-9, 0.0)).k, 0.001);
}

#[test]
fn effective_domain_follows_pan() {
    let base = LinearScale::new(Domain::new(0.0, 2.0).unwrap(), (0.0, 760.0));
    let panned = base.rescale(ZoomTransform::new(1.0, -380.0));
    let (d0, d1) = panned.domain();
    assert!((d0 - 1.0).abs() < 1e-12 && (d1 - 3.0).abs() < 1e-12);
}
