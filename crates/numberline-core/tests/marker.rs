// File: crates/numberline-core/tests/marker.rs
// Purpose: Marker phases, reset fallbacks, hit area and published drag/finalize events.

use std::cell::RefCell;
use std::rc::Rc;

use numberline_core::{
    AxisEvent, Domain, LinearScale, MarkerConfig, MarkerController, MarkerNotice, MarkerPhase, NumberlineConfig,
    NumberlineView,
};
use numberline_core::marker::reset_value;

fn scale(min: f64, max: f64) -> LinearScale {
    LinearScale::new(Domain::new(min, max).unwrap(), (0.0, 760.0))
}

#[test]
fn first_render_centres_marker() {
    let mut m = MarkerController::new();
    assert_eq!(m.phase(), MarkerPhase::Uninitialized);
    m.ensure_initialized(&scale(2.0, 6.0), 0.5);
    assert_eq!(m.value(), Some(4.0));
    assert_eq!(m.screen_x(), Some(380.0));
    assert_eq!(m.phase(), MarkerPhase::Idle);
}

#[test]
fn reset_fallback_chain() {
    assert_eq!(reset_value(Some(1.25), (0.0, 2.0), (0.0, 2.0), 0.5), 1.25);
    assert_eq!(reset_value(Some(f64::NAN), (2.0, 6.0), (0.0, 2.0), 0.5), 4.0);
    assert_eq!(reset_value(None, (f64::NAN, 1.0), (0.0, 2.0), 0.5), 1.0);
    assert_eq!(reset_value(None, (1.0, 1.0), (3.0, 3.0), 0.5), 0.5);
}

#[test]
fn drag_only_reports_while_dragging() {
    let s = scale(0.0, 2.0);
    let mut m = MarkerController::new();
    assert!(!m.begin_drag());
    m.ensure_initialized(&s, 0.5);
    assert_eq!(m.drag_to(190.0, &s), None);
    assert_eq!(m.end_drag(), None);

    assert!(m.begin_drag());
    assert_eq!(m.drag_to(190.0, &s), Some(MarkerNotice::Dragged(0.5)));
    assert_eq!(m.end_drag(), Some(MarkerNotice::Finalized(0.5)));
    assert_eq!(m.phase(), MarkerPhase::Idle);
}

#[test]
fn non_finite_position_keeps_last_pixel() {
    let mut m = MarkerController::new();
    m.ensure_initialized(&scale(0.0, 2.0), 0.5);
    let collapsed = scale(0.0, 2.0).rescale(numberline_core::ZoomTransform::new(f64::INFINITY, 0.0));
    assert_eq!(m.update_screen_position(&collapsed), Some(380.0));
}

#[test]
fn set_domain_recentres_marker() {
    let mut view = NumberlineView::new(NumberlineConfig::default(), 800.0);
    assert_eq!(view.current_marker_value(), Some(1.0));
    assert!(view.set_domain(2.0, 6.0));
    assert_eq!(view.current_marker_value(), Some(4.0));
    assert!(!view.set_domain(6.0, 2.0));
    assert_eq!(view.current_marker_value(), Some(4.0));
}

#[test]
fn pointer_drag_publishes_events() {
    let mut view = NumberlineView::new(NumberlineConfig::default(), 800.0);
    let seen: Rc<RefCell<Vec<AxisEvent>>> = Rc::default();
    let sink = Rc::clone(&seen);
    view.subscribe(move |e| sink.borrow_mut().push(e.clone()));

    // Marker sits at value 1 -> chart x 380 -> surface x 400, axis at surface y 50.
    assert!(!view.pointer_down(100.0, 50.0));
    assert!(view.pointer_down(402.0, 55.0));
    assert_eq!(view.pointer_move(20.0 + 190.0), Some(0.5));
    assert_eq!(view.pointer_move(20.0 + 570.0), Some(1.5));
    assert_eq!(view.pointer_up(), Some(1.5));
    assert_eq!(view.pointer_up(), None);

    let events = seen.borrow();
    assert_eq!(
        *events,
        vec![
            AxisEvent::MarkerDragged { current_value: 0.5 },
            AxisEvent::MarkerDragged { current_value: 1.5 },
            AxisEvent::MarkerFinalized { value: 1.5 },
        ]
    );
}

#[test]
fn click_places_marker_unless_on_it() {
    let mut view = NumberlineView::new(NumberlineConfig::default(), 800.0);
    let seen: Rc<RefCell<Vec<AxisEvent>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let id = view.subscribe(move |e| sink.borrow_mut().push(e.clone()));

    assert_eq!(view.click(400.0, 50.0), None);
    assert_eq!(view.click(20.0 + 190.0, 50.0), Some(0.5));
    assert_eq!(view.current_marker_value(), Some(0.5));
    assert_eq!(*seen.borrow(), vec![AxisEvent::MarkerFinalized { value: 0.5 }]);

    assert!(view.unsubscribe(id));
    view.click(20.0 + 570.0, 50.0);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn glyph_grab_area() {
    let mut m = MarkerController::new();
    assert!(m.glyph(20.0, &MarkerConfig::default()).is_none());
    m.ensure_initialized(&scale(0.0, 2.0), 0.5);
    let glyph = m.glyph(20.0, &MarkerConfig::default()).expect("glyph");
    assert_eq!(glyph.half_length, 30.0);
    assert!(glyph.hit_test(384.0, -25.0));
    assert!(!glyph.hit_test(400.0, 0.0));
    assert!(!glyph.hit_test(380.0, 40.0));
}
