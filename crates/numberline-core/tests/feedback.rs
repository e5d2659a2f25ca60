// File: crates/numberline-core/tests/feedback.rs
// Purpose: Correct-answer highlight geometry and user label collision avoidance.

use numberline_core::{layout_feedback, Domain, FeedbackState, LinearScale, NumberlineConfig};

fn scale() -> LinearScale {
    LinearScale::new(Domain::new(1.0, 2.0).unwrap(), (0.0, 760.0))
}

#[test]
fn inactive_feedback_has_no_layout() {
    let cfg = NumberlineConfig::default();
    assert!(layout_feedback(&FeedbackState::default(), &scale(), &cfg).is_none());
}

#[test]
fn correct_mark_geometry() {
    let cfg = NumberlineConfig::default();
    let mut state = FeedbackState::default();
    state.show(1.5, None);
    let layout = layout_feedback(&state, &scale(), &cfg).expect("layout");
    let correct = layout.correct.expect("correct mark");
    assert_eq!(correct.x, 380.0);
    assert!((correct.half_length - 28.0).abs() < 1e-9);
    assert_eq!(correct.stroke_width, 3.0);
    assert_eq!(correct.label, "1.5");
    assert!((correct.label_y - (28.0 + 24.0)).abs() < 1e-9);
    assert!(layout.user.is_none());
}

#[test]
fn close_user_label_moves_below_correct_label() {
    let cfg = NumberlineConfig::default();
    let mut state = FeedbackState::default();
    state.show(1.23, Some(1.20));
    let layout = layout_feedback(&state, &scale(), &cfg).expect("layout");
    let correct = layout.correct.expect("correct mark");
    let user = layout.user.expect("user label");
    assert_eq!(user.label, "1.2");
    assert!(user.label_y >= correct.label_y + cfg.label_font_size_px);
    assert!((user.label_y - (52.0 + 20.0 + 6.0)).abs() < 1e-9);
}

#[test]
fn distant_user_label_keeps_default_row() {
    let cfg = NumberlineConfig::default();
    let mut state = FeedbackState::default();
    state.show(1.23, Some(1.9));
    let layout = layout_feedback(&state, &scale(), &cfg).expect("layout");
    let user = layout.user.expect("user label");
    assert!((user.label_y - (15.0 + 24.0)).abs() < 1e-9);
}

#[test]
fn non_finite_positions_skip_elements() {
    let cfg = NumberlineConfig::default();
    let mut state = FeedbackState::default();
    state.show(f64::INFINITY, Some(1.5));
    let layout = layout_feedback(&state, &scale(), &cfg).expect("layout");
    assert!(layout.correct.is_none());
    assert!(layout.user.is_some());
}

#[test]
fn clear_resets_state() {
    let mut state = FeedbackState::default();
    state.show(1.0, Some(2.0));
    state.clear();
    assert!(!state.is_active());
    assert_eq!(state.correct_value(), None);
}
