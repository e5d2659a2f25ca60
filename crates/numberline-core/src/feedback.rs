// File: crates/numberline-core/src/feedback.rs
// Summary: Post-submission feedback state and the layout of the correct-answer mark and user label.

use crate::config::NumberlineConfig;
use crate::format::format_number;
use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeedbackState {
    active: bool,
    correct_value: Option<f64>,
    user_value: Option<f64>,
}

impl FeedbackState {
    pub fn is_active(&self) -> bool { self.active }
    pub fn correct_value(&self) -> Option<f64> { self.correct_value }
    pub fn user_value(&self) -> Option<f64> { self.user_value }

    /// `user` is only present when the answer was wrong.
    pub fn show(&mut self, correct: f64, user: Option<f64>) {
        self.active = true;
        self.correct_value = Some(correct);
        self.user_value = user;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Distinguished tick at the correct value, in chart-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectMark {
    pub x: f64,
    /// The line runs from `-half_length` to `+half_length`.
    pub half_length: f64,
    pub stroke_width: f64,
    pub label: String,
    pub label_y: f64,
}

/// The user's (wrong) value as text.
#[derive(Clone, Debug, PartialEq)]
pub struct UserLabel {
    pub x: f64,
    pub label: String,
    pub label_y: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightLayout {
    pub correct: Option<CorrectMark>,
    pub user: Option<UserLabel>,
    pub font_size: f64,
}

/// Lay out the highlight for the current scale. `None` when feedback is inactive
/// or has no correct value; individual elements whose pixel position is not
/// finite are left out.
pub fn layout_feedback(state: &FeedbackState, scale: &LinearScale, cfg: &NumberlineConfig) -> Option<HighlightLayout> {
    if !state.active { return None; }
    let correct_value = state.correct_value?;

    let font = cfg.label_font_size_px;
    let text_offset = font * cfg.feedback_text_offset_em;
    let half_length = cfg.major_tick_length * cfg.correct_answer_highlight_config.length_to_major_tick_ratio / 2.0;
    let correct_label_y = half_length + text_offset;

    let x_correct = scale.map(correct_value);
    let correct = x_correct.is_finite().then(|| CorrectMark {
        x: x_correct,
        half_length,
        stroke_width: cfg.correct_answer_highlight_config.stroke_width,
        label: format_number(correct_value),
        label_y: correct_label_y,
    });

    let user = state.user_value.and_then(|user_value| {
        let x_user = scale.map(user_value);
        if !x_user.is_finite() { return None; }
        let marker_half = cfg.major_tick_length * cfg.marker_config.line_width_to_major_tick_ratio / 2.0;
        let mut label_y = marker_half + text_offset;
        let proximity = font * cfg.feedback_proximity_em;
        if x_correct.is_finite() && (x_user - x_correct).abs() < proximity {
            let below_correct = correct_label_y + font + font * cfg.feedback_label_padding_em;
            label_y = label_y.max(below_correct);
        }
        Some(UserLabel { x: x_user, label: format_number(user_value), label_y })
    });

    Some(HighlightLayout { correct, user, font_size: font })
}
