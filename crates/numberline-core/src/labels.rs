// File: crates/numberline-core/src/labels.rs
// Summary: Question context and the rule deciding which major ticks get a numeric label.

use serde::{Deserialize, Serialize};

use crate::scale::Domain;
use crate::ticks::{is_multiple_of, Tick};

/// Magnitudes at or below this mean "no precision known".
const MIN_CONTEXTUAL_MAGNITUDE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Decimal,
    Fraction,
}

/// What the axis needs to know about the active question. A context built from
/// view parameters alone has no value, kind or text but still filters labels.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionContext {
    pub value: Option<f64>,
    pub kind: Option<QuestionKind>,
    pub display_text: Option<String>,
    pub domain: Domain,
    /// Smallest decimal place-step of the target value (`0.01` for `1.23`).
    pub contextual_magnitude: Option<f64>,
}

impl QuestionContext {
    /// Magnitude that actually filters labels, if any.
    pub fn filtering_magnitude(&self) -> Option<f64> {
        if self.kind == Some(QuestionKind::Fraction) { return None; }
        self.contextual_magnitude
            .filter(|m| m.is_finite() && *m > MIN_CONTEXTUAL_MAGNITUDE)
    }
}

/// Whether a tick gets a label under the active question.
///
/// Minor ticks never do. Without a filtering magnitude every major tick is
/// labelled. Otherwise only majors on multiples of ten times the question's own
/// precision are, plus the origin, so a question about `1.23` never shows `1.2`.
pub fn should_label(tick: &Tick, context: Option<&QuestionContext>, epsilon: f64) -> bool {
    if !tick.is_major { return false; }
    let Some(magnitude) = context.and_then(QuestionContext::filtering_magnitude) else {
        return true;
    };
    let allowed = magnitude * 10.0;
    if tick.value.abs() < epsilon * allowed { return true; }
    is_multiple_of(tick.value, allowed, epsilon)
}
