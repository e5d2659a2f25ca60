// File: crates/numberline-core/src/lib.rs
// Summary: Core library entry point; exports the number line geometry API (scales, ticks, labels, marker, feedback, view).

pub mod config;
pub mod error;
pub mod events;
pub mod feedback;
pub mod format;
pub mod geometry;
pub mod labels;
pub mod marker;
pub mod reconcile;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod view;

pub use config::{HighlightConfig, MarkerConfig, NumberlineConfig};
pub use error::AxisError;
pub use events::{AxisEvent, EventBus, FeedbackKind, InitialViewParams, Question, SubscriptionId};
pub use feedback::{layout_feedback, CorrectMark, FeedbackState, HighlightLayout, UserLabel};
pub use format::{decimal_contextual_magnitude, format_number};
pub use labels::{should_label, QuestionContext, QuestionKind};
pub use marker::{MarkerController, MarkerGlyph, MarkerNotice, MarkerPhase};
pub use reconcile::{PlacedTick, TickLabel, TickOp, TickReconciler};
pub use scale::{Domain, LinearScale, ScaleEngine, ZoomTransform};
pub use ticks::{compute_tick_levels, compute_ticks, Tick, TickKind, TickLevels, TickParams};
pub use types::Margins;
pub use view::{AxisFrame, AxisViewState, NumberlineView, ZoomGesture, ZoomSource};
