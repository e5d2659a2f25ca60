// File: crates/numberline-core/src/events.rs
// Summary: Typed event union exchanged with the question/scoring collaborators and a synchronous callback bus.

use serde::{Deserialize, Serialize};

use crate::labels::QuestionKind;

/// View parameters a question asks for.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialViewParams {
    /// `[min, max]`; when absent the current domain is kept.
    pub domain: Option<[f64; 2]>,
    pub question_contextual_magnitude: Option<f64>,
}

/// Question record produced by the external question source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub value: f64,
    /// Prompt text, e.g. `"1.23"` or `"3/4"`.
    pub display: String,
    #[serde(default)]
    pub initial_view_params: InitialViewParams,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Info,
    Success,
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AxisEvent {
    /// A new question is ready: reset domain, question context, marker; clear feedback.
    NewQuestion {
        question: Option<Question>,
        initial_view_params: Option<InitialViewParams>,
    },
    /// Result of a submission. `Error` shows the highlight, anything else clears it.
    ShowFeedback {
        message: String,
        kind: FeedbackKind,
        correct_answer: Option<f64>,
        user_answer: Option<f64>,
    },
    /// Live marker position during a drag.
    MarkerDragged { current_value: f64 },
    /// Marker settled after a drag or a click.
    MarkerFinalized { value: f64 },
}

impl AxisEvent {
    pub fn new_question(question: Question) -> Self {
        let initial_view_params = Some(question.initial_view_params.clone());
        Self::NewQuestion { question: Some(question), initial_view_params }
    }

    pub fn feedback(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self::ShowFeedback { message: message.into(), kind, correct_answer: None, user_answer: None }
    }

    /// Stable wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewQuestion { .. } => "NEW_QUESTION_READY",
            Self::ShowFeedback { .. } => "SHOW_FEEDBACK",
            Self::MarkerDragged { .. } => "MARKER_DRAGGED",
            Self::MarkerFinalized { .. } => "MARKER_VALUE_FINALIZED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&AxisEvent)>;

/// Synchronous publish/subscribe: `publish` calls every current subscriber, in
/// subscription order, before returning.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl EventBus {
    pub fn new() -> Self { Self::default() }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&AxisEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to all subscribers; returns how many received it.
    pub fn publish(&mut self, event: &AxisEvent) -> usize {
        tracing::trace!(event = event.name(), subscribers = self.handlers.len(), "publish");
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
        self.handlers.len()
    }

    pub fn len(&self) -> usize { self.handlers.len() }
    pub fn is_empty(&self) -> bool { self.handlers.is_empty() }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("subscribers", &self.handlers.len()).finish()
    }
}
