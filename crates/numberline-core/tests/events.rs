// File: crates/numberline-core/tests/events.rs
// Purpose: Event bus delivery order, unsubscription and question wire format.

use std::cell::RefCell;
use std::rc::Rc;

use numberline_core::{AxisEvent, EventBus, FeedbackKind, InitialViewParams, Question, QuestionKind};

#[test]
fn publish_reaches_subscribers_in_order() {
    let mut bus = EventBus::new();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let (a, b) = (Rc::clone(&log), Rc::clone(&log));
    let first = bus.subscribe(move |_| a.borrow_mut().push("first"));
    bus.subscribe(move |e| b.borrow_mut().push(e.name()));

    assert_eq!(bus.publish(&AxisEvent::MarkerFinalized { value: 1.0 }), 2);
    assert_eq!(*log.borrow(), vec!["first", "MARKER_VALUE_FINALIZED"]);

    assert!(bus.unsubscribe(first));
    assert!(!bus.unsubscribe(first));
    bus.publish(&AxisEvent::feedback(FeedbackKind::Info, "hint"));
    assert_eq!(log.borrow().last(), Some(&"SHOW_FEEDBACK"));
    assert_eq!(bus.len(), 1);
}

#[test]
fn question_without_view_params() {
    let q: Question = serde_json::from_str(r#"{ "type": "fraction", "value": 0.75, "display": "3/4" }"#).unwrap();
    assert_eq!(q.kind, QuestionKind::Fraction);
    assert_eq!(q.initial_view_params, InitialViewParams::default());

    match AxisEvent::new_question(q) {
        AxisEvent::NewQuestion { question, initial_view_params } => {
            assert_eq!(question.map(|q| q.display), Some("3/4".to_string()));
            assert_eq!(initial_view_params.and_then(|p| p.domain), None);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn question_serializes_camel_case() {
    let q = Question {
        kind: QuestionKind::Decimal,
        value: 1.23,
        display: "1.23".into(),
        initial_view_params: InitialViewParams { domain: Some([0.9, 2.1]), question_contextual_magnitude: Some(0.01) },
    };
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["type"], "decimal");
    assert_eq!(json["initialViewParams"]["questionContextualMagnitude"], 0.01);
}
