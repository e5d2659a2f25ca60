// File: crates/demo/src/main.rs
// Summary: Scripted session: loads an optional JSON config, asks a few questions, moves the marker
// with simulated gestures and renders every step to PNG.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use numberline_core::{
    decimal_contextual_magnitude, AxisEvent, FeedbackKind, InitialViewParams, NumberlineConfig, NumberlineView,
    Question, QuestionKind,
};
use numberline_render_skia::{render_to_png, theme, RenderOptions};
use tracing_subscriber::EnvFilter;

const SURFACE_WIDTH: f64 = 800.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // demo [config.json] [out_dir]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => load_config(Path::new(&path))?,
        _ => NumberlineConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/numberline_demo".to_string()));
    let opts = RenderOptions {
        theme: theme::find(std::env::var("NUMBERLINE_THEME").as_deref().unwrap_or("light")),
        ..RenderOptions::default()
    };

    let mut view = NumberlineView::new(config, SURFACE_WIDTH);
    let finalized: Rc<RefCell<Option<f64>>> = Rc::default();
    let sink = Rc::clone(&finalized);
    view.subscribe(move |event| match event {
        AxisEvent::MarkerDragged { current_value } => tracing::debug!(current_value, "marker dragged"),
        AxisEvent::MarkerFinalized { value } => {
            tracing::info!(value, "marker finalized");
            *sink.borrow_mut() = Some(*value);
        }
        _ => {}
    });

    let script = [
        decimal_question(1.23),
        decimal_question(0.7),
        fraction_question(3, 4),
        decimal_question(-2.375),
    ];

    for (i, question) in script.into_iter().enumerate() {
        let target = question.value;
        let kind = question.kind;
        tracing::info!(display = %question.display, ?kind, "new question");
        *finalized.borrow_mut() = None;
        view.dispatch(AxisEvent::new_question(question));
        write_frame(&view, &opts, &out_dir, i, "start")?;

        // Click roughly where the answer is, then zoom in around the marker and drag onto it.
        let margins = view.drawable().margins;
        let surface_x = |view: &NumberlineView, value: f64| view.effective_scale().map(value) + margins.left;
        let axis_y = margins.top;

        view.click(surface_x(&view, target + 0.04), axis_y + 25.0);
        view.zoom_at(surface_x(&view, target), 4.0);
        write_frame(&view, &opts, &out_dir, i, "zoomed")?;

        let marker_x = view.frame().marker.map(|m| m.x + margins.left).context("marker not placed")?;
        if view.pointer_down(marker_x, axis_y) {
            let end = surface_x(&view, target + 0.003 * i as f64);
            for step in 1..=5 {
                let x = marker_x + (end - marker_x) * step as f64 / 5.0;
                view.pointer_move(x);
            }
            view.pointer_up();
        }

        let answer = (*finalized.borrow()).or(view.current_marker_value()).context("no answer")?;
        let tolerance = match kind {
            QuestionKind::Decimal => decimal_contextual_magnitude(target) / 2.0,
            QuestionKind::Fraction => 0.01,
        };
        let correct = (answer - target).abs() <= tolerance;
        tracing::info!(answer, target, correct, "submitted");
        view.dispatch(AxisEvent::ShowFeedback {
            message: if correct { "Correct!".into() } else { format!("Not quite: {target}") },
            kind: if correct { FeedbackKind::Success } else { FeedbackKind::Error },
            correct_answer: Some(target),
            user_answer: (!correct).then_some(answer),
        });
        write_frame(&view, &opts, &out_dir, i, "feedback")?;
    }

    println!("Wrote frames to {}", out_dir.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<NumberlineConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = NumberlineConfig::from_json_str(&text)
        .with_context(|| format!("failed to parse config '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Domain spans the neighbouring integers with a little slack on both ends.
fn view_params_for(value: f64, magnitude: Option<f64>) -> InitialViewParams {
    // Values within rounding noise of an integer count as that integer.
    let rounded = value.round();
    let representative = if (value - rounded).abs() < 1e-9 { rounded } else { value };
    let (lo, hi) = (representative.floor(), representative.ceil());
    let domain = if lo == hi { [lo - 1.0, hi + 1.0] } else { [lo - 0.1, hi + 0.1] };
    InitialViewParams { domain: Some(domain), question_contextual_magnitude: magnitude }
}

fn decimal_question(value: f64) -> Question {
    Question {
        kind: QuestionKind::Decimal,
        value,
        display: value.to_string(),
        initial_view_params: view_params_for(value, Some(decimal_contextual_magnitude(value))),
    }
}

fn fraction_question(numerator: u32, denominator: u32) -> Question {
    let value = numerator as f64 / denominator as f64;
    Question {
        kind: QuestionKind::Fraction,
        value,
        display: format!("{numerator}/{denominator}"),
        initial_view_params: view_params_for(value, None),
    }
}

fn write_frame(view: &NumberlineView, opts: &RenderOptions, out_dir: &Path, question: usize, stage: &str) -> Result<()> {
    let path = out_dir.join(format!("q{}_{stage}.png", question + 1));
    render_to_png(view.frame(), opts, &path).with_context(|| format!("render {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
