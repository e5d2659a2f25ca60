// File: crates/numberline-core/src/view.rs
// Summary: Axis render orchestrator: owns the view state, serializes every mutation and rebuilds the frame.

use crate::config::NumberlineConfig;
use crate::events::{AxisEvent, EventBus, FeedbackKind, InitialViewParams, Question, SubscriptionId};
use crate::feedback::{layout_feedback, FeedbackState, HighlightLayout};
use crate::format::format_number;
use crate::geometry::Drawable;
use crate::labels::{should_label, QuestionContext};
use crate::marker::{MarkerController, MarkerGlyph, MarkerNotice};
use crate::reconcile::{PlacedTick, TickLabel, TickOp, TickReconciler};
use crate::scale::{Domain, LinearScale, ScaleEngine, ZoomTransform};
use crate::ticks::{compute_tick_levels, Tick, TickKind, TickParams};
use crate::types::Margins;

/// Where a zoom/pan transform came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomSource {
    Wheel,
    Pan,
    Pinch,
    /// Reserved for another gesture; never zooms the axis.
    DoubleClick,
    Programmatic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomGesture {
    pub transform: ZoomTransform,
    pub source: ZoomSource,
}

/// Everything a drawing layer needs for one pass.
///
/// Tick, marker and feedback coordinates are chart-area pixels: x from the left
/// margin, y from the axis line (which sits `margins.top` below the surface top).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisFrame {
    pub surface_width: f64,
    pub surface_height: f64,
    pub margins: Margins,
    pub chart_width: f64,
    /// Visible domain after zoom/pan.
    pub visible_domain: (f64, f64),
    pub major_step: Option<f64>,
    pub minor_step: Option<f64>,
    pub ticks: Vec<PlacedTick>,
    /// Changes since the previous frame.
    pub ops: Vec<TickOp>,
    pub marker: Option<MarkerGlyph>,
    pub feedback: Option<HighlightLayout>,
}

impl AxisFrame {
    pub fn labels(&self) -> impl Iterator<Item = (&PlacedTick, &TickLabel)> {
        self.ticks.iter().filter_map(|t| t.label.as_ref().map(|l| (t, l)))
    }
}

/// Mutable state of one number line: scale engine (domain, width, transform),
/// marker, feedback and the active question.
#[derive(Clone, Debug)]
pub struct AxisViewState {
    pub engine: ScaleEngine,
    pub marker: MarkerController,
    pub feedback: FeedbackState,
    pub question: Option<QuestionContext>,
}

impl AxisViewState {
    pub fn new(engine: ScaleEngine) -> Self {
        Self { engine, marker: MarkerController::new(), feedback: FeedbackState::default(), question: None }
    }

    pub fn domain(&self) -> Domain { self.engine.domain() }
    pub fn transform(&self) -> ZoomTransform { self.engine.transform() }

    /// Position, size and label one tick under `scale`. `None` when the tick has
    /// no finite pixel position.
    pub fn place_tick(&self, tick: &Tick, scale: &LinearScale, cfg: &NumberlineConfig) -> Option<PlacedTick> {
        let x = scale.map(tick.value);
        if !x.is_finite() { return None; }
        let length = match tick.kind() {
            TickKind::Major => cfg.major_tick_length,
            TickKind::MidMinor => cfg.mid_minor_tick_length,
            TickKind::Minor => cfg.minor_tick_length,
        };
        let label = should_label(tick, self.question.as_ref(), cfg.epsilon).then(|| TickLabel {
            text: format_number(tick.value),
            y: cfg.major_tick_length + cfg.label_font_size_px * 0.8,
            font_size: cfg.label_font_size_px,
        });
        Some(PlacedTick { tick: *tick, x, length, label })
    }
}

/// Stateful wrapper around [`AxisViewState`]. Every public entry point validates
/// the drawable width first, mutates, then rebuilds [`AxisFrame`].
pub struct NumberlineView {
    config: NumberlineConfig,
    params: TickParams,
    state: AxisViewState,
    drawable: Drawable,
    bus: EventBus,
    reconciler: TickReconciler,
    frame: AxisFrame,
}

impl NumberlineView {
    pub fn new(config: NumberlineConfig, surface_width: f64) -> Self {
        let config = config.sanitized();
        let domain = Domain::try_from(config.initial_domain).unwrap_or(Domain::DEFAULT);
        let mut engine = ScaleEngine::new(domain, config.zoom_extent());
        let drawable = engine.update_dimensions(surface_width, config.margins, config.fallback_surface_width);
        let mut view = Self {
            params: TickParams::from(&config),
            config,
            state: AxisViewState::new(engine),
            drawable,
            bus: EventBus::new(),
            reconciler: TickReconciler::new(),
            frame: AxisFrame::default(),
        };
        view.update_axis(ZoomTransform::IDENTITY);
        tracing::debug!(chart_width = view.drawable.chart_width, ?domain, "numberline view initialized");
        view
    }

    pub fn config(&self) -> &NumberlineConfig { &self.config }
    pub fn state(&self) -> &AxisViewState { &self.state }
    pub fn frame(&self) -> &AxisFrame { &self.frame }
    pub fn drawable(&self) -> Drawable { self.drawable }

    /// Current visible map (base domain with the stored transform applied).
    pub fn effective_scale(&self) -> LinearScale { self.state.engine.effective() }

    /// Accessor for the answer-checking collaborator.
    pub fn current_marker_value(&self) -> Option<f64> { self.state.marker.value() }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&AxisEvent) + 'static,
    {
        self.bus.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool { self.bus.unsubscribe(id) }

    /// Inbound collaborator events. Marker events are outbound only and ignored here.
    pub fn dispatch(&mut self, event: AxisEvent) {
        match event {
            AxisEvent::NewQuestion { question, initial_view_params } => {
                self.load_question(question, initial_view_params);
            }
            AxisEvent::ShowFeedback { kind, correct_answer, user_answer, .. } => {
                match (kind, correct_answer) {
                    (FeedbackKind::Error, Some(correct)) => self.state.feedback.show(correct, user_answer),
                    _ => self.state.feedback.clear(),
                }
                self.redraw();
            }
            AxisEvent::MarkerDragged { .. } | AxisEvent::MarkerFinalized { .. } => {
                tracing::trace!(event = event.name(), "outbound event passed to dispatch, ignored");
            }
        }
    }

    /// Single re-render entry point.
    pub fn update_axis(&mut self, transform: ZoomTransform) -> &AxisFrame {
        if self.ensure_drawable().is_none() {
            tracing::warn!("update_axis aborted: nothing drawable");
            return &self.frame;
        }
        self.state.engine.set_transform(transform);
        self.rebuild_frame();
        &self.frame
    }

    /// Zoom/pan gesture callback. Double-click gestures are rejected.
    pub fn on_zoom(&mut self, gesture: ZoomGesture) -> bool {
        if gesture.source == ZoomSource::DoubleClick {
            tracing::trace!("double-click zoom ignored");
            return false;
        }
        if self.ensure_drawable().is_none() {
            tracing::warn!("zoom ignored: nothing drawable");
            return false;
        }
        self.update_axis(gesture.transform);
        true
    }

    /// Wheel zoom by `factor` around a surface x coordinate.
    pub fn zoom_at(&mut self, surface_x: f64, factor: f64) -> bool {
        let anchor = surface_x - self.drawable.margins.left;
        let transform = self.state.transform().scaled_at(anchor, factor, self.state.engine.zoom_extent());
        self.on_zoom(ZoomGesture { transform, source: ZoomSource::Wheel })
    }

    /// Drag-pan by `dx` surface pixels.
    pub fn pan_by(&mut self, dx: f64) -> bool {
        let transform = self.state.transform().translated(dx);
        self.on_zoom(ZoomGesture { transform, source: ZoomSource::Pan })
    }

    /// Install a new domain, reset zoom/pan and re-centre the marker.
    /// Invalid bounds or an undrawable surface leave everything unchanged.
    pub fn set_domain(&mut self, min: f64, max: f64) -> bool {
        if !self.apply_domain(min, max) { return false; }
        self.recentre_marker(None);
        self.redraw();
        true
    }

    /// Put the marker at `explicit`, or the visible midpoint. Returns the new value.
    pub fn reset_marker(&mut self, explicit: Option<f64>) -> Option<f64> {
        let value = self.recentre_marker(explicit)?;
        self.redraw();
        Some(value)
    }

    /// Host surface changed width (already debounced by the caller).
    pub fn resize(&mut self, surface_width: f64) {
        self.drawable = self.state.engine.update_dimensions(
            surface_width,
            self.config.margins,
            self.config.fallback_surface_width,
        );
        tracing::debug!(surface_width = self.drawable.surface_width, chart_width = self.drawable.chart_width, "resized");
        self.redraw();
    }

    /// Pointer pressed at surface coordinates. `true` means the marker took the
    /// gesture and the caller must not start a pan.
    pub fn pointer_down(&mut self, surface_x: f64, surface_y: f64) -> bool {
        if !self.hits_marker(surface_x, surface_y) { return false; }
        let claimed = self.state.marker.begin_drag();
        if claimed { self.redraw(); }
        claimed
    }

    /// Pointer moved while possibly dragging; returns the live marker value.
    pub fn pointer_move(&mut self, surface_x: f64) -> Option<f64> {
        if !self.state.marker.is_dragging() { return None; }
        self.ensure_drawable()?;
        let scale = self.state.engine.effective();
        let notice = self.state.marker.drag_to(surface_x - self.drawable.margins.left, &scale)?;
        self.publish(notice);
        self.redraw();
        self.state.marker.value()
    }

    /// Pointer released; finalizes a drag in progress.
    pub fn pointer_up(&mut self) -> Option<f64> {
        let notice = self.state.marker.end_drag()?;
        self.publish(notice);
        self.redraw();
        self.state.marker.value()
    }

    /// Click-to-place. Clicks on the marker itself are ignored.
    pub fn click(&mut self, surface_x: f64, surface_y: f64) -> Option<f64> {
        if self.hits_marker(surface_x, surface_y) { return None; }
        self.ensure_drawable()?;
        let scale = self.state.engine.effective();
        let notice = self.state.marker.place_at_pixel(surface_x - self.drawable.margins.left, &scale)?;
        tracing::debug!(?notice, "marker placed by click");
        self.publish(notice);
        self.redraw();
        self.state.marker.value()
    }

    fn load_question(&mut self, question: Option<Question>, params: Option<InitialViewParams>) {
        self.state.feedback.clear();
        let params = params.or_else(|| question.as_ref().map(|q| q.initial_view_params.clone()));
        let magnitude = params.as_ref().and_then(|p| p.question_contextual_magnitude);
        if let Some([min, max]) = params.and_then(|p| p.domain) {
            self.apply_domain(min, max);
        }
        // View params alone still carry the label precision.
        self.state.question = (question.is_some() || magnitude.is_some()).then(|| QuestionContext {
            value: question.as_ref().map(|q| q.value),
            kind: question.as_ref().map(|q| q.kind),
            display_text: question.map(|q| q.display),
            domain: self.state.engine.domain(),
            contextual_magnitude: magnitude,
        });
        if let Some(q) = &self.state.question {
            tracing::debug!(display = ?q.display_text, magnitude = ?q.contextual_magnitude, "question loaded");
        }
        self.recentre_marker(None);
        self.redraw();
    }

    /// Marker reset without a redraw, so callers reconcile ticks once.
    fn recentre_marker(&mut self, explicit: Option<f64>) -> Option<f64> {
        self.ensure_drawable()?;
        let current = self.state.engine.effective();
        let base = self.state.engine.base_scale();
        let value = self.state.marker.reset(explicit, &current, &base, self.config.marker_fallback_value);
        tracing::debug!(value, "marker reset");
        Some(value)
    }

    fn apply_domain(&mut self, min: f64, max: f64) -> bool {
        if self.ensure_drawable().is_none() {
            tracing::warn!(min, max, "set_domain aborted: nothing drawable");
            return false;
        }
        match self.state.engine.set_domain(min, max) {
            Ok(()) => {
                tracing::debug!(min, max, "domain set");
                true
            }
            Err(err) => {
                tracing::warn!(%err, "domain rejected");
                false
            }
        }
    }

    fn hits_marker(&self, surface_x: f64, surface_y: f64) -> bool {
        let Some(glyph) = self.frame.marker else { return false };
        let m = self.drawable.margins;
        glyph.hit_test(surface_x - m.left, surface_y - m.top)
    }

    fn publish(&mut self, notice: MarkerNotice) {
        let event = match notice {
            MarkerNotice::Dragged(current_value) => AxisEvent::MarkerDragged { current_value },
            MarkerNotice::Finalized(value) => AxisEvent::MarkerFinalized { value },
        };
        self.bus.publish(&event);
    }

    /// The one width check every entry point goes through.
    fn ensure_drawable(&mut self) -> Option<f64> {
        if !self.state.engine.is_drawable() {
            self.drawable = self.state.engine.update_dimensions(
                self.drawable.surface_width,
                self.config.margins,
                self.config.fallback_surface_width,
            );
        }
        let width = self.state.engine.chart_width();
        (width > 0.0).then_some(width)
    }

    fn redraw(&mut self) {
        let transform = self.state.transform();
        self.update_axis(transform);
    }

    fn rebuild_frame(&mut self) {
        let scale = self.state.engine.effective();
        let chart_width = self.state.engine.chart_width();
        self.state.marker.ensure_initialized(&scale, self.config.marker_fallback_value);

        let levels = compute_tick_levels(&scale, chart_width, &self.params);
        let ticks: Vec<PlacedTick> = levels
            .as_ref()
            .map(|l| l.ticks.iter().filter_map(|t| self.state.place_tick(t, &scale, &self.config)).collect())
            .unwrap_or_default();
        let ops = self.reconciler.reconcile(&ticks);

        self.state.marker.update_screen_position(&scale);
        let marker = self.state.marker.glyph(self.config.major_tick_length, &self.config.marker_config);
        let feedback = layout_feedback(&self.state.feedback, &scale, &self.config);

        if self.config.debug {
            tracing::debug!(
                domain = ?scale.domain(),
                major_step = ?levels.as_ref().map(|l| l.major_step),
                ticks = ticks.len(),
                ops = ops.len(),
                "axis updated"
            );
        }

        self.frame = AxisFrame {
            surface_width: self.drawable.surface_width,
            surface_height: self.config.svg_height,
            margins: self.drawable.margins,
            chart_width,
            visible_domain: scale.domain(),
            major_step: levels.as_ref().map(|l| l.major_step),
            minor_step: levels.as_ref().and_then(|l| l.minor_step),
            ticks,
            ops,
            marker,
            feedback,
        };
    }
}

impl std::fmt::Debug for NumberlineView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberlineView")
            .field("state", &self.state)
            .field("drawable", &self.drawable)
            .field("bus", &self.bus)
            .finish()
    }
}
