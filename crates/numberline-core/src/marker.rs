// File: crates/numberline-core/src/marker.rs
// Summary: Draggable answer marker: value in domain space, phase machine, pixel conversion and hit testing.

use crate::config::MarkerConfig;
use crate::geometry::PixelRect;
use crate::scale::LinearScale;

/// Minimum half-width of the marker's grab area, in pixels.
const MIN_GRAB_HALF_WIDTH: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPhase {
    Uninitialized,
    Idle,
    Dragging,
}

/// What a marker operation wants collaborators to hear about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerNotice {
    /// Live position during a drag; not an answer.
    Dragged(f64),
    /// Settled position (drag end or click-to-place).
    Finalized(f64),
}

/// Drawing description of the marker in chart-area pixels (axis line at y = 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGlyph {
    pub x: f64,
    /// The line runs from `-half_length` to `+half_length`.
    pub half_length: f64,
    pub circle_radius: f64,
    pub dragging: bool,
}

impl MarkerGlyph {
    pub fn grab_rect(&self) -> PixelRect {
        PixelRect::around(self.x, 0.0, self.circle_radius.max(MIN_GRAB_HALF_WIDTH), self.half_length.max(self.circle_radius))
    }

    /// Whether a chart-area point falls on the marker's grab area.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        self.grab_rect().contains(x, y)
    }
}

#[derive(Clone, Debug)]
pub struct MarkerController {
    value: Option<f64>,
    phase: MarkerPhase,
    screen_x: Option<f64>,
}

impl Default for MarkerController {
    fn default() -> Self { Self::new() }
}

impl MarkerController {
    pub fn new() -> Self {
        Self { value: None, phase: MarkerPhase::Uninitialized, screen_x: None }
    }

    pub fn value(&self) -> Option<f64> { self.value }
    pub fn phase(&self) -> MarkerPhase { self.phase }
    pub fn screen_x(&self) -> Option<f64> { self.screen_x }
    pub fn is_dragging(&self) -> bool { self.phase == MarkerPhase::Dragging }

    /// First render places the marker at the visible midpoint.
    pub fn ensure_initialized(&mut self, scale: &LinearScale, fallback: f64) {
        if self.phase != MarkerPhase::Uninitialized { return; }
        let (d0, d1) = scale.domain();
        self.value = Some(reset_value(None, (d0, d1), (d0, d1), fallback));
        self.phase = MarkerPhase::Idle;
        self.update_screen_position(scale);
    }

    /// Click-to-place. Returns `None` (and keeps the old value) when the pixel
    /// does not map to a finite value.
    pub fn place_at_pixel(&mut self, px: f64, scale: &LinearScale) -> Option<MarkerNotice> {
        let value = scale.invert(px);
        if !value.is_finite() { return None; }
        self.value = Some(value);
        if self.phase == MarkerPhase::Uninitialized { self.phase = MarkerPhase::Idle; }
        self.update_screen_position(scale);
        Some(MarkerNotice::Finalized(value))
    }

    /// Enter the drag phase. A `true` return means the gesture belongs to the
    /// marker and must not also pan the axis.
    pub fn begin_drag(&mut self) -> bool {
        if self.phase == MarkerPhase::Uninitialized { return false; }
        self.phase = MarkerPhase::Dragging;
        true
    }

    pub fn drag_to(&mut self, px: f64, scale: &LinearScale) -> Option<MarkerNotice> {
        if self.phase != MarkerPhase::Dragging { return None; }
        let value = scale.invert(px);
        if !value.is_finite() { return None; }
        self.value = Some(value);
        self.update_screen_position(scale);
        Some(MarkerNotice::Dragged(value))
    }

    pub fn end_drag(&mut self) -> Option<MarkerNotice> {
        if self.phase != MarkerPhase::Dragging { return None; }
        self.phase = MarkerPhase::Idle;
        self.value.map(MarkerNotice::Finalized)
    }

    /// Put the marker at `explicit`, or at the midpoint of what is visible.
    pub fn reset(&mut self, explicit: Option<f64>, current: &LinearScale, base: &LinearScale, fallback: f64) -> f64 {
        let value = reset_value(explicit, current.domain(), base.domain(), fallback);
        self.value = Some(value);
        self.phase = MarkerPhase::Idle;
        self.update_screen_position(current);
        value
    }

    /// Recompute the pixel position; a non-finite result keeps the last valid one.
    pub fn update_screen_position(&mut self, scale: &LinearScale) -> Option<f64> {
        let value = self.value?;
        let x = scale.map(value);
        if x.is_finite() {
            self.screen_x = Some(x);
        } else {
            tracing::warn!(value, "marker pixel position not finite, keeping last position");
        }
        self.screen_x
    }

    pub fn glyph(&self, major_tick_length: f64, cfg: &MarkerConfig) -> Option<MarkerGlyph> {
        let x = self.screen_x?;
        Some(MarkerGlyph {
            x,
            half_length: major_tick_length * cfg.line_width_to_major_tick_ratio,
            circle_radius: cfg.circle_radius,
            dragging: self.is_dragging(),
        })
    }
}

/// Marker value after a reset: `explicit` when finite, else the midpoint of the
/// current domain, else of the base domain, else `fallback`.
pub fn reset_value(explicit: Option<f64>, current: (f64, f64), base: (f64, f64), fallback: f64) -> f64 {
    if let Some(v) = explicit.filter(|v| v.is_finite()) { return v; }
    let midpoint = |(lo, hi): (f64, f64)| {
        (lo.is_finite() && hi.is_finite() && hi > lo).then(|| lo + (hi - lo) / 2.0)
    };
    midpoint(current).or_else(|| midpoint(base)).unwrap_or(fallback)
}
