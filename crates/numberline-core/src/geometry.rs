// File: crates/numberline-core/src/geometry.rs
// Summary: Pixel-space helpers: drawable-area validation with fallbacks and hit rectangles.

use crate::types::Margins;

/// Chart area resolved from a surface width and margins.
/// Contract: `chart_width > 0` always.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawable {
    pub surface_width: f64,
    pub margins: Margins,
    pub chart_width: f64,
}

/// Resolve a strictly positive chart width.
///
/// A non-positive or non-finite surface width is replaced by `fallback_surface_width`.
/// When the margins eat the whole surface, the horizontal margins shrink to a
/// quarter of the surface each so the chart keeps half of it; the last resort is 1 px.
pub fn ensure_drawable(surface_width: f64, margins: Margins, fallback_surface_width: f64) -> Drawable {
    let surface_width = if surface_width.is_finite() && surface_width > 0.0 {
        surface_width
    } else {
        tracing::warn!(surface_width, fallback_surface_width, "surface width unusable, using fallback");
        fallback_surface_width
    };
    let mut margins = margins;
    let mut chart_width = surface_width - margins.hsum();
    if !(chart_width > 0.0) {
        tracing::warn!(chart_width, surface_width, "chart width non-positive after margins, reserving half the surface");
        margins.left = surface_width * 0.25;
        margins.right = surface_width * 0.25;
        chart_width = surface_width * 0.5;
        if !(chart_width > 0.0) { chart_width = 1.0; }
    }
    Drawable { surface_width, margins, chart_width }
}

/// Axis-aligned rectangle in chart-area pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Rectangle of half-extents `(hw, hh)` centred on `(cx, cy)`.
    pub fn around(cx: f64, cy: f64, hw: f64, hh: f64) -> Self {
        Self::from_ltrb(cx - hw, cy - hh, cx + hw, cy + hh)
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
