// File: crates/numberline-core/src/scale.rs
// Summary: Domain, zoom/pan transform, linear domain-to-pixel scale and the engine that composes them.

use crate::error::AxisError;
use crate::geometry::{clamp, ensure_drawable, Drawable};
use crate::types::Margins;

/// Logical numeric span mapped onto the axis.
/// Contract: both bounds finite and `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// `[0, 2]`, the domain shown before any question arrives.
    pub const DEFAULT: Self = Self { min: 0.0, max: 2.0 };

    pub fn new(min: f64, max: f64) -> Result<Self, AxisError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(AxisError::NonFiniteDomain { min, max });
        }
        if !(min < max) {
            return Err(AxisError::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }
    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn bounds(&self) -> (f64, f64) { (self.min, self.max) }
    pub fn width(&self) -> f64 { self.max - self.min }
    pub fn midpoint(&self) -> f64 { self.min + self.width() / 2.0 }
}

impl TryFrom<[f64; 2]> for Domain {
    type Error = AxisError;
    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

/// Cumulative zoom (`k`) and pan (`x`, pixels) applied on top of the base map:
/// `screen = base(value) * k + x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0 };

    pub const fn new(k: f64, x: f64) -> Self { Self { k, x } }

    #[inline]
    pub fn apply(&self, px: f64) -> f64 { px * self.k + self.x }
    #[inline]
    pub fn invert(&self, px: f64) -> f64 { (px - self.x) / self.k }

    /// Clamp `k` into `[min, max]`. Unusable factors reset to 1, unusable
    /// translations to 0.
    pub fn clamped(self, (min, max): (f64, f64)) -> Self {
        let k = if self.k.is_finite() && self.k > 0.0 { clamp(self.k, min, max) } else { 1.0 };
        let x = if self.x.is_finite() { self.x } else { 0.0 };
        Self { k, x }
    }

    /// Multiply the zoom by `factor`, keeping the value under `anchor_px` fixed.
    pub fn scaled_at(self, anchor_px: f64, factor: f64, extent: (f64, f64)) -> Self {
        if !factor.is_finite() || factor <= 0.0 || !anchor_px.is_finite() { return self; }
        let k = clamp(self.k * factor, extent.0, extent.1);
        let x = anchor_px - (anchor_px - self.x) * (k / self.k);
        Self { k, x }
    }

    /// Pan by `dx` pixels.
    pub fn translated(self, dx: f64) -> Self {
        if !dx.is_finite() { return self; }
        Self { k: self.k, x: self.x + dx }
    }
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

/// Linear map from `[d0, d1]` onto pixels `[r0, r1]`.
///
/// The base map is built from a validated [`Domain`]; a rescaled (effective)
/// map may carry a degenerate domain under extreme transforms, so its bounds are
/// kept raw and every consumer checks finiteness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { d0: domain.min, d1: domain.max, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    /// Value -> pixel.
    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Pixel -> value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        self.d0 + (px - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }

    /// Apply `transform` on top of this map. Pure: same pixel range, new domain.
    pub fn rescale(&self, transform: ZoomTransform) -> Self {
        let d0 = self.invert(transform.invert(self.r0));
        let d1 = self.invert(transform.invert(self.r1));
        Self { d0, d1, r0: self.r0, r1: self.r1 }
    }
}

/// Owns the base domain, the chart width and the current zoom/pan state.
#[derive(Clone, Debug)]
pub struct ScaleEngine {
    domain: Domain,
    chart_width: f64,
    transform: ZoomTransform,
    zoom_extent: (f64, f64),
}

impl ScaleEngine {
    /// New engine with an unmeasured (zero) chart width; call
    /// [`ScaleEngine::update_dimensions`] once layout is known.
    pub fn new(domain: Domain, zoom_extent: (f64, f64)) -> Self {
        Self { domain, chart_width: 0.0, transform: ZoomTransform::IDENTITY, zoom_extent }
    }

    pub fn domain(&self) -> Domain { self.domain }
    pub fn chart_width(&self) -> f64 { self.chart_width }
    pub fn transform(&self) -> ZoomTransform { self.transform }
    pub fn zoom_extent(&self) -> (f64, f64) { self.zoom_extent }
    pub fn is_drawable(&self) -> bool { self.chart_width > 0.0 }

    /// Install a new domain and reset the transform to identity.
    /// Fails without touching state if the bounds are invalid or nothing is drawable yet.
    pub fn set_domain(&mut self, min: f64, max: f64) -> Result<(), AxisError> {
        let domain = Domain::new(min, max)?;
        if !self.is_drawable() {
            return Err(AxisError::NoDrawableWidth(self.chart_width));
        }
        self.domain = domain;
        self.transform = ZoomTransform::IDENTITY;
        Ok(())
    }

    /// Recompute the base pixel range from a surface width. Never leaves a zero width.
    pub fn update_dimensions(&mut self, surface_width: f64, margins: Margins, fallback_surface_width: f64) -> Drawable {
        let drawable = ensure_drawable(surface_width, margins, fallback_surface_width);
        self.chart_width = drawable.chart_width;
        drawable
    }

    /// Store a transform, clamping its zoom factor.
    pub fn set_transform(&mut self, transform: ZoomTransform) -> ZoomTransform {
        self.transform = transform.clamped(self.zoom_extent);
        self.transform
    }

    /// Domain -> `[0, chart_width]` without zoom/pan.
    pub fn base_scale(&self) -> LinearScale {
        LinearScale::new(self.domain, (0.0, self.chart_width))
    }

    /// Base map with `transform` applied. Pure.
    pub fn rescale(&self, transform: ZoomTransform) -> LinearScale {
        self.base_scale().rescale(transform)
    }

    /// Base map with the stored transform applied.
    pub fn effective(&self) -> LinearScale {
        self.rescale(self.transform)
    }
}
