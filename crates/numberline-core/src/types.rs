// File: crates/numberline-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins, float tolerance).

use serde::{Deserialize, Serialize};

/// Surface width used when the host reports no usable width.
pub const FALLBACK_SURFACE_WIDTH: f64 = 800.0;
/// Default surface height in pixels.
pub const SURFACE_HEIGHT: f64 = 150.0;
/// Float tolerance, relative to the step it is compared against.
pub const EPSILON: f64 = 1e-9;

/// Surface margins around the chart area, in pixels.
/// Contract: all fields are non-negative once sanitized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }

    /// Negative or non-finite sides collapse to zero.
    pub fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(fix(self.top), fix(self.right), fix(self.bottom), fix(self.left))
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50.0, 20.0, 70.0, 20.0)
    }
}
