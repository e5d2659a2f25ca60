// File: crates/numberline-core/src/config.rs
// Summary: Numberline configuration with documented defaults; every key is optional when loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::AxisError;
use crate::types::{Margins, EPSILON, FALLBACK_SURFACE_WIDTH, SURFACE_HEIGHT};

/// Draggable marker appearance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerConfig {
    /// Radius of the grab handle drawn on the axis line. Default `10`.
    pub circle_radius: f64,
    /// Marker line half-length as a multiple of `majorTickLength`. Default `1.5`.
    pub line_width_to_major_tick_ratio: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self { circle_radius: 10.0, line_width_to_major_tick_ratio: 1.5 }
    }
}

/// Correct-answer highlight appearance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Default `3`.
    pub stroke_width: f64,
    /// Full highlight length as a multiple of `majorTickLength`. Default `2.8`.
    pub length_to_major_tick_ratio: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { stroke_width: 3.0, length_to_major_tick_ratio: 2.8 }
    }
}

/// Read-only configuration for a [`crate::NumberlineView`].
///
/// All keys are optional in JSON (`camelCase`); missing keys take the defaults
/// listed on each field. Zero, negative or non-finite values for fields that must
/// be positive are replaced by their default in [`NumberlineConfig::sanitized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberlineConfig {
    /// Domain shown before the first question. Default `[0, 2]`.
    pub initial_domain: [f64; 2],
    /// Default `0.001`.
    pub min_zoom_scale: f64,
    /// Default `1000`.
    pub max_zoom_scale: f64,
    /// Default `4`.
    pub target_major_ticks_on_screen: f64,
    /// Default `200`.
    pub min_pixel_separation_for_major: f64,
    /// Max major separation = min separation × this. Default `5`.
    pub major_tick_pixel_separation_multiplier: f64,
    /// Hard cap on generated ticks per render. Default `300`.
    pub max_ticks_to_generate: usize,
    /// Default `20`.
    pub major_tick_length: f64,
    /// Default `10`.
    pub minor_tick_length: f64,
    /// Length of the tick halfway between two majors. Default `18`.
    pub mid_minor_tick_length: f64,
    /// Default `20`.
    pub label_font_size_px: f64,
    pub marker_config: MarkerConfig,
    pub correct_answer_highlight_config: HighlightConfig,
    pub margins: Margins,
    /// Emit per-render diagnostics at `debug` level.
    pub debug: bool,
    /// Default `150`.
    pub svg_height: f64,
    /// Surface width used when the host reports none. Default `800`.
    pub fallback_surface_width: f64,
    /// Relative float tolerance for step comparisons. Default `1e-9`.
    pub epsilon: f64,
    /// Minor ticks closer than this are dropped. Default `5`.
    pub min_minor_pixel_spacing: f64,
    /// Feedback labels closer than this many font sizes are stacked. Default `3`.
    pub feedback_proximity_em: f64,
    /// Extra gap between stacked feedback labels, in font sizes. Default `0.3`.
    pub feedback_label_padding_em: f64,
    /// Distance from a mark's end to its label baseline, in font sizes. Default `1.2`.
    pub feedback_text_offset_em: f64,
    /// Marker value when no domain yields a usable midpoint. Default `0.5`.
    pub marker_fallback_value: f64,
}

impl Default for NumberlineConfig {
    fn default() -> Self {
        Self {
            initial_domain: [0.0, 2.0],
            min_zoom_scale: 0.001,
            max_zoom_scale: 1000.0,
            target_major_ticks_on_screen: 4.0,
            min_pixel_separation_for_major: 200.0,
            major_tick_pixel_separation_multiplier: 5.0,
            max_ticks_to_generate: 300,
            major_tick_length: 20.0,
            minor_tick_length: 10.0,
            mid_minor_tick_length: 18.0,
            label_font_size_px: 20.0,
            marker_config: MarkerConfig::default(),
            correct_answer_highlight_config: HighlightConfig::default(),
            margins: Margins::default(),
            debug: false,
            svg_height: SURFACE_HEIGHT,
            fallback_surface_width: FALLBACK_SURFACE_WIDTH,
            epsilon: EPSILON,
            min_minor_pixel_spacing: 5.0,
            feedback_proximity_em: 3.0,
            feedback_label_padding_em: 0.3,
            feedback_text_offset_em: 1.2,
            marker_fallback_value: 0.5,
        }
    }
}

impl NumberlineConfig {
    /// Parse a (possibly partial) JSON document. The result is sanitized.
    pub fn from_json_str(json: &str) -> Result<Self, AxisError> {
        let cfg: Self = serde_json::from_str(json)?;
        Ok(cfg.sanitized())
    }

    /// Replace unusable numeric values with their defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let non_negative = |v: f64, fallback: f64| if v.is_finite() && v >= 0.0 { v } else { fallback };

        let [lo, hi] = self.initial_domain;
        let initial_domain = if lo.is_finite() && hi.is_finite() && lo < hi { [lo, hi] } else { d.initial_domain };

        let mut min_zoom_scale = positive(self.min_zoom_scale, d.min_zoom_scale);
        let mut max_zoom_scale = positive(self.max_zoom_scale, d.max_zoom_scale);
        if min_zoom_scale > max_zoom_scale {
            std::mem::swap(&mut min_zoom_scale, &mut max_zoom_scale);
        }

        Self {
            initial_domain,
            min_zoom_scale,
            max_zoom_scale,
            target_major_ticks_on_screen: positive(self.target_major_ticks_on_screen, d.target_major_ticks_on_screen),
            min_pixel_separation_for_major: positive(self.min_pixel_separation_for_major, d.min_pixel_separation_for_major),
            major_tick_pixel_separation_multiplier: positive(
                self.major_tick_pixel_separation_multiplier,
                d.major_tick_pixel_separation_multiplier,
            ),
            max_ticks_to_generate: if self.max_ticks_to_generate == 0 { d.max_ticks_to_generate } else { self.max_ticks_to_generate },
            major_tick_length: positive(self.major_tick_length, d.major_tick_length),
            minor_tick_length: positive(self.minor_tick_length, d.minor_tick_length),
            mid_minor_tick_length: positive(self.mid_minor_tick_length, d.mid_minor_tick_length),
            label_font_size_px: positive(self.label_font_size_px, d.label_font_size_px),
            marker_config: MarkerConfig {
                circle_radius: positive(self.marker_config.circle_radius, d.marker_config.circle_radius),
                line_width_to_major_tick_ratio: positive(
                    self.marker_config.line_width_to_major_tick_ratio,
                    d.marker_config.line_width_to_major_tick_ratio,
                ),
            },
            correct_answer_highlight_config: HighlightConfig {
                stroke_width: positive(
                    self.correct_answer_highlight_config.stroke_width,
                    d.correct_answer_highlight_config.stroke_width,
                ),
                length_to_major_tick_ratio: positive(
                    self.correct_answer_highlight_config.length_to_major_tick_ratio,
                    d.correct_answer_highlight_config.length_to_major_tick_ratio,
                ),
            },
            margins: self.margins.sanitized(),
            debug: self.debug,
            svg_height: positive(self.svg_height, d.svg_height),
            fallback_surface_width: positive(self.fallback_surface_width, d.fallback_surface_width),
            epsilon: positive(self.epsilon, d.epsilon),
            min_minor_pixel_spacing: non_negative(self.min_minor_pixel_spacing, d.min_minor_pixel_spacing),
            feedback_proximity_em: non_negative(self.feedback_proximity_em, d.feedback_proximity_em),
            feedback_label_padding_em: non_negative(self.feedback_label_padding_em, d.feedback_label_padding_em),
            feedback_text_offset_em: non_negative(self.feedback_text_offset_em, d.feedback_text_offset_em),
            marker_fallback_value: if self.marker_fallback_value.is_finite() { self.marker_fallback_value } else { d.marker_fallback_value },
        }
    }

    /// `(min, max)` zoom scale factors.
    pub fn zoom_extent(&self) -> (f64, f64) {
        (self.min_zoom_scale, self.max_zoom_scale)
    }
}
