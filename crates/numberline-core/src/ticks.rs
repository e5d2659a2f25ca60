// File: crates/numberline-core/src/ticks.rs
// Summary: Adaptive tick levels: major/minor/mid-minor step selection under pixel-density limits and hard caps.

use crate::config::NumberlineConfig;
use crate::scale::LinearScale;

/// Bound on the grow and shrink passes of the step search.
const MAX_STEP_ITERATIONS: usize = 15;
/// Smallest usable major step.
const MIN_STEP: f64 = 1e-12;
/// Minor steps below this are never iterated.
const MIN_MINOR_STEP: f64 = 1e-9;
/// The grow pass stops once the step dwarfs the domain by this factor.
const MAX_STEP_TO_WIDTH: f64 = 1e5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub is_major: bool,
    /// Exactly halfway between two major ticks (drawn taller than plain minors).
    pub is_mid_minor: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    Major,
    MidMinor,
    Minor,
}

impl Tick {
    pub fn kind(&self) -> TickKind {
        if self.is_major {
            TickKind::Major
        } else if self.is_mid_minor {
            TickKind::MidMinor
        } else {
            TickKind::Minor
        }
    }
}

/// Density knobs for [`compute_ticks`], usually taken from [`NumberlineConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickParams {
    pub target_major_ticks: f64,
    pub min_pixel_separation: f64,
    pub separation_multiplier: f64,
    pub max_ticks: usize,
    pub min_minor_pixel_spacing: f64,
    pub epsilon: f64,
}

impl TickParams {
    pub fn max_pixel_separation(&self) -> f64 {
        self.min_pixel_separation * self.separation_multiplier
    }
}

impl From<&NumberlineConfig> for TickParams {
    fn from(cfg: &NumberlineConfig) -> Self {
        Self {
            target_major_ticks: cfg.target_major_ticks_on_screen,
            min_pixel_separation: cfg.min_pixel_separation_for_major,
            separation_multiplier: cfg.major_tick_pixel_separation_multiplier,
            max_ticks: cfg.max_ticks_to_generate,
            min_minor_pixel_spacing: cfg.min_minor_pixel_spacing,
            epsilon: cfg.epsilon,
        }
    }
}

impl Default for TickParams {
    fn default() -> Self {
        Self::from(&NumberlineConfig::default())
    }
}

/// Result of one tick pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLevels {
    pub major_step: f64,
    /// `major_step / 10` when minor ticks were generated, `None` when only majors were.
    pub minor_step: Option<f64>,
    pub ticks: Vec<Tick>,
}

/// Step expressed as `mantissa × 10^exp` with mantissa 1 or 5, so that decimal
/// steps come out as the correctly rounded literal (`0.05`, not `5 × 0.01`).
#[derive(Clone, Copy, Debug)]
struct Step {
    mantissa: f64,
    exp: i32,
}

impl Step {
    fn decade(exp: i32) -> Self { Self { mantissa: 1.0, exp } }

    fn value(self) -> f64 {
        if self.exp >= 0 {
            self.mantissa * 10f64.powi(self.exp)
        } else {
            self.mantissa / 10f64.powi(-self.exp)
        }
    }

    /// Fractional digits needed to write multiples of this step.
    fn decimals(self) -> usize { (-self.exp).max(0) as usize }

    fn coarser(self) -> Self { Self { exp: self.exp + 1, ..self } }
    fn finer(self) -> Self { Self { exp: self.exp - 1, ..self } }
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step > MIN_STEP
}

/// Ordered ticks for the visible domain of `scale`; empty for degenerate views.
pub fn compute_ticks(scale: &LinearScale, chart_width: f64, params: &TickParams) -> Vec<Tick> {
    compute_tick_levels(scale, chart_width, params).map(|l| l.ticks).unwrap_or_default()
}

/// Steps and ticks for the visible domain of `scale`.
///
/// Returns `None` when there is nothing to draw (non-positive or non-finite
/// domain width, non-positive chart width, or no usable step).
pub fn compute_tick_levels(scale: &LinearScale, chart_width: f64, params: &TickParams) -> Option<TickLevels> {
    let (d0, d1) = scale.domain();
    let width = d1 - d0;
    if !width.is_finite() || width <= 0.0 || !(chart_width > 0.0) || !chart_width.is_finite() {
        return None;
    }

    let major = choose_major_step(width, chart_width, params)?;
    let major_step = major.value();
    let minor = major.finer();
    let minor_step = minor.value();
    let px_per_unit = chart_width / width;
    let eps = params.epsilon;

    let mut with_minor = minor_step >= MIN_MINOR_STEP && minor_step * px_per_unit >= params.min_minor_pixel_spacing;
    let mut step = if with_minor { minor_step } else { major_step };
    let mut decimals = if with_minor { minor.decimals() } else { major.decimals() };
    let index_bounds = |step: f64| ((d0 / step - eps).floor(), (d1 / step + eps).ceil());

    let (mut first, mut last) = index_bounds(step);
    if !first.is_finite() || !last.is_finite() || first > last {
        return None;
    }
    let cap = params.max_ticks as f64;
    if last - first > cap * 2.0 && with_minor {
        with_minor = false;
        step = major_step;
        decimals = major.decimals();
        (first, last) = index_bounds(step);
    }
    if last - first > cap * 2.0 {
        tracing::debug!(major_step, predicted = last - first, "tick count over budget, drawing none");
        return Some(TickLevels { major_step, minor_step: None, ticks: Vec::new() });
    }

    let count = (last - first) as usize + 1;
    let mut ticks: Vec<Tick> = Vec::with_capacity(count.min(params.max_ticks));
    for i in 0..count {
        if ticks.len() >= params.max_ticks { break; }
        let index = first + i as f64;
        let mut value = round_to_decimals(index * step, decimals);
        // Also folds -0.0 into 0.0.
        if value.abs() < eps * step { value = 0.0; }
        // Classifying by generation index keeps major/mid detection exact for
        // values far from the origin, where remainders lose precision.
        let (is_major, is_mid_minor) = if with_minor {
            let slot = index.rem_euclid(10.0);
            (slot == 0.0, slot == 5.0)
        } else {
            (true, false)
        };
        // Steps below the float spacing collapse neighbours; a major wins the slot.
        if let Some(prev) = ticks.last_mut().filter(|t| t.value == value) {
            if is_major && !prev.is_major {
                prev.is_major = true;
                prev.is_mid_minor = false;
            }
            continue;
        }
        ticks.push(Tick { value, is_major, is_mid_minor });
    }

    let has_minor = ticks.iter().any(|t| !t.is_major);
    Some(TickLevels {
        major_step,
        minor_step: (with_minor && has_minor).then_some(minor_step),
        ticks,
    })
}

/// Decade search (grow, then shrink with an anti-oscillation guard) followed by
/// a half-decade refinement, giving steps of the form `{1, 5} × 10^n`.
fn choose_major_step(width: f64, chart_width: f64, params: &TickParams) -> Option<Step> {
    let min_sep = params.min_pixel_separation;
    let max_sep = params.max_pixel_separation();
    let px_per_unit = chart_width / width;

    let ideal = params.target_major_ticks.min(chart_width / min_sep).max(1.0);
    let ideal = if ideal.is_finite() && ideal > 0.0 { ideal } else { 1.0 };

    let mut step = Step::decade(exponent_of((width / ideal).log10()));
    if !usable_step(step.value()) {
        step = Step::decade(exponent_of(width.log10() / 2.0));
        if !usable_step(step.value()) { step = Step::decade(0); }
    }

    for _ in 0..MAX_STEP_ITERATIONS {
        if step.value() * px_per_unit >= min_sep { break; }
        if step.value() * 10.0 >= width * MAX_STEP_TO_WIDTH { break; }
        step = step.coarser();
    }

    for _ in 0..MAX_STEP_ITERATIONS {
        let px = step.value() * px_per_unit;
        if px <= max_sep { break; }
        let next = step.finer();
        if !usable_step(next.value()) { break; }
        let next_px = next.value() * px_per_unit;
        if next_px < min_sep / 2.0 && px < max_sep * 1.5 { break; }
        step = next;
    }

    // Decades alone can leave the spacing outside [min_sep, max_sep] (e.g. 38 px
    // vs 380 px); the 5x step between them usually lands inside. Growing never
    // goes past one step per visible domain.
    let px = step.value() * px_per_unit;
    if px < min_sep {
        let up = Step { mantissa: 5.0, ..step };
        if up.value() * px_per_unit <= max_sep && up.value() <= width { step = up; }
    } else if px > max_sep {
        let down = Step { mantissa: 5.0, exp: step.exp - 1 };
        if down.value() * px_per_unit >= min_sep { step = down; }
    }

    usable_step(step.value()).then_some(step)
}

fn exponent_of(log10: f64) -> i32 {
    if log10.is_finite() { log10.floor().clamp(-320.0, 320.0) as i32 } else { 0 }
}

/// Round to `decimals` fractional digits (to an integer when zero), so that
/// `index * step` lands on the literal the step implies.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() { return value; }
    if decimals == 0 { return value.round(); }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// `value` is an integer multiple of `step` within `epsilon` (relative to `step`).
pub fn is_multiple_of(value: f64, step: f64, epsilon: f64) -> bool {
    if !(step.abs() > 0.0) || !step.is_finite() { return false; }
    let ratio = value / step;
    (ratio - ratio.round()).abs() < epsilon
}
