// File: crates/numberline-core/src/format.rs
// Summary: Canonical short display strings for axis values and a value's decimal contextual magnitude.

/// Significant digits kept in display strings.
const SIGNIFICANT_DIGITS: usize = 10;

/// Format a value with ten significant digits in general notation, trimming
/// insignificant trailing zeros (`1.23`, `0.3`, `100`, `1e+21`, `1.5e-8`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() { return "NaN".to_string(); }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 { return "0".to_string(); }

    // Rounding to the requested precision happens here, so the exponent already
    // accounts for carries such as 9.9999999999 -> 1.000000000e1.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else { return sci };
    let Ok(exp) = exp.parse::<i32>() else { return sci };

    if exp < -6 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{}", trim_fraction(mantissa), sign, exp.abs());
    }
    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') { return s; }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Smallest place-value step implied by a value's decimal representation:
/// `0.1` for one fractional digit, `0.01` for two, `1` for integers and
/// non-finite input.
pub fn decimal_contextual_magnitude(value: f64) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 { return 1.0; }
    // Display for f64 is the shortest round-trip form and never uses exponents.
    let repr = value.abs().to_string();
    match repr.split_once('.') {
        Some((_, frac)) if !frac.is_empty() => 1.0 / 10f64.powi(frac.len() as i32),
        _ => 1.0,
    }
}
