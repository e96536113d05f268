//! Display formatting for calculator results.

/// Upper bound for plain decimal notation; at or above this magnitude the
/// display switches to exponent form.
const PLAIN_UPPER: f64 = 1e15;

/// Lower bound for plain decimal notation; non-zero magnitudes below this
/// switch to exponent form.
const PLAIN_LOWER: f64 = 1e-4;

/// Formats a value the way a calculator display expects: minimal digits
/// that round-trip to the same `f64`, no forced decimal places, exponent
/// notation only for very large or very small magnitudes.
///
/// `format_number(3.0)` is `"3"`, `format_number(0.5)` is `"0.5"`, and
/// `format_number(1e20)` is `"1e20"`. Negative zero renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (PLAIN_LOWER..PLAIN_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}
