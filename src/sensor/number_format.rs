//! Number formatting for dashboard text and notification ids.
//!
//! Values are printed the way the web dashboard prints them: one-decimal
//! output breaks exact ties away from zero, and negative zero prints as `0`.

/// `-0.0` becomes `0.0`; everything else passes through.
fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Shortest form of `value`, e.g. `42`, `33.5`.
pub fn format_plain(value: f64) -> String {
    format!("{}", without_negative_zero(value))
}

/// `value` to one decimal place, exact ties rounded away from zero.
///
/// A binary float sits exactly halfway between two tenths only when its
/// fractional part is `.25` or `.75`, i.e. when `4 * value` is an odd integer.
pub fn format_fixed1(value: f64) -> String {
    let value = without_negative_zero(value);
    let quarters = value.abs() * 4.0;

    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (value.abs() * 10.0).ceil().copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }

    format!("{:.1}", value)
}
