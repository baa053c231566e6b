//! Formatting entry points: SI-prefix form and engineering form

use crate::error::NotationError;
use crate::notation::Notation;

/// Decimal places used when callers have no stronger preference
pub const DEFAULT_PRECISION: usize = 3;

/// Format a number using SI prefixes: `si_form(1500.0, "V", 3)` is
/// `"1.500 kV"`.
///
/// The mantissa keeps `round_to_decimal_places` decimal places, trailing
/// zeros included. An exponent with no prefix token falls back to the
/// literal exponent string. Trailing whitespace is stripped, so an empty
/// `unit` at exponent 0 yields the bare mantissa.
pub fn si_form(
    number: f64,
    unit: &str,
    round_to_decimal_places: usize,
) -> Result<String, NotationError> {
    let notation = Notation::decompose_in("si_form", number)?;
    let mantissa = format!("{:.*}", round_to_decimal_places, notation.mantissa);
    let out = match notation.prefix() {
        Some(prefix) => format!("{mantissa} {prefix}{unit}"),
        None if notation.exponent == 0 => format!("{mantissa} {unit}"),
        None => format!("{mantissa}{} {unit}", notation.exponent_suffix()),
    };
    Ok(out.trim_end().to_string())
}

/// Format a number in engineering notation: `engineering_form(1500.0, "V", 3)`
/// is `"1.500E+3 V"`.
///
/// The unit is appended after a single space only when non-empty; unlike
/// [`si_form`] the output is never trimmed.
pub fn engineering_form(
    number: f64,
    unit: &str,
    round_to_decimal_places: usize,
) -> Result<String, NotationError> {
    let notation = Notation::decompose_in("engineering_form", number)?;
    let mantissa = format!("{:.*}", round_to_decimal_places, notation.mantissa);
    let suffix = notation.exponent_suffix();
    if unit.is_empty() {
        Ok(format!("{mantissa}{suffix}"))
    } else {
        Ok(format!("{mantissa}{suffix} {unit}"))
    }
}

/// Alias of [`si_form`]
pub fn sif(num: f64, uni: &str, prec: usize) -> Result<String, NotationError> {
    si_form(num, uni, prec)
}

/// Alias of [`engineering_form`]
pub fn engf(num: f64, uni: &str, prec: usize) -> Result<String, NotationError> {
    engineering_form(num, uni, prec)
}
