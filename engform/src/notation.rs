//! Engineering decomposition of a number into mantissa and exponent

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::NotationError;
use crate::prefix::PREFIXES;

/// Greatest multiple of 3 that is <= floor(log10(|number|)), so the scaled
/// mantissa lies in [1, 1000). Zero maps to exponent 0.
fn engineering_exponent(number: f64) -> i32 {
    if number == 0.0 {
        return 0;
    }
    let magnitude = number.abs().log10().floor() as i32;
    magnitude.div_euclid(3) * 3
}

/// `number / 10^exponent`. The scaling is split in two once `10^exponent`
/// itself would overflow or underflow an f64 (past roughly 10^±308).
fn scale(number: f64, exponent: i32) -> f64 {
    if exponent.abs() <= 300 {
        number / 10f64.powi(exponent)
    } else {
        let half = exponent / 2;
        (number / 10f64.powi(half)) / 10f64.powi(exponent - half)
    }
}

/// Literal exponent string: `E+3`, `E-6`, empty for exponent 0. The `+` is
/// written explicitly; negative exponents carry their own sign.
fn exponent_suffix(exponent: i32) -> String {
    match exponent {
        0 => String::new(),
        e if e > 0 => format!("E+{e}"),
        e => format!("E{e}"),
    }
}

/// A number decomposed into engineering form
///
/// The mantissa lies in [1, 1000) in magnitude (zero excepted) and carries
/// the sign of the original number; the exponent is always a multiple of 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Notation {
    pub mantissa: f64,
    pub exponent: i32,
}

impl Notation {
    /// Decompose a finite number
    pub fn decompose(number: f64) -> Result<Self, NotationError> {
        Self::decompose_in("decompose", number)
    }

    pub(crate) fn decompose_in(
        function: &'static str,
        number: f64,
    ) -> Result<Self, NotationError> {
        if !number.is_finite() {
            return Err(NotationError::NonFinite {
                function,
                value: number,
            });
        }

        let mut exponent = engineering_exponent(number);
        let mut mantissa = scale(number, exponent);

        // Platform log10 is not guaranteed correctly rounded; step once if
        // the mantissa landed outside [1, 1000).
        if mantissa.abs() >= 1000.0 {
            exponent += 3;
            mantissa = scale(number, exponent);
        } else if mantissa != 0.0 && mantissa.abs() < 1.0 {
            exponent -= 3;
            mantissa = scale(number, exponent);
        }

        Ok(Notation { mantissa, exponent })
    }

    /// SI prefix token for this exponent, if the table covers it
    pub fn prefix(&self) -> Option<&'static str> {
        PREFIXES.get(self.exponent)
    }

    /// Literal exponent string (`E+3`, `E-6`, empty for exponent 0)
    pub fn exponent_suffix(&self) -> String {
        exponent_suffix(self.exponent)
    }

    /// Reconstruct the original number, `mantissa * 10^exponent`
    pub fn value(&self) -> f64 {
        scale(self.mantissa, -self.exponent)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mantissa, self.exponent_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose(number: f64) -> Notation {
        Notation::decompose(number).unwrap()
    }

    #[test]
    fn test_exponent_selection() {
        assert_eq!(decompose(1.0).exponent, 0);
        assert_eq!(decompose(999.0).exponent, 0);
        assert_eq!(decompose(1000.0).exponent, 3);
        assert_eq!(decompose(15050.504).exponent, 3);
        assert_eq!(decompose(1e15).exponent, 15);
    }

    #[test]
    fn test_exponent_selection_below_one() {
        assert_eq!(decompose(0.5).exponent, -3);
        assert_eq!(decompose(0.009).exponent, -3);
        assert_eq!(decompose(0.000099).exponent, -6);
        assert_eq!(decompose(0.000000001).exponent, -9);
    }

    #[test]
    fn test_zero() {
        let zero = decompose(0.0);
        assert_eq!(zero.exponent, 0);
        assert_eq!(zero.mantissa, 0.0);
    }

    #[test]
    fn test_sign_carried_by_mantissa() {
        let negative = decompose(-0.00000000001);
        assert_eq!(negative.exponent, -12);
        assert!(negative.mantissa < 0.0);

        let positive = decompose(0.00000000001);
        assert_eq!(positive.exponent, negative.exponent);
    }

    #[test]
    fn test_mantissa_stays_in_engineering_range() {
        for &base in &[1.0, 2.5, 9.99, 99.0, 999.0] {
            for power in -20..=20 {
                let number = base * 10f64.powi(power);
                let notation = decompose(number);
                assert_eq!(notation.exponent % 3, 0, "exponent for {number}");
                assert!(
                    (1.0..1000.0).contains(&notation.mantissa.abs()),
                    "mantissa {} out of range for {number}",
                    notation.mantissa
                );
            }
        }
    }

    #[test]
    fn test_value_round_trips() {
        for &number in &[1234.5, 0.000047, -3300.0, 9.8e17, 5.0e-13] {
            let notation = decompose(number);
            let tolerance = 10f64.powi(notation.exponent) * 1e-9;
            assert!(
                (notation.value() - number).abs() <= tolerance,
                "round trip for {number}"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Notation::decompose(f64::NAN).is_err());
        assert!(Notation::decompose(f64::INFINITY).is_err());
        assert!(Notation::decompose(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_subnormal_and_huge_inputs() {
        let tiny = decompose(5e-324);
        assert_eq!(tiny.exponent, -324);
        assert!(tiny.mantissa.is_finite() && tiny.mantissa != 0.0);

        let huge = decompose(1.7e308);
        assert_eq!(huge.exponent, 306);
        assert!((1.0..1000.0).contains(&huge.mantissa));
    }

    #[test]
    fn test_exponent_suffix() {
        assert_eq!(exponent_suffix(3), "E+3");
        assert_eq!(exponent_suffix(15), "E+15");
        assert_eq!(exponent_suffix(-6), "E-6");
        assert_eq!(exponent_suffix(0), "");
    }

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(decompose(1500.0).prefix(), Some("k"));
        assert_eq!(decompose(0.002).prefix(), Some("m"));
        assert_eq!(decompose(5.0).prefix(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", decompose(1500.0)), "1.5E+3");
        assert_eq!(format!("{}", decompose(2.0)), "2");
    }
}
