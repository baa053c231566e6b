//! Engform demonstration
//!
//! Prints a fixed set of sample values in SI-prefix and engineering form.
//! Output is illustrative only; the formatting contract lives in the
//! `engform` crate.

use engform::{engineering_form, si_form, NotationError, DEFAULT_PRECISION};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SAMPLES: &[(f64, &str)] = &[
    (15050.504, "V"),
    (0.000000001, "A"),
    (4700.0, "Ω"),
    (0.000047, "F"),
    (1000000000000000.0, "Hz"),
    (-0.0033, "V"),
    (0.0, "W"),
];

fn main() -> Result<(), NotationError> {
    println!("engform {VERSION}");
    println!();

    for &(value, unit) in SAMPLES {
        println!("Value:     {value}");
        println!("SI Form:   {}", si_form(value, unit, DEFAULT_PRECISION)?);
        println!("Eng. Form: {}", engineering_form(value, unit, DEFAULT_PRECISION)?);
        println!();
    }

    Ok(())
}
