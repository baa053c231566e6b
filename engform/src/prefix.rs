//! SI prefix tokens keyed by power-of-ten exponent, -60..=60 in steps of 3

use std::collections::HashMap;
use std::sync::LazyLock;

/// Global prefix table
pub static PREFIXES: LazyLock<PrefixTable> = LazyLock::new(PrefixTable::new);

/// Immutable table of SI prefix tokens
///
/// Exponent 0 has no entry: "no prefix" is represented by an absent key, as
/// are multiples of 3 outside the -60..=60 convention range.
pub struct PrefixTable {
    prefixes: HashMap<i32, &'static str>,
}

impl PrefixTable {
    pub fn new() -> Self {
        let mut table = PrefixTable {
            prefixes: HashMap::new(),
        };
        table.register_submultiples();
        table.register_multiples();
        table
    }

    /// Token for an exponent, `None` if the table does not cover it
    pub fn get(&self, exponent: i32) -> Option<&'static str> {
        self.prefixes.get(&exponent).copied()
    }

    /// All covered exponents in ascending order
    pub fn exponents(&self) -> Vec<i32> {
        let mut exponents: Vec<i32> = self.prefixes.keys().copied().collect();
        exponents.sort_unstable();
        exponents
    }

    fn register(&mut self, exponent: i32, token: &'static str) {
        self.prefixes.insert(exponent, token);
    }

    fn register_submultiples(&mut self) {
        // The extended range below -24 reuses letters: "yy" appears at both
        // -60 and -54, and -30 shares "y" with -24. Kept as published.
        self.register(-60, "yy");
        self.register(-57, "yr");
        self.register(-54, "yy");
        self.register(-51, "yz");
        self.register(-48, "ya");
        self.register(-45, "yf");
        self.register(-42, "yp");
        self.register(-39, "yn");
        self.register(-36, "yμ");
        self.register(-33, "ym");
        self.register(-30, "y");
        self.register(-27, "r");
        self.register(-24, "y");
        self.register(-21, "z");
        self.register(-18, "a");
        self.register(-15, "f");
        self.register(-12, "p");
        self.register(-9, "n");
        self.register(-6, "μ");
        self.register(-3, "m");
    }

    fn register_multiples(&mut self) {
        self.register(3, "k");
        self.register(6, "M");
        self.register(9, "G");
        self.register(12, "T");
        self.register(15, "P");
        self.register(18, "E");
        self.register(21, "Z");
        self.register(24, "Y");
        self.register(27, "R");
        self.register(30, "Q");

        // Above 30 the tokens compound on "Q"
        self.register(33, "Qk");
        self.register(36, "QM");
        self.register(39, "QG");
        self.register(42, "QT");
        self.register(45, "QP");
        self.register(48, "QE");
        self.register(51, "QZ");
        self.register(54, "QY");
        self.register(57, "QR");
        self.register(60, "QQ");
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new()
    }
}
