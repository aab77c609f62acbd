//! Simplified fractions for displaying drop chances ("1 in 4" style odds).
//!
//! Drop chances in the variant data are almost always dyadic (1/2, 3/8,
//! 1/64...). Those are matched exactly against power-of-two denominators
//! first. Anything else falls back to the closest fraction with a bounded
//! denominator.

use serde::{Serialize, Serializer};

use crate::config::FRACTION_DENOMINATOR_CAP;

/// Power-of-two denominators tried before the general search.
pub const DYADIC_DENOMINATORS: [u64; 7] = [1, 2, 4, 8, 16, 32, 64];

/// How close `n/d` must be to the chance to count as an exact match.
pub const MATCH_TOLERANCE: f64 = 1e-8;

/// A fraction in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// Numerator.
    pub numerator: u64,
    /// Denominator, never zero.
    pub denominator: u64,
}

impl Fraction {
    /// Build a fraction reduced to lowest terms. A zero numerator becomes
    /// `0/1`; a zero denominator is treated as 1.
    pub fn reduced(numerator: u64, denominator: u64) -> Self {
        let denominator = denominator.max(1);
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// The decimal value.
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Simplified fraction for a chance with the default denominator cap.
pub fn simplified_fraction(chance: f64) -> Fraction {
    approximate_fraction(chance, FRACTION_DENOMINATOR_CAP)
}

/// Simplified fraction for a chance, searching denominators up to `cap` when
/// no power-of-two denominator matches.
pub fn approximate_fraction(chance: f64, cap: u64) -> Fraction {
    let chance = if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    };

    if let Some(exact) = dyadic_fraction(chance) {
        return exact;
    }
    if chance == 1.0 {
        return Fraction::reduced(1, 1);
    }
    best_rational(chance, cap.max(1))
}

fn dyadic_fraction(chance: f64) -> Option<Fraction> {
    DYADIC_DENOMINATORS.iter().find_map(|&d| {
        let numerator = (chance * d as f64).round();
        ((numerator / d as f64 - chance).abs() <= MATCH_TOLERANCE)
            .then(|| Fraction::reduced(numerator as u64, d))
    })
}

/// Closest `n/d` with `1 <= d <= cap`. The first denominator reaching the
/// smallest error wins.
fn best_rational(chance: f64, cap: u64) -> Fraction {
    let mut best = (0_u64, 1_u64);
    let mut best_error = f64::INFINITY;
    for d in 1..=cap {
        let numerator = (chance * d as f64).round();
        let error = (chance - numerator / d as f64).abs();
        if error < best_error {
            best_error = error;
            best = (numerator as u64, d);
        }
    }
    Fraction::reduced(best.0, best.1)
}
