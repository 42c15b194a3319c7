use std::fmt;

use serde::Serialize;

use super::{finite_or_zero, round_two, trim_fraction};

/// SI-style count suffix. `None` means the value was not abbreviated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
pub enum CountUnit {
    #[serde(rename = "")]
    #[strum(serialize = "")]
    None,
    K,
    M,
    B,
    T,
}

impl CountUnit {
    fn next(self) -> Option<Self> {
        match self {
            Self::None => Some(Self::K),
            Self::K => Some(Self::M),
            Self::M => Some(Self::B),
            Self::B => Some(Self::T),
            Self::T => None,
        }
    }
}

/// A count divided down by powers of 1000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbbreviatedCount {
    pub magnitude: String,
    pub unit: CountUnit,
}

impl fmt::Display for AbbreviatedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// Abbreviate a large count (e.g. `1_500_000` → `1.5M`).
///
/// Escalation stops at `T`: anything from a thousand trillion up keeps a
/// magnitude of 1000 or more.
pub fn abbreviate_number(n: f64) -> AbbreviatedCount {
    let mut n = finite_or_zero(n);
    let mut unit = CountUnit::None;
    while round_two(n) >= 1000.0 {
        let Some(next) = unit.next() else {
            break;
        };
        n /= 1000.0;
        unit = next;
    }

    AbbreviatedCount {
        magnitude: trim_fraction(n),
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_not_abbreviated() {
        let c = abbreviate_number(999.0);
        assert_eq!(c.magnitude, "999");
        assert_eq!(c.unit, CountUnit::None);
        assert_eq!(c.to_string(), "999");
        assert_eq!(abbreviate_number(0.0).to_string(), "0");
        assert_eq!(abbreviate_number(12.345).to_string(), "12.35");
    }

    #[test]
    fn escalates_through_units() {
        assert_eq!(abbreviate_number(1000.0).to_string(), "1K");
        assert_eq!(abbreviate_number(1500.0).to_string(), "1.5K");
        assert_eq!(abbreviate_number(2_340_000.0).to_string(), "2.34M");
        assert_eq!(abbreviate_number(7e9).to_string(), "7B");
        assert_eq!(abbreviate_number(4.2e12).to_string(), "4.2T");
    }

    #[test]
    fn magnitude_stays_below_1000_until_ceiling() {
        let mut n = 1.0;
        while n < 1e13 {
            let c = abbreviate_number(n * 999.0);
            let magnitude: f64 = c.magnitude.parse().unwrap_or(f64::MAX);
            assert!(magnitude < 1000.0, "{n}: {c}");
            n *= 10.0;
        }
    }

    #[test]
    fn rounding_up_to_1000_moves_to_next_unit() {
        assert_eq!(abbreviate_number(999_999.0).to_string(), "1M");
        assert_eq!(abbreviate_number(999.999).to_string(), "1K");
        assert_eq!(abbreviate_number(999_990.0).to_string(), "999.99K");
    }

    #[test]
    fn ceiling_at_trillions() {
        let c = abbreviate_number(5e15);
        assert_eq!(c.unit, CountUnit::T);
        assert_eq!(c.magnitude, "5000");
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(abbreviate_number(f64::NAN).to_string(), "0");
    }
}
