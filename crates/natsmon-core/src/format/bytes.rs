use std::fmt;

use serde::Serialize;

use super::{finite_or_zero, round_two, trim_fraction};

const KIB: f64 = 1024.0;

/// Binary byte unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
pub enum ByteUnit {
    B,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
    EiB,
}

impl ByteUnit {
    /// The next larger unit, or `None` past `EiB`.
    fn next(self) -> Option<Self> {
        match self {
            Self::B => Some(Self::KiB),
            Self::KiB => Some(Self::MiB),
            Self::MiB => Some(Self::GiB),
            Self::GiB => Some(Self::TiB),
            Self::TiB => Some(Self::PiB),
            Self::PiB => Some(Self::EiB),
            Self::EiB => None,
        }
    }
}

/// A byte count scaled to the largest binary unit that keeps it under 1024.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteSize {
    /// Rounded to two decimals, trailing fractional zeros stripped.
    pub magnitude: String,
    pub unit: ByteUnit,
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Format a byte count with binary unit suffixes (e.g. `1536` → `1.5 KiB`).
///
/// Values that round to under 1024 stay in `B` without scaling. Negative and non-finite
/// input is treated as zero. Scaling stops at `EiB`.
pub fn format_bytes(bytes: f64) -> ByteSize {
    let bytes = finite_or_zero(bytes).max(0.0);
    // Units are picked on the rounded magnitude so it never reads as 1024.
    if round_two(bytes) < KIB {
        return ByteSize {
            magnitude: trim_fraction(bytes),
            unit: ByteUnit::B,
        };
    }

    let mut unit = ByteUnit::KiB;
    let mut divisor = KIB;
    while round_two(bytes / divisor) >= KIB {
        let Some(next) = unit.next() else {
            break;
        };
        unit = next;
        divisor *= KIB;
    }

    ByteSize {
        magnitude: trim_fraction(bytes / divisor),
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(bytes: f64) -> (String, ByteUnit) {
        let size = format_bytes(bytes);
        (size.magnitude, size.unit)
    }

    #[test]
    fn small_values_stay_in_bytes() {
        assert_eq!(fmt(0.0), ("0".into(), ByteUnit::B));
        assert_eq!(fmt(512.0), ("512".into(), ByteUnit::B));
        assert_eq!(fmt(1023.0), ("1023".into(), ByteUnit::B));
        assert_eq!(fmt(10.456), ("10.46".into(), ByteUnit::B));
    }

    #[test]
    fn negative_and_non_finite_are_zero() {
        assert_eq!(fmt(-42.0), ("0".into(), ByteUnit::B));
        assert_eq!(fmt(f64::NAN), ("0".into(), ByteUnit::B));
        assert_eq!(fmt(f64::NEG_INFINITY), ("0".into(), ByteUnit::B));
    }

    #[test]
    fn scales_through_binary_units() {
        assert_eq!(fmt(1024.0), ("1".into(), ByteUnit::KiB));
        assert_eq!(fmt(1536.0), ("1.5".into(), ByteUnit::KiB));
        assert_eq!(fmt(2.5 * KIB * KIB), ("2.5".into(), ByteUnit::MiB));
        assert_eq!(fmt(KIB.powi(3)), ("1".into(), ByteUnit::GiB));
        assert_eq!(fmt(3.0 * KIB.powi(4)), ("3".into(), ByteUnit::TiB));
        assert_eq!(fmt(KIB.powi(5)), ("1".into(), ByteUnit::PiB));
        assert_eq!(fmt(KIB.powi(6)), ("1".into(), ByteUnit::EiB));
    }

    #[test]
    fn magnitude_stays_below_1024_per_unit() {
        for k in 1..=6 {
            let size = format_bytes(KIB.powi(k) * 1000.0);
            let magnitude: f64 = size.magnitude.parse().unwrap_or(f64::MAX);
            assert!((0.0..1024.0).contains(&magnitude), "k={k}: {size}");
        }
    }

    #[test]
    fn rounding_up_to_1024_moves_to_next_unit() {
        assert_eq!(fmt(1_048_575.0), ("1".into(), ByteUnit::MiB));
        assert_eq!(fmt(1023.999), ("1".into(), ByteUnit::KiB));
        assert_eq!(fmt(KIB.powi(2) - 10.0), ("1023.99".into(), ByteUnit::KiB));
    }

    #[test]
    fn scaling_stops_at_exbibytes() {
        let size = format_bytes(KIB.powi(7));
        assert_eq!(size.unit, ByteUnit::EiB);
        assert_eq!(size.magnitude, "1024");
    }

    #[test]
    fn display_joins_with_space() {
        assert_eq!(format_bytes(1536.0).to_string(), "1.5 KiB");
        assert_eq!(format_bytes(12.0).to_string(), "12 B");
    }
}
