//! Human-readable formatting for raw monitoring values.
//!
//! Byte counters use binary units (`KiB`, `MiB`, ...), message counters use
//! SI-style abbreviations (`K`, `M`, `B`, `T`), and durations are the compact
//! strings the server reports (`"3d12h30m52s"`, `"7.075186ms"`).

mod bytes;
mod count;
mod duration;

pub use bytes::{ByteSize, ByteUnit, format_bytes};
pub use count::{AbbreviatedCount, CountUnit, abbreviate_number};
pub use duration::{format_duration, format_rtt, round_duration};

/// Round to two decimals and drop trailing fractional zeros.
///
/// `2.0` → `"2"`, `2.5` → `"2.5"`, `1.005` → whatever `{:.2}` rounds it to.
pub(crate) fn trim_fraction(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    // `-0.001` rounds to "-0.00"; never show a signed zero
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// `value` as it will read after two-decimal rounding, for unit selection.
pub(crate) fn round_two(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Map NaN and infinities to zero so the unit loops always terminate.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
