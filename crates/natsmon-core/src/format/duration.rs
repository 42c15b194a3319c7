//! Server duration strings such as `"3d12h30m52s"` or `"7.075186ms"`.
//!
//! Grammar accepted by every function here:
//!
//! ```text
//! duration := number | segment (ws* segment)*
//! segment  := number unit
//! number   := digit+ ("." digit+)?
//! unit     := d | h | m | s | ms | µs | us | ns
//! ```
//!
//! Units must strictly decrease in magnitude from left to right. Input that
//! does not match is handed back unchanged so display code never fails on an
//! unexpected server string.

/// Time unit of one duration segment, ordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DurationUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// Recognized spellings. Two-character units come first so `ms` wins over `m`.
const UNIT_SPELLINGS: &[(&str, DurationUnit)] = &[
    ("ms", DurationUnit::Millis),
    ("µs", DurationUnit::Micros),
    ("μs", DurationUnit::Micros),
    ("us", DurationUnit::Micros),
    ("ns", DurationUnit::Nanos),
    ("d", DurationUnit::Days),
    ("h", DurationUnit::Hours),
    ("m", DurationUnit::Minutes),
    ("s", DurationUnit::Seconds),
];

/// One `<number><unit>` piece, borrowed from the input.
#[derive(Debug)]
struct Segment<'a> {
    /// Whitespace that preceded the segment (empty for the first one).
    separator: &'a str,
    number: &'a str,
    unit: &'a str,
}

#[derive(Debug)]
enum Parsed<'a> {
    /// A number with no unit at all.
    Bare(&'a str),
    Segments(Vec<Segment<'a>>),
}

/// Split a leading `digit+ ("." digit+)?` off `s`.
fn split_number(s: &str) -> Option<(&str, &str)> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }
    let mut len = int_len;
    if let Some(frac) = s[int_len..].strip_prefix('.') {
        let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
        if frac_len > 0 {
            len += 1 + frac_len;
        }
    }
    Some(s.split_at(len))
}

fn split_unit(s: &str) -> Option<(&str, DurationUnit)> {
    UNIT_SPELLINGS
        .iter()
        .find(|(spelling, _)| s.starts_with(spelling))
        .copied()
}

fn parse(input: &str) -> Option<Parsed<'_>> {
    let (number, rest) = split_number(input)?;
    if rest.is_empty() {
        return Some(Parsed::Bare(number));
    }

    let mut segments = Vec::new();
    let mut previous: Option<DurationUnit> = None;
    let mut rest = input;
    while !rest.is_empty() {
        let body = rest.trim_start();
        let separator = &rest[..rest.len() - body.len()];
        let (number, after) = split_number(body)?;
        let (unit, kind) = split_unit(after)?;
        if previous.is_some_and(|prev| kind >= prev) {
            return None;
        }
        previous = Some(kind);
        segments.push(Segment {
            separator,
            number,
            unit,
        });
        rest = &after[unit.len()..];
    }
    Some(Parsed::Segments(segments))
}

/// Round a fractional number to two decimals and drop a `.00` tail.
/// Integers pass through untouched.
fn round_number(number: &str) -> String {
    if !number.contains('.') {
        return number.to_owned();
    }
    let Ok(value) = number.parse::<f64>() else {
        return number.to_owned();
    };
    let fixed = format!("{value:.2}");
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_owned(),
        None => fixed,
    }
}

/// Space out a compact duration: `"15m35s"` → `"15m 35s"`.
///
/// Numbers and unit spellings are kept verbatim. Bare numbers and
/// unparseable input come back unchanged.
pub fn format_duration(input: &str) -> String {
    match parse(input) {
        Some(Parsed::Segments(segments)) => segments
            .iter()
            .map(|s| format!("{}{}", s.number, s.unit))
            .collect::<Vec<_>>()
            .join(" "),
        Some(Parsed::Bare(_)) | None => input.to_owned(),
    }
}

/// Round every fractional number in a duration to two decimals.
///
/// `"1.0002563s"` → `"1s"`, `"7.075186ms"` → `"7.08ms"`. Spacing between
/// segments is preserved. Idempotent.
pub fn round_duration(input: &str) -> String {
    match parse(input) {
        Some(Parsed::Bare(number)) => round_number(number),
        Some(Parsed::Segments(segments)) => segments
            .iter()
            .map(|s| format!("{}{}{}", s.separator, round_number(s.number), s.unit))
            .collect(),
        None => input.to_owned(),
    }
}

/// Round-trip time for display: spaced out, then rounded.
pub fn format_rtt(input: &str) -> String {
    round_duration(&format_duration(input))
}
