//! Display layer for NATS-style monitoring snapshots.
//!
//! Everything in this crate is pure and synchronous. Callers hand in raw
//! counters and duration strings taken from `/varz` and `/connz` snapshots
//! and get back display-ready values:
//!
//! - **[`format`]**: byte sizes with binary suffixes ([`format_bytes`]),
//!   SI-style count abbreviations ([`abbreviate_number`]), and server
//!   duration strings ([`format_duration`], [`round_duration`], [`format_rtt`]).
//!   All of these are total: malformed input degrades to a pass-through or a
//!   zero value rather than an error.
//!
//! - **[`rates`]**: per-second message and byte rates derived from two
//!   successive snapshots ([`calculate_rates`]), plus [`RateTracker`] which
//!   caches the previous snapshot between poll ticks.
//!
//! - **[`pagination`]**: compact page-number windows with ellipsis markers
//!   ([`pagination_range`]) for long list views.
//!
//! - **[`model`]**: serde models for the snapshot fields the formatters
//!   consume. Decoding a snapshot is the only fallible operation here.

pub mod error;
pub mod format;
pub mod model;
pub mod pagination;
pub mod rates;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use format::{
    AbbreviatedCount, ByteSize, ByteUnit, CountUnit, abbreviate_number, format_bytes,
    format_duration, format_rtt, round_duration,
};
pub use model::{ConnInfo, Connz, Endpoint, Varz, decode};
pub use pagination::{PageToken, page_bounds, page_count, pagination_range};
pub use rates::{Counters, HasCounters, RateInput, RateTracker, Rates, calculate_rates};
