// ── Rate derivation ──
//
// Message and byte rates come from the difference between two successive
// snapshots divided by the server-reported time between them. Counters
// can go backwards when the server restarts; such deltas floor at zero.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::format::{AbbreviatedCount, ByteSize, abbreviate_number, format_bytes};
use crate::model::{Snapshot, Varz};

/// The four monotonically increasing traffic counters a snapshot reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub in_msgs: u64,
    pub out_msgs: u64,
    pub in_bytes: u64,
    pub out_bytes: u64,
}

impl Counters {
    /// Per-counter increase since `previous`, floored at zero.
    pub fn saturating_delta(&self, previous: &Self) -> Self {
        Self {
            in_msgs: self.in_msgs.saturating_sub(previous.in_msgs),
            out_msgs: self.out_msgs.saturating_sub(previous.out_msgs),
            in_bytes: self.in_bytes.saturating_sub(previous.in_bytes),
            out_bytes: self.out_bytes.saturating_sub(previous.out_bytes),
        }
    }

    /// Whether any counter is lower than in `previous`.
    pub fn went_backwards(&self, previous: &Self) -> bool {
        self.in_msgs < previous.in_msgs
            || self.out_msgs < previous.out_msgs
            || self.in_bytes < previous.in_bytes
            || self.out_bytes < previous.out_bytes
    }
}

/// Anything that reports traffic counters.
pub trait HasCounters {
    fn counters(&self) -> Counters;
}

/// Two samples and the times they were taken at.
#[derive(Debug, Clone, Copy)]
pub struct RateInput {
    pub now: DateTime<Utc>,
    /// When `previous` was taken. `None` before the second poll.
    pub then: Option<DateTime<Utc>>,
    pub current: Counters,
    pub previous: Option<Counters>,
}

/// Display-ready per-second rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rates {
    /// Milliseconds between the two samples, zero without a previous one.
    pub time_delta_ms: i64,
    pub in_msgs_rate: AbbreviatedCount,
    pub out_msgs_rate: AbbreviatedCount,
    pub in_bytes_rate: ByteSize,
    pub out_bytes_rate: ByteSize,
}

impl Rates {
    /// Rates between two `/varz` snapshots, timed by their `now` fields.
    pub fn between(current: &Varz, previous: Option<&Varz>) -> Self {
        calculate_rates(&RateInput {
            now: current.sampled_at(),
            then: previous.map(Snapshot::sampled_at),
            current: current.counters(),
            previous: previous.map(HasCounters::counters),
        })
    }
}

/// Derive per-second rates from two samples.
///
/// Without a previous sample, or when no time has elapsed, every rate is
/// the zero value.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn calculate_rates(input: &RateInput) -> Rates {
    let time_delta_ms = match (input.then, input.previous) {
        (Some(then), Some(_)) => {
            let elapsed = (input.now - then).num_milliseconds();
            if elapsed < 0 {
                debug!(elapsed_ms = elapsed, "sample clock went backwards, ignoring interval");
                0
            } else {
                elapsed
            }
        }
        _ => 0,
    };

    let delta = match input.previous {
        Some(previous) => {
            if input.current.went_backwards(&previous) {
                debug!(
                    ?previous,
                    current = ?input.current,
                    "counters decreased between samples, flooring at zero"
                );
            }
            input.current.saturating_delta(&previous)
        }
        None => Counters::default(),
    };

    let per_second = |count: u64| -> f64 {
        if time_delta_ms == 0 {
            0.0
        } else {
            count as f64 / (time_delta_ms as f64 / 1000.0)
        }
    };

    Rates {
        time_delta_ms,
        in_msgs_rate: abbreviate_number(per_second(delta.in_msgs)),
        out_msgs_rate: abbreviate_number(per_second(delta.out_msgs)),
        in_bytes_rate: format_bytes(per_second(delta.in_bytes)),
        out_bytes_rate: format_bytes(per_second(delta.out_bytes)),
    }
}

/// Keeps the previous snapshot between poll ticks.
///
/// Each [`observe`](Self::observe) computes rates against the cached snapshot
/// and then replaces it, so feeding successive polls yields one rate row per
/// interval.
#[derive(Debug, Default)]
pub struct RateTracker {
    previous: Option<Varz>,
}

impl RateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rates since the last observed snapshot, then cache `snapshot`.
    pub fn observe(&mut self, snapshot: Varz) -> Rates {
        let rates = Rates::between(&snapshot, self.previous.as_ref());
        self.previous = Some(snapshot);
        rates
    }

    /// The cached snapshot, if any.
    pub fn previous(&self) -> Option<&Varz> {
        self.previous.as_ref()
    }

    /// Forget the cached snapshot, e.g. after switching servers.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn counters(in_msgs: u64, out_msgs: u64, in_bytes: u64, out_bytes: u64) -> Counters {
        Counters {
            in_msgs,
            out_msgs,
            in_bytes,
            out_bytes,
        }
    }

    fn varz(now: DateTime<Utc>, c: Counters) -> Varz {
        let json = serde_json::json!({
            "now": now,
            "in_msgs": c.in_msgs,
            "out_msgs": c.out_msgs,
            "in_bytes": c.in_bytes,
            "out_bytes": c.out_bytes,
        });
        serde_json::from_value(json).unwrap()
    }

    fn rendered(rates: &Rates) -> [String; 4] {
        [
            rates.in_msgs_rate.to_string(),
            rates.out_msgs_rate.to_string(),
            rates.in_bytes_rate.to_string(),
            rates.out_bytes_rate.to_string(),
        ]
    }

    #[test]
    fn no_previous_sample_yields_zero() {
        let rates = calculate_rates(&RateInput {
            now: t0(),
            then: None,
            current: counters(5000, 5000, 5000, 5000),
            previous: None,
        });
        assert_eq!(rates.time_delta_ms, 0);
        assert_eq!(rendered(&rates), ["0", "0", "0 B", "0 B"]);
    }

    #[test]
    fn missing_timestamp_yields_zero_delta() {
        let rates = calculate_rates(&RateInput {
            now: t0(),
            then: None,
            current: counters(5000, 0, 0, 0),
            previous: Some(counters(0, 0, 0, 0)),
        });
        assert_eq!(rates.time_delta_ms, 0);
        assert_eq!(rates.in_msgs_rate.to_string(), "0");
    }

    #[test]
    fn rates_are_per_second() {
        let rates = calculate_rates(&RateInput {
            now: t0() + Duration::milliseconds(2000),
            then: Some(t0()),
            current: counters(3000, 5_000_000, 4096 + 100, 3 * 1024 * 1024),
            previous: Some(counters(1000, 2_000_000, 100, 0)),
        });
        assert_eq!(rates.time_delta_ms, 2000);
        assert_eq!(rendered(&rates), ["1K", "1.5M", "2 KiB", "1.5 MiB"]);
    }

    #[test]
    fn counter_reset_never_goes_negative() {
        let rates = calculate_rates(&RateInput {
            now: t0() + Duration::seconds(1),
            then: Some(t0()),
            current: counters(10, 10, 10, 10),
            previous: Some(counters(9000, 9000, 9000, 9000)),
        });
        assert_eq!(rates.time_delta_ms, 1000);
        assert_eq!(rendered(&rates), ["0", "0", "0 B", "0 B"]);
    }

    #[test]
    fn clock_going_backwards_yields_zero() {
        let rates = calculate_rates(&RateInput {
            now: t0(),
            then: Some(t0() + Duration::seconds(5)),
            current: counters(9000, 0, 0, 0),
            previous: Some(counters(0, 0, 0, 0)),
        });
        assert_eq!(rates.time_delta_ms, 0);
        assert_eq!(rates.in_msgs_rate.to_string(), "0");
    }

    #[test]
    fn between_uses_snapshot_timestamps() {
        let prev = varz(t0(), counters(0, 0, 0, 0));
        let curr = varz(t0() + Duration::milliseconds(500), counters(50, 0, 512, 0));
        let rates = Rates::between(&curr, Some(&prev));
        assert_eq!(rates.time_delta_ms, 500);
        assert_eq!(rates.in_msgs_rate.to_string(), "100");
        assert_eq!(rates.in_bytes_rate.to_string(), "1 KiB");
    }

    #[test]
    fn tracker_caches_previous_snapshot() {
        let mut tracker = RateTracker::new();
        let first = tracker.observe(varz(t0(), counters(0, 0, 0, 0)));
        assert_eq!(first.time_delta_ms, 0);
        assert!(tracker.previous().is_some());

        let second = tracker.observe(varz(t0() + Duration::seconds(10), counters(20_000, 0, 0, 0)));
        assert_eq!(second.time_delta_ms, 10_000);
        assert_eq!(second.in_msgs_rate.to_string(), "2K");

        tracker.reset();
        let after_reset =
            tracker.observe(varz(t0() + Duration::seconds(20), counters(90_000, 0, 0, 0)));
        assert_eq!(after_reset.time_delta_ms, 0);
        assert_eq!(after_reset.in_msgs_rate.to_string(), "0");
    }
}
