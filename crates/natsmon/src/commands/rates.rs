//! Rates across successive `/varz` snapshots.
//!
//! Each snapshot is one poll tick. The first row has no previous sample and
//! therefore zero rates, mirroring what a live dashboard shows on its first
//! refresh.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tabled::Tabled;

use natsmon_core::{RateTracker, Rates, Varz};

use super::{Context, util};
use crate::cli::RatesArgs;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct RateEntry {
    sampled_at: DateTime<Utc>,
    #[serde(flatten)]
    rates: Rates,
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Sampled At")]
    sampled_at: String,
    #[tabled(rename = "Interval")]
    interval: String,
    #[tabled(rename = "In Msgs/s")]
    in_msgs: String,
    #[tabled(rename = "Out Msgs/s")]
    out_msgs: String,
    #[tabled(rename = "In Bytes/s")]
    in_bytes: String,
    #[tabled(rename = "Out Bytes/s")]
    out_bytes: String,
}

impl From<&RateEntry> for RateRow {
    fn from(e: &RateEntry) -> Self {
        Self {
            sampled_at: e.sampled_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            interval: if e.rates.time_delta_ms == 0 {
                "-".into()
            } else {
                format!("{}ms", e.rates.time_delta_ms)
            },
            in_msgs: e.rates.in_msgs_rate.to_string(),
            out_msgs: e.rates.out_msgs_rate.to_string(),
            in_bytes: e.rates.in_bytes_rate.to_string(),
            out_bytes: e.rates.out_bytes_rate.to_string(),
        }
    }
}

pub fn handle(args: &RatesArgs, ctx: &Context) -> Result<(), CliError> {
    util::ensure_single_stdin(args.snapshots.iter().map(std::path::PathBuf::as_path))?;

    let mut tracker = RateTracker::new();
    let mut entries = Vec::with_capacity(args.snapshots.len());
    for path in &args.snapshots {
        let snapshot: Varz = util::read_snapshot(path)?;
        let sampled_at = snapshot.now;
        entries.push(RateEntry {
            sampled_at,
            rates: tracker.observe(snapshot),
        });
    }

    let out = output::render_list(
        &ctx.output,
        &entries,
        |e| RateRow::from(e),
        |e| {
            format!(
                "{}\t{}\t{}\t{}",
                e.rates.in_msgs_rate,
                e.rates.out_msgs_rate,
                e.rates.in_bytes_rate,
                e.rates.out_bytes_rate
            )
        },
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}
