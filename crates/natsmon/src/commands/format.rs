//! Single-value formatting commands: bytes, count, duration.

use serde::Serialize;
use tabled::Tabled;

use natsmon_core::{abbreviate_number, format_bytes, format_duration, format_rtt, round_duration};

use super::Context;
use crate::cli::{DurationArgs, ValuesArgs};
use crate::error::CliError;
use crate::output;

// ── Data ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FormattedValue {
    input: f64,
    magnitude: String,
    unit: String,
    display: String,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Value")]
    magnitude: String,
    #[tabled(rename = "Unit")]
    unit: String,
}

impl From<&FormattedValue> for ValueRow {
    fn from(v: &FormattedValue) -> Self {
        Self {
            input: v.input.to_string(),
            magnitude: v.magnitude.clone(),
            unit: v.unit.clone(),
        }
    }
}

#[derive(Serialize, Tabled)]
struct DurationRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Formatted")]
    output: String,
}

fn render_values(values: &[FormattedValue], ctx: &Context) {
    let out = output::render_list(
        &ctx.output,
        values,
        |v| ValueRow::from(v),
        |v| v.display.clone(),
    );
    output::print_output(&out, ctx.quiet);
}

// ── Handlers ─────────────────────────────────────────────────────────

#[allow(clippy::unnecessary_wraps)]
pub fn handle_bytes(args: &ValuesArgs, ctx: &Context) -> Result<(), CliError> {
    let values: Vec<FormattedValue> = args
        .values
        .iter()
        .map(|&input| {
            let size = format_bytes(input);
            FormattedValue {
                input,
                display: size.to_string(),
                magnitude: size.magnitude,
                unit: size.unit.to_string(),
            }
        })
        .collect();
    render_values(&values, ctx);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
pub fn handle_count(args: &ValuesArgs, ctx: &Context) -> Result<(), CliError> {
    let values: Vec<FormattedValue> = args
        .values
        .iter()
        .map(|&input| {
            let count = abbreviate_number(input);
            FormattedValue {
                input,
                display: count.to_string(),
                magnitude: count.magnitude,
                unit: count.unit.to_string(),
            }
        })
        .collect();
    render_values(&values, ctx);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
pub fn handle_duration(args: &DurationArgs, ctx: &Context) -> Result<(), CliError> {
    let transform: fn(&str) -> String = if args.rtt {
        format_rtt
    } else if args.round {
        round_duration
    } else {
        format_duration
    };

    let rows: Vec<DurationRow> = args
        .values
        .iter()
        .map(|input| DurationRow {
            output: transform(input),
            input: input.clone(),
        })
        .collect();

    let out = output::render_list(
        &ctx.output,
        &rows,
        |r| DurationRow {
            input: r.input.clone(),
            output: r.output.clone(),
        },
        |r| r.output.clone(),
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}
