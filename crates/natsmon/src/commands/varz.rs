//! `/varz` server summary.

use serde::Serialize;

use natsmon_core::{Rates, Varz, abbreviate_number, format_bytes, format_duration};

use super::{Context, util};
use crate::cli::VarzArgs;
use crate::error::CliError;
use crate::output;

/// Display-ready view of one `/varz` snapshot.
#[derive(Serialize)]
struct VarzSummary {
    server_name: String,
    server_id: String,
    version: String,
    uptime: String,
    memory: String,
    cpu: String,
    cores: u32,
    connections: u64,
    total_connections: String,
    subscriptions: String,
    slow_consumers: u64,
    in_msgs: String,
    out_msgs: String,
    in_bytes: String,
    out_bytes: String,
    rates: Option<Rates>,
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
impl VarzSummary {
    fn new(varz: &Varz, rates: Option<Rates>) -> Self {
        Self {
            server_name: varz.server_name.clone(),
            server_id: varz.server_id.clone(),
            version: varz.version.clone(),
            uptime: format_duration(&varz.uptime),
            memory: format_bytes(varz.mem as f64).to_string(),
            cpu: format!("{:.1}%", varz.cpu),
            cores: varz.cores,
            connections: varz.connections,
            total_connections: abbreviate_number(varz.total_connections as f64).to_string(),
            subscriptions: abbreviate_number(varz.subscriptions as f64).to_string(),
            slow_consumers: varz.slow_consumers,
            in_msgs: abbreviate_number(varz.in_msgs as f64).to_string(),
            out_msgs: abbreviate_number(varz.out_msgs as f64).to_string(),
            in_bytes: format_bytes(varz.in_bytes as f64).to_string(),
            out_bytes: format_bytes(varz.out_bytes as f64).to_string(),
            rates,
        }
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<16}{value}", format!("{label}:"))
}

fn detail(s: &VarzSummary) -> String {
    let mut lines = vec![
        line("Server", or_dash(&s.server_name)),
        line("ID", or_dash(&s.server_id)),
        line("Version", or_dash(&s.version)),
        line("Uptime", or_dash(&s.uptime)),
        line("Memory", &s.memory),
        line("CPU", format!("{} ({} cores)", s.cpu, s.cores)),
        line(
            "Connections",
            format!("{} (total {})", s.connections, s.total_connections),
        ),
        line("Subscriptions", &s.subscriptions),
        line("Slow consumers", s.slow_consumers),
        line("Messages", format!("{} in / {} out", s.in_msgs, s.out_msgs)),
        line("Data", format!("{} in / {} out", s.in_bytes, s.out_bytes)),
    ];
    if let Some(ref r) = s.rates {
        lines.push(line(
            "Msg rate",
            format!("{}/s in / {}/s out", r.in_msgs_rate, r.out_msgs_rate),
        ));
        lines.push(line(
            "Data rate",
            format!("{}/s in / {}/s out", r.in_bytes_rate, r.out_bytes_rate),
        ));
    }
    lines.join("\n")
}

pub fn handle(args: &VarzArgs, ctx: &Context) -> Result<(), CliError> {
    if let Some(ref previous) = args.previous {
        util::ensure_single_stdin([args.snapshot.as_path(), previous.as_path()])?;
    }

    let current: Varz = util::read_snapshot(&args.snapshot)?;
    let previous: Option<Varz> = args
        .previous
        .as_deref()
        .map(util::read_snapshot::<Varz>)
        .transpose()?;
    let rates = previous
        .as_ref()
        .map(|prev| Rates::between(&current, Some(prev)));

    let summary = VarzSummary::new(&current, rates);
    let out = output::render_single(&ctx.output, &summary, detail, |s| {
        if s.server_name.is_empty() {
            s.server_id.clone()
        } else {
            s.server_name.clone()
        }
    });
    output::print_output(&out, ctx.quiet);
    Ok(())
}
