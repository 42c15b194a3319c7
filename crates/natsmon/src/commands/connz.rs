//! Paged `/connz` connection list.

use serde::Serialize;
use tabled::Tabled;

use natsmon_core::{
    ConnInfo, Connz, PageToken, abbreviate_number, format_bytes, format_duration, format_rtt,
    page_bounds, page_count, pagination_range,
};

use super::{Context, util};
use crate::cli::ConnzArgs;
use crate::error::CliError;
use crate::output;

#[derive(Serialize, Tabled)]
struct ConnRow {
    #[tabled(rename = "CID")]
    cid: u64,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Lang")]
    lang: String,
    #[tabled(rename = "RTT")]
    rtt: String,
    #[tabled(rename = "Uptime")]
    uptime: String,
    #[tabled(rename = "Subs")]
    subscriptions: u64,
    #[tabled(rename = "In Msgs")]
    in_msgs: String,
    #[tabled(rename = "Out Msgs")]
    out_msgs: String,
    #[tabled(rename = "In Bytes")]
    in_bytes: String,
    #[tabled(rename = "Out Bytes")]
    out_bytes: String,
    #[tabled(rename = "Pending")]
    pending: String,
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
impl From<&ConnInfo> for ConnRow {
    fn from(c: &ConnInfo) -> Self {
        Self {
            cid: c.cid,
            address: format!("{}:{}", c.ip, c.port),
            name: c.name.clone().unwrap_or_default(),
            lang: match (&c.lang, &c.version) {
                (Some(lang), Some(version)) => format!("{lang} {version}"),
                (Some(lang), None) => lang.clone(),
                _ => String::new(),
            },
            rtt: format_rtt(&c.rtt),
            uptime: format_duration(&c.uptime),
            subscriptions: c.subscriptions,
            in_msgs: abbreviate_number(c.in_msgs as f64).to_string(),
            out_msgs: abbreviate_number(c.out_msgs as f64).to_string(),
            in_bytes: format_bytes(c.in_bytes as f64).to_string(),
            out_bytes: format_bytes(c.out_bytes as f64).to_string(),
            pending: format_bytes(c.pending_bytes as f64).to_string(),
        }
    }
}

/// One page of the connection list plus its pager.
#[derive(Serialize)]
struct ConnzPage {
    page: usize,
    pages: usize,
    per_page: usize,
    total: usize,
    pager: Vec<PageToken>,
    connections: Vec<ConnRow>,
}

impl ConnzPage {
    fn new(connz: &Connz, page: usize, per_page: usize, window: usize) -> Self {
        let total = connz.connections.len();
        let per_page = per_page.max(1);
        let pages = page_count(total, per_page);
        let page = page.clamp(1, pages);
        let connections = connz
            .connections
            .get(page_bounds(total, page, per_page))
            .unwrap_or_default()
            .iter()
            .map(ConnRow::from)
            .collect();

        Self {
            page,
            pages,
            per_page,
            total,
            pager: pagination_range(pages, page, window),
            connections,
        }
    }
}

pub fn handle(args: &ConnzArgs, ctx: &Context) -> Result<(), CliError> {
    let connz: Connz = util::read_snapshot(&args.snapshot)?;
    let pagination = &ctx.config.pagination;
    let view = ConnzPage::new(
        &connz,
        args.page,
        args.per_page.unwrap_or(pagination.per_page),
        args.window.unwrap_or(pagination.window),
    );
    tracing::debug!(
        page = view.page,
        pages = view.pages,
        total = view.total,
        "rendering connection page"
    );

    let color = ctx.color;
    let out = output::render_single(
        &ctx.output,
        &view,
        |v| {
            let table = output::render_table(&v.connections);
            let pager = output::render_pager(&v.pager, v.page, color);
            format!(
                "{table}\nPage {}/{} ({} connections)  {pager}",
                v.page, v.pages, v.total
            )
        },
        |v| {
            v.connections
                .iter()
                .map(|c| c.cid.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn connz(n: u64) -> Connz {
        let connections: Vec<serde_json::Value> = (1..=n)
            .map(|cid| serde_json::json!({"cid": cid, "ip": "10.0.0.1", "port": 4000 + cid}))
            .collect();
        serde_json::from_value(serde_json::json!({
            "now": "2024-03-01T12:00:00Z",
            "connections": connections,
        }))
        .unwrap()
    }

    #[test]
    fn slices_requested_page() {
        let view = ConnzPage::new(&connz(60), 2, 25, 7);
        assert_eq!(view.pages, 3);
        assert_eq!(view.connections.len(), 25);
        assert_eq!(view.connections[0].cid, 26);
        assert_eq!(
            view.pager,
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
    }

    #[test]
    fn clamps_page_past_the_end() {
        let view = ConnzPage::new(&connz(60), 40, 25, 7);
        assert_eq!(view.page, 3);
        assert_eq!(view.connections.len(), 10);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let view = ConnzPage::new(&connz(0), 1, 25, 7);
        assert_eq!(view.pages, 1);
        assert!(view.connections.is_empty());
    }

    #[test]
    fn row_formats_rtt_and_counters() {
        let mut info = connz(1).connections.remove(0);
        info.rtt = "2s10.0045412ms".into();
        info.in_bytes = 1536;
        info.in_msgs = 2_500_000;
        let row = ConnRow::from(&info);
        assert_eq!(row.rtt, "2s 10ms");
        assert_eq!(row.in_bytes, "1.5 KiB");
        assert_eq!(row.in_msgs, "2.5M");
        assert_eq!(row.address, "10.0.0.1:4001");
    }
}
