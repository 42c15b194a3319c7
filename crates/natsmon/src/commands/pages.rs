//! Pager window command.

use serde::Serialize;

use natsmon_core::{PageToken, pagination_range};

use super::Context;
use crate::cli::PagesArgs;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct PagerView {
    total: usize,
    current: usize,
    size: usize,
    tokens: Vec<PageToken>,
}

pub fn handle(args: &PagesArgs, ctx: &Context) -> Result<(), CliError> {
    if args.total == 0 {
        return Err(CliError::Validation {
            field: "total".into(),
            reason: "must be at least 1".into(),
        });
    }

    let size = args.size.unwrap_or(ctx.config.pagination.window);
    let view = PagerView {
        total: args.total,
        current: args.current.clamp(1, args.total),
        size,
        tokens: pagination_range(args.total, args.current, size),
    };

    let color = ctx.color;
    let out = output::render_single(
        &ctx.output,
        &view,
        |v| output::render_pager(&v.tokens, v.current, color),
        |v| {
            v.tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
    output::print_output(&out, ctx.quiet);
    Ok(())
}
