//! Command dispatch: bridges CLI args -> core formatting -> output rendering.

pub mod config_cmd;
pub mod connz;
pub mod format;
pub mod pages;
pub mod rates;
pub mod util;
pub mod varz;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Settings resolved once per invocation from flags and config.
pub struct Context {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub config: Config,
}

impl Context {
    pub fn resolve(global: &GlobalOpts, config: Config) -> Result<Self, CliError> {
        let output = config::resolve_output(global, &config)?;
        let color = output::should_color(&config::resolve_color(global, &config)?);
        Ok(Self {
            output,
            color,
            quiet: global.quiet,
            config,
        })
    }
}

/// Dispatch a formatting command to the appropriate handler.
pub fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Bytes(args) => format::handle_bytes(&args, ctx),
        Command::Count(args) => format::handle_count(&args, ctx),
        Command::Duration(args) => format::handle_duration(&args, ctx),
        Command::Pages(args) => pages::handle(&args, ctx),
        Command::Rates(args) => rates::handle(&args, ctx),
        Command::Varz(args) => varz::handle(&args, ctx),
        Command::Connz(args) => connz::handle(&args, ctx),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
