mod commands;
mod terminal;

use std::io;

use anyhow::Context;
use commands::CommandLine;
use greeter_core::session;
use tracing::info;

use crate::terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();
    info!(roster = cfg.roster.len(), "greeting roster");

    let stdout = io::stdout();
    let written = session::greet_roster(&cfg, &mut stdout.lock())
        .context("could not print greetings to stdout")?;

    info!(lines = written, "done");
    Ok(())
}
