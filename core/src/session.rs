use std::io::Write;

use greeter_common::config::Config;
use greeter_common::error::OutputError;
use tracing::debug;

use crate::greeting::greet;

/// Writes the default greeting, then one greeting per roster name, each on
/// its own line. Returns the number of lines written.
pub fn greet_roster<W: Write>(cfg: &Config, out: &mut W) -> Result<usize, OutputError> {
    let names = std::iter::once(None).chain(cfg.roster.iter().map(|name| Some(name.as_str())));

    let mut written: usize = 0;
    for name in names {
        let greeting: String = greet(name);
        writeln!(out, "{greeting}")?;
        debug!(name = name.unwrap_or_default(), "greeted");
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
