use clap::{ArgAction, Parser};
use greeter_common::config::Config;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Greets the world, then everyone on the roster.")]
#[command(version)]
pub struct CommandLine {
    /// Names to greet instead of the built-in roster
    pub names: Vec<String>,

    /// Raise diagnostic verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        if self.names.is_empty() {
            Config::default()
        } else {
            Config::with_roster(self.names.iter().cloned())
        }
    }
}
