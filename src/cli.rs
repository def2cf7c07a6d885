use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "aps",
    version,
    about = "AWS profile switcher for the current shell"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Bare invocation behaves as `aps switch`.
    pub fn command_or_default(&self) -> Command {
        self.command.unwrap_or(Command::Switch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(about = "Pick a profile interactively (default)")]
    Switch,
    #[command(about = "List discovered profiles")]
    List,
    #[command(about = "Print the active profile")]
    Current,
}
