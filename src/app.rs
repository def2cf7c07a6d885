use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let ctx = AppContext::bootstrap(cli.json, cli.verbose)?;

    match cli.command_or_default() {
        Command::Switch => commands::switch::run(&ctx),
        Command::List => commands::list::run(&ctx),
        Command::Current => commands::current::run(&ctx),
    }
}
