use aps::cli::{Cli, Command};
use clap::Parser;

#[test]
fn bare_invocation_has_no_subcommand() {
    let cli = Cli::try_parse_from(["aps"]).expect("cli parse should work");
    assert!(cli.command.is_none());
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn bare_invocation_defaults_to_switch() {
    let cli = Cli::try_parse_from(["aps"]).expect("cli parse should work");
    assert_eq!(cli.command_or_default(), Command::Switch);

    let cli = Cli::try_parse_from(["aps", "list"]).expect("cli parse should work");
    assert_eq!(cli.command_or_default(), Command::List);
}

#[test]
fn parses_switch() {
    let cli = Cli::try_parse_from(["aps", "switch"]).expect("cli parse should work");
    assert!(matches!(cli.command, Some(Command::Switch)));
}

#[test]
fn parses_list_with_json() {
    let cli = Cli::try_parse_from(["aps", "list", "--json"]).expect("cli parse should work");
    assert!(matches!(cli.command, Some(Command::List)));
    assert!(cli.json);
}

#[test]
fn parses_current() {
    let cli = Cli::try_parse_from(["aps", "current"]).expect("cli parse should work");
    assert!(matches!(cli.command, Some(Command::Current)));
}

#[test]
fn counts_verbose_flags() {
    let cli = Cli::try_parse_from(["aps", "-vv", "list"]).expect("cli parse should work");
    assert_eq!(cli.verbose, 2);
}
