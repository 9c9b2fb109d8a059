use crate::global_settings::GlobalSettings;
use clap::Command;

pub(crate) fn build_cli() -> Command {
    Command::new("soldi")
        .version("0.1")
        .about("View your accounts")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("accounts")
                .about("Show all accounts with per-category totals"),
        )
        .subcommand(
            Command::new("categories")
                .about("Show the configured account categories"),
        )
}
