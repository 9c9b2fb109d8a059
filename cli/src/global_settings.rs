use clap::{arg, Arg, ArgMatches};
use std::path::PathBuf;

pub struct GlobalSettings {
    // JSON files to load; the category set falls back to the built-in
    // one when no file is given.
    pub categories_path: Option<PathBuf>,
    pub accounts_path: Option<PathBuf>,

    pub default_currency: String,
    pub show_account_balance: bool,

    // How to display numbers
    pub format: soldi_lib::formatters::Formatter,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--categories [FILE] "Load account categories from this JSON file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
            arg!(--accounts [FILE] "Load accounts from this JSON file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
            arg!(--currency [CURRENCY] "Show totals in this currency")
                .default_value("USD")
                .global(true),
            arg!(--"hide-balance" "Replace all balances with a placeholder")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            categories_path: args.get_one::<PathBuf>("categories").cloned(),
            accounts_path: args.get_one::<PathBuf>("accounts").cloned(),
            default_currency: args
                .get_one::<String>("currency")
                .cloned()
                .unwrap_or_else(|| "USD".to_string()),
            show_account_balance: !args.get_flag("hide-balance"),
            format: soldi_lib::formatters::Formatter::default(),
        }
    }
}
