mod accounts_view;
mod args;
mod categories_view;
mod global_settings;

use crate::global_settings::GlobalSettings;
use anyhow::Result;
use soldi_lib::account_categories::AccountCategoryCollection;
use soldi_lib::account_list::AccountListPage;
use soldi_lib::accounts::load_accounts;
use soldi_lib::stores::{AccountStore, SettingsStore, UserStore};

fn main() -> Result<()> {
    env_logger::init();

    let matches = args::build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);

    let categories = match &settings.categories_path {
        Some(path) => AccountCategoryCollection::from_config_file(path)?,
        None => AccountCategoryCollection::default(),
    };

    match matches.subcommand() {
        Some(("categories", _)) => {
            print!("{}", categories_view::categories_view(&categories));
        }
        Some(("accounts", _)) => {
            let accounts = match &settings.accounts_path {
                Some(path) => load_accounts(path)?,
                None => {
                    log::warn!("no accounts file given, starting empty");
                    Vec::new()
                }
            };
            let store = AccountStore::new(
                categories,
                accounts,
                &settings.default_currency,
            );
            let mut settings_store = SettingsStore::default();
            settings_store
                .set_show_account_balance(settings.show_account_balance);
            let user_store = UserStore {
                default_currency: settings.default_currency.clone(),
                ..UserStore::default()
            };
            let page = AccountListPage::new(
                &store,
                &settings_store,
                &user_store,
                settings.format,
            );
            print!("{}", accounts_view::accounts_view(&store, &page));
        }
        Some((command, _)) => {
            anyhow::bail!("unknown command {}", command);
        }
        None => {}
    }

    Ok(())
}
