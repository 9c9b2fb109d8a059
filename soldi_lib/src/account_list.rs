//! View-model behind the account list page.  Every value is derived on
//! read from the stores, so a read after any store change observes
//! fresh state.  Absence of data is always a sentinel (None or an empty
//! string), never an error.

use crate::account_categories::AccountCategory;
use crate::account_types::AccountType;
use crate::accounts::{all_filtered_accounts_balance, Account};
use crate::formatters::Formatter;
use crate::multi_values::{MultiCurrencyValue, Value};
use crate::stores::{AccountStore, SettingsStore, UserStore};
use chrono::Weekday;

pub struct AccountListPage<'a> {
    accounts_store: &'a AccountStore,
    settings_store: &'a SettingsStore,
    user_store: &'a UserStore,
    format: Formatter,

    // Local UI state: whether hidden sub-accounts are shown
    pub show_hidden: bool,
}

impl<'a> AccountListPage<'a> {
    pub fn new(
        accounts_store: &'a AccountStore,
        settings_store: &'a SettingsStore,
        user_store: &'a UserStore,
        format: Formatter,
    ) -> Self {
        AccountListPage {
            accounts_store,
            settings_store,
            user_store,
            format,
            show_hidden: false,
        }
    }

    pub fn show_account_balance(&self) -> bool {
        self.settings_store.show_account_balance()
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.user_store.first_day_of_week
    }

    pub fn fiscal_year_start(&self) -> u16 {
        self.user_store.fiscal_year_start
    }

    pub fn default_currency(&self) -> &str {
        &self.user_store.default_currency
    }

    pub fn all_account_count(&self) -> usize {
        self.accounts_store.all_available_accounts_count()
    }

    pub fn net_assets(&self) -> String {
        let net = self
            .accounts_store
            .get_net_assets(self.show_account_balance());
        self.format.display_amount(&net, self.default_currency())
    }

    pub fn total_assets(&self) -> String {
        let total = self
            .accounts_store
            .get_total_assets(self.show_account_balance());
        self.format.display_amount(&total, self.default_currency())
    }

    pub fn total_liabilities(&self) -> String {
        let total = self
            .accounts_store
            .get_total_liabilities(self.show_account_balance());
        self.format.display_amount(&total, self.default_currency())
    }

    /// The store's pre-aggregated total for one category, formatted in
    /// the default currency.  Empty when no category is given.
    pub fn account_category_total_balance(
        &self,
        category: Option<&AccountCategory>,
    ) -> String {
        let Some(category) = category else {
            return String::new();
        };
        let total = self.accounts_store.get_account_category_total_balance(
            self.show_account_balance(),
            category.category_type,
        );
        self.format.display_amount(&total, self.default_currency())
    }

    /// Recompute one category's total per currency, directly from the
    /// account balances (bypassing the store's pre-aggregated value).
    /// Assets add, liabilities subtract; currencies whose net is exactly
    /// zero are omitted.  Empty when amounts are hidden or when nothing
    /// remains.
    pub fn account_category_original_total_balance(
        &self,
        category: Option<&AccountCategory>,
    ) -> String {
        let Some(category) = category else {
            return String::new();
        };
        if !self.show_account_balance() {
            return String::new();
        }

        let map = self.accounts_store.all_categorized_accounts_map();
        let entries = all_filtered_accounts_balance(
            self.accounts_store.categories(),
            &map,
            |account| account.category == category.category_type,
        );

        let mut total = MultiCurrencyValue::zero();
        for entry in &entries {
            let value = Value::new(entry.balance, &entry.currency);
            if entry.is_liability {
                total -= &value;
            } else {
                total += &value;
            }
        }
        total.display_non_zero(&self.format)
    }

    /// The display balance of one account.  None ("not applicable") for
    /// a record whose type code is unrecognized; an empty string when
    /// the store has no usable value for it.
    pub fn account_balance(
        &self,
        account: &Account,
        sub_account_id: Option<&str>,
    ) -> Option<String> {
        match AccountType::value_of(account.account_type) {
            Some(AccountType::SingleAccount) => {
                let balance = self.accounts_store.get_account_balance(
                    self.show_account_balance(),
                    account,
                );
                match balance {
                    None => Some(String::new()),
                    Some(balance) => Some(
                        self.format
                            .display_amount(&balance, &account.currency),
                    ),
                }
            }
            Some(AccountType::MultiSubAccounts) => {
                let result = self.accounts_store.get_account_sub_account_balance(
                    self.show_account_balance(),
                    self.show_hidden,
                    account,
                    sub_account_id,
                );
                match result {
                    None => Some(String::new()),
                    Some(result) => Some(
                        self.format
                            .display_amount(&result.balance, &result.currency),
                    ),
                }
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategoryCollection;
    use crate::account_list::AccountListPage;
    use crate::account_types::AccountType;
    use crate::accounts::Account;
    use crate::formatters::Formatter;
    use crate::stores::{AccountStore, SettingsStore, UserStore};
    use rust_decimal_macros::dec;

    fn single(
        id: &str,
        category: i32,
        currency: &str,
        balance: rust_decimal::Decimal,
    ) -> Account {
        Account::new(
            id,
            id,
            AccountType::SingleAccount.code(),
            category,
            currency,
            balance,
        )
    }

    fn create_store(accounts: Vec<Account>) -> AccountStore {
        AccountStore::new(
            AccountCategoryCollection::default(),
            accounts,
            "USD",
        )
    }

    #[test]
    fn test_totals() {
        let store = create_store(vec![
            single("wallet", 1, "USD", dec!(100)),
            single("card", 3, "USD", dec!(40)),
        ]);
        let settings = SettingsStore::default();
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        assert_eq!(page.all_account_count(), 2);
        assert_eq!(page.net_assets(), "60.00 USD");
        assert_eq!(page.total_assets(), "100.00 USD");
        assert_eq!(page.total_liabilities(), "40.00 USD");
        assert_eq!(page.default_currency(), "USD");
    }

    #[test]
    fn test_totals_hidden() {
        let store = create_store(vec![single("wallet", 1, "USD", dec!(100))]);
        let mut settings = SettingsStore::default();
        settings.set_show_account_balance(false);
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        assert!(!page.show_account_balance());
        assert_eq!(page.net_assets(), "*** USD");
        assert_eq!(page.total_assets(), "*** USD");
    }

    #[test]
    fn test_category_total_balance() {
        let store = create_store(vec![
            single("wallet", 1, "USD", dec!(100)),
            single("drawer", 1, "USD", dec!(20)),
        ]);
        let settings = SettingsStore::default();
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        // No category given
        assert_eq!(page.account_category_total_balance(None), "");

        let cash = store.categories().value_of(1);
        assert_eq!(page.account_category_total_balance(cash), "120.00 USD");
    }

    #[test]
    fn test_original_total_balance() {
        // Two asset accounts of the same category, in two currencies:
        // one formatted amount per currency, joined
        let store = create_store(vec![
            single("a", 1, "USD", dec!(100)),
            single("chf-in", 1, "CHF", dec!(30)),
        ]);
        let settings = SettingsStore::default();
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        let cash = store.categories().value_of(1);
        assert_eq!(
            page.account_category_original_total_balance(cash),
            "30.00 CHF, 100.00 USD"
        );
        assert_eq!(page.account_category_original_total_balance(None), "");
    }

    #[test]
    fn test_original_total_balance_nets_asset_and_liability() {
        // A (asset, 100 USD) and B (liability, 40 USD) share a category:
        // the per-currency net is 60 USD.  The CHF pair cancels out
        // exactly and its currency is omitted entirely.
        let store = create_store(vec![
            single("a", 1, "USD", dec!(100)).set_is_asset(true),
            single("b", 1, "USD", dec!(40)).set_is_liability(true),
            single("chf-in", 1, "CHF", dec!(30)).set_is_asset(true),
            single("chf-out", 1, "CHF", dec!(30)).set_is_liability(true),
        ]);
        let settings = SettingsStore::default();
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        let cash = store.categories().value_of(1);
        assert_eq!(
            page.account_category_original_total_balance(cash),
            "60.00 USD"
        );

        // A liability category subtracts through its own polarity too
        let store = create_store(vec![single("card", 3, "USD", dec!(40))]);
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());
        let cards = store.categories().value_of(3);
        assert_eq!(
            page.account_category_original_total_balance(cards),
            "-40.00 USD"
        );
    }

    #[test]
    fn test_original_total_balance_flag_off() {
        let store = create_store(vec![single("wallet", 1, "USD", dec!(100))]);
        let mut settings = SettingsStore::default();
        settings.set_show_account_balance(false);
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        // Matching accounts exist, but the flag wins
        let cash = store.categories().value_of(1);
        assert_eq!(page.account_category_original_total_balance(cash), "");
    }

    #[test]
    fn test_account_balance_dispatch() {
        let store = create_store(vec![]);
        let settings = SettingsStore::default();
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        // Single account
        let wallet = single("wallet", 1, "USD", dec!(123.45));
        assert_eq!(
            page.account_balance(&wallet, None),
            Some("123.45 USD".to_string())
        );

        // Multi-sub-account aggregate and per-sub-account
        let broker = Account::new(
            "b1",
            "Broker",
            AccountType::MultiSubAccounts.code(),
            7,
            "USD",
            dec!(0),
        )
        .add_sub_account(single("b1-cash", 7, "USD", dec!(500)))
        .add_sub_account(single("b1-eur", 7, "EUR", dec!(20)));
        assert_eq!(
            page.account_balance(&broker, None),
            Some("500.00+ USD".to_string())
        );
        assert_eq!(
            page.account_balance(&broker, Some("b1-eur")),
            Some("20.00 EUR".to_string())
        );

        // Multi-sub-account record with no usable data: computed but
        // empty, distinct from not applicable
        let empty = Account::new(
            "b2",
            "Empty",
            AccountType::MultiSubAccounts.code(),
            7,
            "USD",
            dec!(0),
        );
        assert_eq!(page.account_balance(&empty, None), Some(String::new()));

        // Unrecognized type code: not applicable
        let odd = Account::new("x", "Odd", 42, 1, "USD", dec!(1));
        assert_eq!(page.account_balance(&odd, None), None);
    }

    #[test]
    fn test_account_balance_hidden() {
        let store = create_store(vec![]);
        let mut settings = SettingsStore::default();
        settings.set_show_account_balance(false);
        let user = UserStore::default();
        let page =
            AccountListPage::new(&store, &settings, &user, Formatter::default());

        let wallet = single("wallet", 1, "USD", dec!(123.45));
        assert_eq!(
            page.account_balance(&wallet, None),
            Some("*** USD".to_string())
        );
    }
}
