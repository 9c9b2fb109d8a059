/// In-process stores the account list page reads from.  The account
/// store owns the data; the page layer never writes through it, so a
/// read after any mutation simply derives fresh values.
use crate::account_categories::AccountCategoryCollection;
use crate::account_types::AccountType;
use crate::accounts::{
    all_filtered_accounts_balance, Account, AccountBalance,
    CategorizedAccount,
};
use crate::numerals::Amount;
use chrono::Weekday;
use itertools::Itertools;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The aggregated balance of a multi-sub-account record (or of one of
/// its sub-accounts).
#[derive(Debug, Clone, PartialEq)]
pub struct SubAccountBalance {
    pub balance: Amount,
    pub currency: String,
}

pub struct AccountStore {
    categories: AccountCategoryCollection,
    accounts: Vec<Account>,

    // Totals are expressed in this currency; balances held in any other
    // currency cannot be folded in (no conversion here) and mark the
    // total as incomplete.
    default_currency: String,
}

impl AccountStore {
    pub fn new(
        categories: AccountCategoryCollection,
        accounts: Vec<Account>,
        default_currency: &str,
    ) -> Self {
        AccountStore {
            categories,
            accounts,
            default_currency: default_currency.into(),
        }
    }

    pub fn categories(&self) -> &AccountCategoryCollection {
        &self.categories
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of top-level accounts not hidden by the user.
    pub fn all_available_accounts_count(&self) -> usize {
        self.accounts.iter().filter(|a| !a.hidden).count()
    }

    /// Group the visible accounts per category, ordered by display
    /// order within each group.  Accounts of an unregistered category
    /// are grouped under their own id but displayed with the default
    /// category's metadata.
    pub fn all_categorized_accounts_map(
        &self,
    ) -> HashMap<i32, CategorizedAccount> {
        let mut map: HashMap<i32, CategorizedAccount> = HashMap::new();
        for account in self.accounts.iter().filter(|a| !a.hidden) {
            let group = map.entry(account.category).or_insert_with(|| {
                let meta = self
                    .categories
                    .value_of(account.category)
                    .unwrap_or_else(|| self.categories.default_category());
                CategorizedAccount {
                    category: account.category,
                    name: meta.name.clone(),
                    icon_id: meta.default_account_icon_id.clone(),
                    accounts: Vec::new(),
                }
            });
            group.accounts.push(account.clone());
        }
        for group in map.values_mut() {
            group.accounts =
                std::mem::take(&mut group.accounts)
                    .into_iter()
                    .sorted_by_key(|a| a.display_order)
                    .collect();
        }
        map
    }

    fn balance_entries(&self) -> Vec<AccountBalance> {
        let map = self.all_categorized_accounts_map();
        all_filtered_accounts_balance(&self.categories, &map, |_| true)
    }

    /// Sum the kept entries in the default currency.  The result is
    /// marked incomplete when kept balances in other currencies exist.
    fn sum_entries<F, S>(&self, keep: F, sign: S) -> Amount
    where
        F: Fn(&AccountBalance) -> bool,
        S: Fn(&AccountBalance) -> Decimal,
    {
        let mut total = Decimal::ZERO;
        let mut incomplete = false;
        for entry in &self.balance_entries() {
            if !keep(entry) {
                continue;
            }
            if entry.currency == self.default_currency {
                total += sign(entry) * entry.balance;
            } else {
                incomplete = true;
            }
        }
        if incomplete {
            Amount::incomplete(total)
        } else {
            Amount::Number(total)
        }
    }

    /// Total assets minus total liabilities, in the default currency.
    pub fn get_net_assets(&self, show_account_balance: bool) -> Amount {
        if !show_account_balance {
            return Amount::Hidden;
        }
        self.sum_entries(
            |e| e.is_asset || e.is_liability,
            |e| {
                if e.is_liability {
                    -Decimal::ONE
                } else {
                    Decimal::ONE
                }
            },
        )
    }

    pub fn get_total_assets(&self, show_account_balance: bool) -> Amount {
        if !show_account_balance {
            return Amount::Hidden;
        }
        self.sum_entries(|e| e.is_asset, |_| Decimal::ONE)
    }

    pub fn get_total_liabilities(
        &self,
        show_account_balance: bool,
    ) -> Amount {
        if !show_account_balance {
            return Amount::Hidden;
        }
        self.sum_entries(|e| e.is_liability, |_| Decimal::ONE)
    }

    /// The pre-aggregated total of one category, as displayed next to
    /// the category header.  Liability balances are reported positive
    /// here (the amount owed).
    pub fn get_account_category_total_balance(
        &self,
        show_account_balance: bool,
        category_type: i32,
    ) -> Amount {
        if !show_account_balance {
            return Amount::Hidden;
        }
        let map = self.all_categorized_accounts_map();
        let entries =
            all_filtered_accounts_balance(&self.categories, &map, |a| {
                a.category == category_type
            });
        let mut total = Decimal::ZERO;
        let mut incomplete = false;
        for entry in &entries {
            if entry.currency == self.default_currency {
                total += entry.balance;
            } else {
                incomplete = true;
            }
        }
        if incomplete {
            Amount::incomplete(total)
        } else {
            Amount::Number(total)
        }
    }

    /// The balance of a single account.  Not applicable (None) for any
    /// other kind of record.
    pub fn get_account_balance(
        &self,
        show_account_balance: bool,
        account: &Account,
    ) -> Option<Amount> {
        match AccountType::value_of(account.account_type) {
            Some(AccountType::SingleAccount) => {
                if show_account_balance {
                    Some(Amount::Number(account.balance))
                } else {
                    Some(Amount::Hidden)
                }
            }
            Some(AccountType::MultiSubAccounts) | None => None,
        }
    }

    /// The balance of one sub-account (when an id is given), or the
    /// aggregate over the account's sub-accounts.  None when the record
    /// is not a multi-sub-account one, or when there is no usable
    /// sub-account data.
    pub fn get_account_sub_account_balance(
        &self,
        show_account_balance: bool,
        show_hidden: bool,
        account: &Account,
        sub_account_id: Option<&str>,
    ) -> Option<SubAccountBalance> {
        match AccountType::value_of(account.account_type) {
            Some(AccountType::MultiSubAccounts) => {}
            Some(AccountType::SingleAccount) | None => return None,
        }

        if let Some(id) = sub_account_id {
            let sub = account
                .sub_accounts
                .iter()
                .find(|s| s.id == id && (show_hidden || !s.hidden))?;
            let balance = if show_account_balance {
                Amount::Number(sub.balance)
            } else {
                Amount::Hidden
            };
            return Some(SubAccountBalance {
                balance,
                currency: sub.currency.clone(),
            });
        }

        let visible: Vec<&Account> = account
            .sub_accounts
            .iter()
            .filter(|s| show_hidden || !s.hidden)
            .collect();
        if visible.is_empty() {
            return None;
        }
        if !show_account_balance {
            return Some(SubAccountBalance {
                balance: Amount::Hidden,
                currency: account.currency.clone(),
            });
        }

        let mut total = Decimal::ZERO;
        let mut incomplete = false;
        for sub in visible {
            if sub.currency == account.currency {
                total += sub.balance;
            } else {
                incomplete = true;
            }
        }
        let balance = if incomplete {
            Amount::incomplete(total)
        } else {
            Amount::Number(total)
        };
        Some(SubAccountBalance {
            balance,
            currency: account.currency.clone(),
        })
    }
}

/// Application settings relevant to this layer.
pub struct SettingsStore {
    show_account_balance: bool,
}

impl Default for SettingsStore {
    fn default() -> Self {
        SettingsStore {
            show_account_balance: true,
        }
    }
}

impl SettingsStore {
    pub fn show_account_balance(&self) -> bool {
        self.show_account_balance
    }

    pub fn set_show_account_balance(&mut self, show: bool) {
        self.show_account_balance = show;
    }
}

/// Read-only user profile values consumed by the page.
pub struct UserStore {
    pub first_day_of_week: Weekday,

    // Month in the high byte, day in the low byte (0x0101 = January 1st)
    pub fiscal_year_start: u16,

    pub default_currency: String,
}

impl Default for UserStore {
    fn default() -> Self {
        UserStore {
            first_day_of_week: Weekday::Mon,
            fiscal_year_start: 0x0101,
            default_currency: "USD".into(),
        }
    }
}
