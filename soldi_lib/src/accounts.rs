use crate::account_categories::AccountCategoryCollection;
use crate::account_types::AccountType;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// An account as supplied by external data files.  The type is kept as
/// the raw code so that records written by a newer version (with types
/// this code does not know about) can still be carried around.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    // Short name as displayed to users
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: u8,

    // The AccountCategory type id
    pub category: i32,

    pub currency: String,
    pub balance: Decimal,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub display_order: i32,

    // Per-account polarity, as supplied by the data source.  When
    // neither flag is set, the category's polarity applies.
    #[serde(default)]
    pub is_asset: bool,
    #[serde(default)]
    pub is_liability: bool,

    // Only populated for multi-sub-account records
    #[serde(default)]
    pub sub_accounts: Vec<Account>,
}

impl Account {
    pub fn new(
        id: &str,
        name: &str,
        account_type: u8,
        category: i32,
        currency: &str,
        balance: Decimal,
    ) -> Self {
        Account {
            id: id.into(),
            name: name.into(),
            account_type,
            category,
            currency: currency.into(),
            balance,
            hidden: false,
            display_order: 0,
            is_asset: false,
            is_liability: false,
            sub_accounts: Vec::new(),
        }
    }

    pub fn set_is_asset(mut self, is_asset: bool) -> Self {
        self.is_asset = is_asset;
        self
    }

    pub fn set_is_liability(mut self, is_liability: bool) -> Self {
        self.is_liability = is_liability;
        self
    }

    pub fn set_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn set_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn add_sub_account(mut self, sub: Account) -> Self {
        self.sub_accounts.push(sub);
        self
    }
}

/// The visible accounts of one category, as shown on the account list
/// page.
#[derive(Debug, Clone)]
pub struct CategorizedAccount {
    pub category: i32,
    pub name: String,
    pub icon_id: String,
    pub accounts: Vec<Account>,
}

/// The contribution of one account (or sub-account) to a total, along
/// with the polarity of its category.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub balance: Decimal,
    pub currency: String,
    pub is_asset: bool,
    pub is_liability: bool,
}

/// Flatten the categorized accounts map into one balance entry per
/// balance-holding account.  Multi-sub-account records contribute one
/// entry per visible sub-account; records with an unknown type code
/// contribute nothing.
pub fn all_filtered_accounts_balance<F>(
    categories: &AccountCategoryCollection,
    map: &HashMap<i32, CategorizedAccount>,
    filter: F,
) -> Vec<AccountBalance>
where
    F: Fn(&Account) -> bool,
{
    // An account's own polarity flags win over its category's
    let polarity = |account: &Account, category: i32| {
        if account.is_asset || account.is_liability {
            (account.is_asset, account.is_liability)
        } else {
            categories
                .value_of(category)
                .map(|c| (c.is_asset, c.is_liability))
                .unwrap_or((false, false))
        }
    };

    let mut result = Vec::new();
    for group in map.values() {
        for account in &group.accounts {
            if !filter(account) {
                continue;
            }
            match AccountType::value_of(account.account_type) {
                Some(AccountType::SingleAccount) => {
                    let (is_asset, is_liability) =
                        polarity(account, group.category);
                    result.push(AccountBalance {
                        balance: account.balance,
                        currency: account.currency.clone(),
                        is_asset,
                        is_liability,
                    });
                }
                Some(AccountType::MultiSubAccounts) => {
                    for sub in &account.sub_accounts {
                        if sub.hidden {
                            continue;
                        }
                        let (is_asset, is_liability) =
                            polarity(sub, group.category);
                        result.push(AccountBalance {
                            balance: sub.balance,
                            currency: sub.currency.clone(),
                            is_asset,
                            is_liability,
                        });
                    }
                }
                None => {}
            }
        }
    }
    result
}

/// Load accounts from a JSON file (an array of account records).
pub fn load_accounts(path: &Path) -> anyhow::Result<Vec<Account>> {
    let content = std::fs::read_to_string(path)?;
    let accounts: Vec<Account> = serde_json::from_str(&content)?;
    log::info!("loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}
