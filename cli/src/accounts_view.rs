use itertools::Itertools;
use soldi_lib::account_list::AccountListPage;
use soldi_lib::stores::AccountStore;

/// Render the account list page: one section per category that has
/// accounts, followed by the overall totals.
pub fn accounts_view(store: &AccountStore, page: &AccountListPage) -> String {
    let mut output = String::new();
    let map = store.all_categorized_accounts_map();

    let categories = store
        .categories()
        .values()
        .iter()
        .sorted_by_key(|c| c.display_order);
    for category in categories {
        let Some(group) = map.get(&category.category_type) else {
            continue;
        };

        let total = page.account_category_total_balance(Some(category));
        output.push_str(&format!("{:<28} {:>20}\n", category.name, total));

        let original =
            page.account_category_original_total_balance(Some(category));
        if !original.is_empty() && original != total {
            output.push_str(&format!("{:<28} {:>20}\n", "", original));
        }

        for account in &group.accounts {
            let balance = page
                .account_balance(account, None)
                .unwrap_or_default();
            output.push_str(&format!(
                "  {:<26} {:>20}\n",
                account.name, balance
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "{:<28} {:>20}\n",
        format!("{} accounts", page.all_account_count()),
        ""
    ));
    output.push_str(&format!(
        "{:<28} {:>20}\n",
        "Total assets",
        page.total_assets()
    ));
    output.push_str(&format!(
        "{:<28} {:>20}\n",
        "Total liabilities",
        page.total_liabilities()
    ));
    output.push_str(&format!(
        "{:<28} {:>20}\n",
        "Net assets",
        page.net_assets()
    ));
    output
}
