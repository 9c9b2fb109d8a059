use soldi_lib::account_categories::AccountCategoryCollection;

/// Render the registered categories, in display order.
pub fn categories_view(categories: &AccountCategoryCollection) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:>5} {:>5} {:<26} {:<10} {:<6}\n",
        "Type", "Order", "Name", "Polarity", "Icon"
    ));
    for category in categories.values() {
        let polarity = if category.is_asset {
            "asset"
        } else if category.is_liability {
            "liability"
        } else {
            "-"
        };
        output.push_str(&format!(
            "{:>5} {:>5} {:<26} {:<10} {:<6}\n",
            category.category_type,
            category.display_order,
            category.name,
            polarity,
            category.default_account_icon_id
        ));
    }
    output
}
