/// Classification of accounts (cash, credit card, investment,...) as
/// displayed in the GUI.  The set is loaded once at startup, either from
/// the built-in list or from a JSON configuration file, and is read-only
/// afterwards.
use crate::errors::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The category every account falls back to (Cash).
pub const DEFAULT_CATEGORY_TYPE: i32 = 1;

/// One entry of the category configuration file, an ordered JSON array
/// using the same camelCase keys as the original data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCategoryConfig {
    #[serde(rename = "type")]
    pub category_type: i32,
    pub display_order: i32,
    pub name: String,
    pub is_asset: bool,
    pub is_liability: bool,
    pub default_account_icon_id: String,
}

#[derive(Debug, Clone)]
pub struct AccountCategory {
    // Unique id, as referenced by account records
    pub category_type: i32,

    pub display_order: i32,

    // Display name
    pub name: String,

    // Exactly one of the two flags is expected to be set
    pub is_asset: bool,
    pub is_liability: bool,

    // Icon used for accounts of this category that have none of their own
    pub default_account_icon_id: String,
}

impl AccountCategory {
    pub fn new(
        category_type: i32,
        display_order: i32,
        name: &str,
        is_asset: bool,
        is_liability: bool,
        default_account_icon_id: &str,
    ) -> Self {
        AccountCategory {
            category_type,
            display_order,
            name: name.into(),
            is_asset,
            is_liability,
            default_account_icon_id: default_account_icon_id.into(),
        }
    }
}

impl From<AccountCategoryConfig> for AccountCategory {
    fn from(config: AccountCategoryConfig) -> Self {
        AccountCategory {
            category_type: config.category_type,
            display_order: config.display_order,
            name: config.name,
            is_asset: config.is_asset,
            is_liability: config.is_liability,
            default_account_icon_id: config.default_account_icon_id,
        }
    }
}

/// All registered categories, in registration order, with lookup by type.
/// Built once at startup; there is no mutation API afterwards.
#[derive(Debug)]
pub struct AccountCategoryCollection {
    categories: Vec<AccountCategory>,
    by_type: HashMap<i32, usize>,
}

impl AccountCategoryCollection {
    /// Build the collection from an ordered configuration list, failing
    /// on a duplicate type and when the default category is missing.
    pub fn from_configs(
        configs: Vec<AccountCategoryConfig>,
    ) -> Result<Self, Error> {
        let mut coll = AccountCategoryCollection {
            categories: Vec::with_capacity(configs.len()),
            by_type: HashMap::with_capacity(configs.len()),
        };
        for config in configs {
            coll.add(config.into())?;
        }
        if coll.value_of(DEFAULT_CATEGORY_TYPE).is_none() {
            return Err(Error::MissingDefaultCategory(DEFAULT_CATEGORY_TYPE));
        }
        Ok(coll)
    }

    /// Load the configuration from a JSON file.
    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let configs: Vec<AccountCategoryConfig> =
            serde_json::from_str(&content)?;
        let coll = Self::from_configs(configs)?;
        log::info!(
            "loaded {} account categories from {}",
            coll.categories.len(),
            path.display()
        );
        Ok(coll)
    }

    fn add(&mut self, category: AccountCategory) -> Result<(), Error> {
        if self.by_type.contains_key(&category.category_type) {
            return Err(Error::DuplicateCategoryType(category.category_type));
        }
        self.by_type
            .insert(category.category_type, self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    /// All categories, in registration order.
    pub fn values(&self) -> &[AccountCategory] {
        &self.categories
    }

    pub fn value_of(&self, category_type: i32) -> Option<&AccountCategory> {
        self.by_type
            .get(&category_type)
            .and_then(|idx| self.categories.get(*idx))
    }

    /// The designated fallback category (Cash).  Its presence is checked
    /// at construction.
    pub fn default_category(&self) -> &AccountCategory {
        self.value_of(DEFAULT_CATEGORY_TYPE)
            .expect("default category is validated at construction")
    }
}

impl Default for AccountCategoryCollection {
    fn default() -> Self {
        let builtin = vec![
            AccountCategory::new(1, 1, "Cash", true, false, "1"),
            AccountCategory::new(2, 2, "Checking Account", true, false, "100"),
            AccountCategory::new(3, 3, "Credit Card", false, true, "30"),
            AccountCategory::new(4, 4, "Virtual Account", true, false, "500"),
            AccountCategory::new(5, 5, "Debt Account", false, true, "32"),
            AccountCategory::new(6, 6, "Receivables", true, false, "300"),
            AccountCategory::new(
                7,
                7,
                "Investment Account",
                true,
                false,
                "400",
            ),
            AccountCategory::new(8, 8, "Savings Account", true, false, "105"),
            AccountCategory::new(
                9,
                9,
                "Certificate of Deposit",
                true,
                false,
                "110",
            ),
        ];
        let mut coll = AccountCategoryCollection {
            categories: Vec::with_capacity(builtin.len()),
            by_type: HashMap::with_capacity(builtin.len()),
        };
        for category in builtin {
            coll.add(category)
                .expect("builtin category types are unique");
        }
        coll
    }
}

#[cfg(test)]
mod test {
    use crate::account_categories::{
        AccountCategoryCollection, AccountCategoryConfig,
    };
    use crate::errors::Error;

    fn create_config(
        category_type: i32,
        name: &str,
        is_asset: bool,
    ) -> AccountCategoryConfig {
        AccountCategoryConfig {
            category_type,
            display_order: category_type,
            name: name.into(),
            is_asset,
            is_liability: !is_asset,
            default_account_icon_id: format!("{}", category_type * 10),
        }
    }

    #[test]
    fn test_builtin_set() {
        let coll = AccountCategoryCollection::default();
        assert_eq!(coll.values().len(), 9);
        assert_eq!(coll.value_of(3).unwrap().name, "Credit Card");
        assert!(coll.value_of(3).unwrap().is_liability);
        assert_eq!(coll.value_of(99).map(|c| c.category_type), None);
        assert_eq!(coll.default_category().name, "Cash");
    }

    #[test]
    fn test_lookup_and_order() {
        let coll = AccountCategoryCollection::from_configs(vec![
            create_config(5, "Debt Account", false),
            create_config(1, "Cash", true),
            create_config(3, "Credit Card", false),
        ])
        .unwrap();

        // Registration order is preserved
        let names: Vec<&str> =
            coll.values().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, &["Debt Account", "Cash", "Credit Card"]);

        // Every registered type resolves to its own instance
        for category in coll.values() {
            let found = coll.value_of(category.category_type).unwrap();
            assert_eq!(found.name, category.name);
        }

        // The default resolves to Cash even though it was not first
        assert_eq!(coll.default_category().category_type, 1);
        assert_eq!(coll.default_category().name, "Cash");
    }

    #[test]
    fn test_duplicate_type_fails() {
        let err = AccountCategoryCollection::from_configs(vec![
            create_config(1, "Cash", true),
            create_config(1, "Also Cash", true),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateCategoryType(1)));
    }

    #[test]
    fn test_missing_default_fails() {
        let err = AccountCategoryCollection::from_configs(vec![
            create_config(2, "Checking Account", true),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::MissingDefaultCategory(1)));
    }

    #[test]
    fn test_config_round_trip() {
        let json = r#"[{
            "type": 7,
            "displayOrder": 2,
            "name": "Investment Account",
            "isAsset": true,
            "isLiability": false,
            "defaultAccountIconId": "400"
        }, {
            "type": 1,
            "displayOrder": 1,
            "name": "Cash",
            "isAsset": true,
            "isLiability": false,
            "defaultAccountIconId": "1"
        }]"#;
        let configs: Vec<AccountCategoryConfig> =
            serde_json::from_str(json).unwrap();
        let coll = AccountCategoryCollection::from_configs(configs).unwrap();

        let invest = coll.value_of(7).unwrap();
        assert_eq!(invest.category_type, 7);
        assert_eq!(invest.display_order, 2);
        assert_eq!(invest.name, "Investment Account");
        assert!(invest.is_asset);
        assert!(!invest.is_liability);
        assert_eq!(invest.default_account_icon_id, "400");
    }
}
