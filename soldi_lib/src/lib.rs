pub mod account_categories;
pub mod account_list;
pub mod account_types;
pub mod accounts;
pub mod errors;
pub mod formatters;
pub mod multi_values;
pub mod numerals;
pub mod stores;
