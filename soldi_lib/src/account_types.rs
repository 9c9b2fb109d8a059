/// Whether an account holds one balance of its own, or is a container
/// aggregating the balances of its sub-accounts.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AccountType {
    SingleAccount = 1,
    MultiSubAccounts = 2,
}

impl AccountType {
    /// All types, in declaration order.
    pub fn values() -> &'static [AccountType] {
        &[AccountType::SingleAccount, AccountType::MultiSubAccounts]
    }

    /// Map the raw code found in external account records.  Returns None
    /// for codes this version does not know about.
    pub fn value_of(code: u8) -> Option<AccountType> {
        match code {
            1 => Some(AccountType::SingleAccount),
            2 => Some(AccountType::MultiSubAccounts),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountType::SingleAccount => "Single Account",
            AccountType::MultiSubAccounts => "Multiple Sub-accounts",
        }
    }
}
