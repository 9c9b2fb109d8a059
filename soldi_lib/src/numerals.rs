use rust_decimal::Decimal;

/// Placeholder displayed instead of a real balance when the user has
/// chosen not to show amounts.
pub const HIDDEN_AMOUNT: &str = "***";

/// An amount as handed out by the stores: either an actual number, the
/// hidden-amount placeholder, or a number carrying a display suffix
/// (totals that could not include every account are marked with "+").
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(Decimal),
    Hidden,
    WithSuffix { value: Decimal, suffix: String },
}

impl Amount {
    pub fn incomplete(value: Decimal) -> Self {
        Amount::WithSuffix {
            value,
            suffix: "+".into(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Amount::Hidden)
    }
}

#[cfg(test)]
mod test {
    use crate::numerals::Amount;
    use rust_decimal_macros::dec;

    #[test]
    fn test_incomplete() {
        let amount = Amount::incomplete(dec!(12.5));
        assert_eq!(
            amount,
            Amount::WithSuffix {
                value: dec!(12.5),
                suffix: "+".into()
            }
        );
        assert!(!amount.is_hidden());
        assert!(Amount::Hidden.is_hidden());
    }
}
