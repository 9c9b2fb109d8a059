use crate::formatters::Formatter;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// An amount in one specific currency
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub value: Decimal,
    pub currency: String,
}

impl Value {
    pub fn new(value: Decimal, currency: &str) -> Self {
        Value {
            value,
            currency: currency.into(),
        }
    }
}

/// An amount broken down per currency, with no conversion applied.
/// Currencies are kept sorted so that display output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiCurrencyValue {
    values: BTreeMap<String, Decimal>,
}

impl MultiCurrencyValue {
    pub fn zero() -> Self {
        MultiCurrencyValue::default()
    }

    pub fn from_value(value: Value) -> Self {
        let mut result = MultiCurrencyValue::default();
        result += &value;
        result
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_zero())
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.values.iter().map(|(c, v)| Value {
            value: *v,
            currency: c.clone(),
        })
    }

    /// Format every currency whose net amount is not exactly zero, and
    /// join them into one display string.  Returns an empty string when
    /// nothing remains.
    pub fn display_non_zero(&self, format: &Formatter) -> String {
        let texts: Vec<String> = self
            .values
            .iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(c, v)| format.display(*v, c))
            .collect();
        format.join_multi_text(&texts)
    }
}

impl core::ops::AddAssign<&Value> for MultiCurrencyValue {
    fn add_assign(&mut self, rhs: &Value) {
        self.values
            .entry(rhs.currency.clone())
            .and_modify(|v| *v += rhs.value)
            .or_insert(rhs.value);
    }
}

impl core::ops::SubAssign<&Value> for MultiCurrencyValue {
    fn sub_assign(&mut self, rhs: &Value) {
        self.values
            .entry(rhs.currency.clone())
            .and_modify(|v| *v -= rhs.value)
            .or_insert(-rhs.value);
    }
}

impl core::ops::AddAssign<&MultiCurrencyValue> for MultiCurrencyValue {
    fn add_assign(&mut self, rhs: &MultiCurrencyValue) {
        for (c, value) in &rhs.values {
            self.values
                .entry(c.clone())
                .and_modify(|v| *v += *value)
                .or_insert(*value);
        }
    }
}
