use crate::numerals::{Amount, HIDDEN_AMOUNT};
use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};

/// How to display negative values
#[derive(Clone, Copy, Default)]
pub enum Negative {
    #[default]
    MinusSign, // -123 USD
    Parenthesis,  // (123) USD
    SeparateSign, // -USD 123
}

/// How to display large numbers
#[derive(Clone, Copy)]
pub enum Separators {
    None,              // no special formatting    1234456.789
    Every3Digit(char), // char every 3 digits      1,234,456.789
}
impl Default for Separators {
    fn default() -> Self {
        Separators::Every3Digit(',')
    }
}

/// Where to place the currency code relative to the number
#[derive(Clone, Copy, Default)]
pub enum CurrencyPosition {
    #[default]
    After, // 123 USD
    Before, // USD 123
    Omit,   // 123
}

pub struct Formatter {
    pub negative: Negative,
    pub separators: Separators,
    pub comma: char,
    pub currency: CurrencyPosition,

    // Number of digits in the fractional part
    pub precision: u8,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            comma: '.',
            negative: Negative::default(),
            separators: Separators::default(),
            currency: CurrencyPosition::default(),
            precision: 2,
        }
    }
}

impl Formatter {
    /// Display the absolute value of value
    fn push_abs_num(&self, into: &mut String, value: Decimal) {
        let rounded = value.abs().round_dp_with_strategy(
            u32::from(self.precision),
            RoundingStrategy::MidpointTowardZero,
        );
        let image = rounded.to_string();
        let (int_part, frac_part) = match image.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (image.as_str(), ""),
        };

        match self.separators {
            Separators::None => into.push_str(int_part),
            Separators::Every3Digit(sep) => {
                let digits: Vec<char> = int_part.chars().collect();
                for (idx, p) in digits.iter().enumerate() {
                    if idx > 0 && (digits.len() - idx) % 3 == 0 {
                        into.push(sep);
                    }
                    into.push(*p);
                }
            }
        }

        if self.precision > 0 {
            into.push(self.comma);
            into.push_str(frac_part);
            for _ in frac_part.len()..self.precision as usize {
                into.push('0');
            }
        }
    }

    /// Display a signed number without the currency code.  Parenthesis
    /// style degrades to a minus sign here, since the parentheses belong
    /// around the full amount.
    fn push_signed_num(&self, into: &mut String, value: Decimal) {
        if value.is_sign_negative() {
            into.push('-');
        }
        self.push_abs_num(into, value);
    }

    pub fn push(&self, into: &mut String, value: Decimal, currency: &str) {
        match self.currency {
            CurrencyPosition::Omit => {
                if value.is_sign_negative() {
                    match self.negative {
                        Negative::MinusSign | Negative::SeparateSign => {
                            into.push('-');
                            self.push_abs_num(into, value);
                        }
                        Negative::Parenthesis => {
                            into.push('(');
                            self.push_abs_num(into, value);
                            into.push(')');
                        }
                    }
                } else {
                    self.push_abs_num(into, value);
                }
            }
            CurrencyPosition::Before => {
                if value.is_sign_negative() {
                    match self.negative {
                        Negative::SeparateSign => {
                            into.push('-');
                            into.push_str(currency);
                            into.push(' ');
                            self.push_abs_num(into, value);
                        }
                        Negative::MinusSign => {
                            into.push_str(currency);
                            into.push(' ');
                            into.push('-');
                            self.push_abs_num(into, value);
                        }
                        Negative::Parenthesis => {
                            into.push_str(currency);
                            into.push(' ');
                            into.push('(');
                            self.push_abs_num(into, value);
                            into.push(')');
                        }
                    }
                } else {
                    into.push_str(currency);
                    into.push(' ');
                    self.push_abs_num(into, value);
                }
            }
            CurrencyPosition::After => {
                if value.is_sign_negative() {
                    match self.negative {
                        Negative::SeparateSign | Negative::MinusSign => {
                            into.push('-');
                            self.push_abs_num(into, value);
                        }
                        Negative::Parenthesis => {
                            into.push('(');
                            self.push_abs_num(into, value);
                            into.push(')');
                        }
                    }
                } else {
                    self.push_abs_num(into, value);
                }
                into.push(' ');
                into.push_str(currency);
            }
        }
    }

    pub fn display(&self, value: Decimal, currency: &str) -> String {
        let mut buffer = String::new();
        self.push(&mut buffer, value, currency);
        buffer
    }

    /// Display a non-numeric value (the hidden placeholder, a suffixed
    /// number) with the currency code in its usual position.
    pub fn display_text(&self, text: &str, currency: &str) -> String {
        match self.currency {
            CurrencyPosition::Omit => text.to_string(),
            CurrencyPosition::Before => format!("{} {}", currency, text),
            CurrencyPosition::After => format!("{} {}", text, currency),
        }
    }

    /// Format any store-provided amount with its currency.
    pub fn display_amount(&self, amount: &Amount, currency: &str) -> String {
        match amount {
            Amount::Number(value) => self.display(*value, currency),
            Amount::Hidden => self.display_text(HIDDEN_AMOUNT, currency),
            Amount::WithSuffix { value, suffix } => {
                let mut num = String::new();
                self.push_signed_num(&mut num, *value);
                num.push_str(suffix);
                self.display_text(&num, currency)
            }
        }
    }

    /// Join several already-formatted amounts into one display string.
    pub fn join_multi_text(&self, texts: &[String]) -> String {
        texts.iter().join(", ")
    }
}
