//! Amount and currency extraction.

use super::patterns::AMOUNT_AND_CURRENCY;
use super::FieldRule;

/// Amount and currency code, extracted together from the "Monto" label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    /// Amount with thousands commas stripped, e.g. `50000.00`. Stored as a
    /// string: the notification reproduces the voucher value verbatim and no
    /// arithmetic is ever performed on it.
    pub amount: String,
    /// Three-letter currency code, e.g. `CRC`.
    pub currency: String,
}

/// Extracts the paid amount and its currency code.
pub struct AmountRule;

impl AmountRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for AmountRule {
    type Output = Money;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        AMOUNT_AND_CURRENCY.captures(text).map(|caps| Money {
            amount: caps[1].trim().replace(',', ""),
            currency: caps[2].trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_amount_with_thousands_separator() {
        let rule = AmountRule::new();
        let money = rule.extract("Monto 1,234.56 USD").unwrap();

        assert_eq!(money.amount, "1234.56");
        assert_eq!(money.currency, "USD");
    }

    #[test]
    fn test_extract_whole_amount() {
        let rule = AmountRule::new();
        let money = rule.extract("Monto 50,000 CRC").unwrap();

        assert_eq!(money.amount, "50000");
        assert_eq!(money.currency, "CRC");
    }

    #[test]
    fn test_currency_must_be_three_letters() {
        let rule = AmountRule::new();
        assert_eq!(rule.extract("Monto 100.00 colones"), None);
    }

    #[test]
    fn test_missing_label() {
        let rule = AmountRule::new();
        assert_eq!(rule.extract("1,234.56 USD"), None);
    }
}
