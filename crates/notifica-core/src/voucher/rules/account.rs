//! Source account and owner name extraction.

use super::patterns::ACCOUNT_AND_NAME;
use super::FieldRule;

/// Account number and owner name, extracted together.
///
/// The bank prints both on the "Cuenta origen" line, so one rule captures
/// the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOwner {
    /// Alphanumeric account number.
    pub account: String,
    /// Owner name, cleaned: underscores replaced with spaces, title-cased.
    pub name: String,
}

/// Extracts account number and owner name from the "Cuenta origen" line.
pub struct AccountRule;

impl AccountRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for AccountRule {
    type Output = AccountOwner;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ACCOUNT_AND_NAME.captures(text).map(|caps| AccountOwner {
            account: caps[1].trim().to_string(),
            name: title_case(&caps[2].replace('_', " ")),
        })
    }
}

/// First letter of each word uppercased, the rest lowercased.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
