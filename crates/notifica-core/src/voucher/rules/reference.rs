//! Reference number extraction.

use super::patterns::REFERENCE;
use super::FieldRule;

/// Extracts the transaction reference number.
///
/// The bank prints the digits glued to the "Referencia" label, with no
/// separator.
pub struct ReferenceRule;

impl ReferenceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for ReferenceRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        REFERENCE.captures(text).map(|caps| caps[1].to_string())
    }
}
