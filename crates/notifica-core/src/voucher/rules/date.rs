//! Transaction date extraction.

use super::patterns::DATE;
use super::FieldRule;

/// Extracts the voucher date from the "Fecha" label.
///
/// The value is kept exactly as printed (`DD/MM/YYYY`); the notification
/// reproduces the voucher's own date string rather than reformatting it.
pub struct DateRule;

impl DateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for DateRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE.captures(text).map(|caps| caps[1].trim().to_string())
    }
}
