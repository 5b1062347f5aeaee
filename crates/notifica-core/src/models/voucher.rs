//! Extracted voucher data model.

use serde::Serialize;

/// Fields extracted from one bank payment voucher.
///
/// Every field is independently optional: a pattern that did not match leaves
/// its field `None`. Instances are built fresh per voucher by the parser and
/// are read-only input to the renderer afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoucherData {
    /// Transaction date as printed on the voucher, `DD/MM/YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Source account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Account owner name, title-cased with underscores replaced by spaces.
    /// The parser guarantees this is set, via its fallback owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount with thousands separators stripped. Kept as a string: the
    /// voucher value is reproduced verbatim, never parsed numerically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Transaction reference number (digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Free-text payment concept, cleaned of underscores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    /// Condominium unit (filial) number. The parser guarantees this is set,
    /// via its fallback filial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filial: Option<String>,
}

impl VoucherData {
    /// Names of the fields that were actually extracted (set to `Some`).
    pub fn present_fields(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.date.is_some() {
            present.push("date");
        }
        if self.account.is_some() {
            present.push("account");
        }
        if self.name.is_some() {
            present.push("name");
        }
        if self.amount.is_some() {
            present.push("amount");
        }
        if self.currency.is_some() {
            present.push("currency");
        }
        if self.reference.is_some() {
            present.push("reference");
        }
        if self.concept.is_some() {
            present.push("concept");
        }
        if self.filial.is_some() {
            present.push("filial");
        }
        present
    }
}
