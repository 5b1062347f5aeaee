//! Voucher parser combining the per-field extraction rules.

use tracing::debug;

use crate::models::voucher::VoucherData;

use super::rules::{
    AccountRule, AmountRule, ConceptRule, DateRule, FieldRule, ReferenceRule,
};

/// Owner name used when the voucher carries no recognisable "Cuenta origen"
/// line.
pub const FALLBACK_OWNER: &str = "Giovanni Mora Castillo";

/// Filial number used when the concept does not mention one.
pub const FALLBACK_FILIAL: &str = "25";

/// Trait for voucher parsing.
pub trait VoucherParser {
    /// Parse voucher text into extracted fields. Infallible: unmatched
    /// patterns leave fields unset or defaulted, never error.
    fn parse(&self, text: &str) -> VoucherData;
}

/// Rule-based voucher parser.
///
/// Runs each field rule independently over the raw text, then applies the
/// owner and filial fallbacks so the renderer can rely on both being present.
pub struct RuleBasedParser {
    fallback_owner: String,
    fallback_filial: String,
}

impl RuleBasedParser {
    /// Create a parser with the standard fallbacks.
    pub fn new() -> Self {
        Self {
            fallback_owner: FALLBACK_OWNER.to_string(),
            fallback_filial: FALLBACK_FILIAL.to_string(),
        }
    }

    /// Override the owner name used when the voucher has none.
    pub fn with_fallback_owner(mut self, owner: impl Into<String>) -> Self {
        self.fallback_owner = owner.into();
        self
    }

    /// Override the filial number used when the concept mentions none.
    pub fn with_fallback_filial(mut self, filial: impl Into<String>) -> Self {
        self.fallback_filial = filial.into();
        self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VoucherParser for RuleBasedParser {
    fn parse(&self, text: &str) -> VoucherData {
        let mut data = VoucherData::default();

        // Account and name share one line, so one rule yields both
        if let Some(owner) = AccountRule::new().extract(text) {
            data.account = Some(owner.account);
            data.name = Some(owner.name);
        }

        if let Some(money) = AmountRule::new().extract(text) {
            data.amount = Some(money.amount);
            data.currency = Some(money.currency);
        }

        data.date = DateRule::new().extract(text);
        data.reference = ReferenceRule::new().extract(text);

        if let Some(concept) = ConceptRule::new().extract(text) {
            data.concept = Some(concept.concept);
            data.filial = concept.filial;
        }

        // Defaults: the notification always names an owner and a filial
        if data.name.is_none() {
            data.name = Some(self.fallback_owner.clone());
        }
        if data.filial.is_none() {
            data.filial = Some(self.fallback_filial.clone());
        }

        debug!(
            "parsed voucher ({} chars), fields: {:?}",
            text.len(),
            data.present_fields()
        );

        data
    }
}
