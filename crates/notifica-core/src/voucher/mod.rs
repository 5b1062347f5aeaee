//! Voucher field extraction module.

mod parser;
pub mod rules;

pub use parser::{RuleBasedParser, VoucherParser, FALLBACK_FILIAL, FALLBACK_OWNER};
