//! Rule-based field extractors for bank payment vouchers.
//!
//! Each rule owns one labeled region of the voucher and produces zero or one
//! value group. Rules are independent: adding or replacing one never touches
//! the others or the renderer.

pub mod account;
pub mod amount;
pub mod concept;
pub mod date;
pub mod patterns;
pub mod reference;

pub use account::{AccountRule, AccountOwner};
pub use amount::{AmountRule, Money};
pub use concept::{ConceptRule, Concept};
pub use date::DateRule;
pub use reference::ReferenceRule;

/// Trait for field extraction rules.
///
/// A rule uses the first occurrence of its label only; if a voucher repeats
/// a label, later occurrences are ignored.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Extract the field from voucher text, or `None` if the pattern is
    /// absent. A miss is never an error.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
