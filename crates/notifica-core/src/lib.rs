//! Core library for voucher-to-notification processing.
//!
//! This crate provides:
//! - Rule-based field extraction from bank payment voucher text
//!   (date, account, owner name, amount, currency, reference, concept, filial)
//! - Rendering of the fixed condominium payment notification document
//!
//! Extraction never fails: vouchers come in variable formats, so a pattern
//! that does not match simply leaves its field unset and the renderer
//! substitutes a placeholder or default.

pub mod error;
pub mod models;
pub mod notification;
pub mod voucher;

pub use error::{NotificaError, Result};
pub use models::voucher::VoucherData;
pub use notification::NotificationRenderer;
pub use voucher::{RuleBasedParser, VoucherParser};

/// Parse voucher text and render the notification document in one call.
///
/// Short-circuits on blank input; every other input produces a document.
pub fn generate_notification(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(NotificaError::EmptyInput);
    }

    let data = RuleBasedParser::new().parse(text);
    Ok(NotificationRenderer::new().render(&data))
}
