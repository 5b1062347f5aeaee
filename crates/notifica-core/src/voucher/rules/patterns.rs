//! Compiled regex patterns for voucher field extraction.
//!
//! Matching is case-sensitive except where noted; the voucher labels are
//! printed by the bank in a fixed casing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Fecha", variable spacing around the colon
    pub static ref DATE: Regex = Regex::new(
        r"Fecha\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Account number and owner name share one line. The name comes as
    // CAPS_WITH_UNDERSCORES. Some voucher layouts glue the account to the
    // label, others insert a space, hence \s*.
    pub static ref ACCOUNT_AND_NAME: Regex = Regex::new(
        r"Cuenta origen\s*([A-Z0-9]+)\s+([A-Z_]+)"
    ).unwrap();

    // Amount (digits, thousands commas, optional decimal point) followed by
    // a 3-letter currency code
    pub static ref AMOUNT_AND_CURRENCY: Regex = Regex::new(
        r"Monto\s*([\d,]+\.?\d*)\s+([A-Z]{3})"
    ).unwrap();

    // "Referencia" immediately followed by the digit run
    pub static ref REFERENCE: Regex = Regex::new(
        r"Referencia(\d+)"
    ).unwrap();

    // "Descripción" immediately followed by the rest of the line
    pub static ref CONCEPT: Regex = Regex::new(
        r"Descripción([^\n]+)"
    ).unwrap();

    // Filial number inside the concept text, case-insensitive
    pub static ref FILIAL: Regex = Regex::new(
        r"(?i)Filial\s+(\d+)"
    ).unwrap();
}
