//! Error types for the notifica-core library.

use thiserror::Error;

/// Main error type for the notifica library.
///
/// Field extraction itself is infallible; a missed pattern is a defaulted
/// field, not an error. The only failure the core recognises is being asked
/// to process no input at all.
#[derive(Error, Debug)]
pub enum NotificaError {
    /// No voucher text was supplied.
    #[error("no voucher text supplied")]
    EmptyInput,
}

/// Result type for the notifica library.
pub type Result<T> = std::result::Result<T, NotificaError>;
