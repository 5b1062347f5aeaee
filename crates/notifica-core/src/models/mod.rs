//! Data models for extracted voucher fields.

pub mod voucher;
