//! # Domain Models
//!
//! Value types produced by the ISIN parse pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Isin`] | Validated 12-character ISIN |
//! | [`CountryCode`] | Two-character ISO 3166-1 alpha-2 prefix |
//!
//! Both types are immutable. An [`Isin`] can only be obtained from
//! [`crate::parse`] (or one of its shorthands), so holding one means the
//! length and check digit have already been verified.

mod country;
mod isin;

pub use country::CountryCode;
pub use isin::Isin;
