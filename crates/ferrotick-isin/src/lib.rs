//! # Ferrotick ISIN
//!
//! Parsing and validation of International Securities Identification Numbers.
//!
//! ## Overview
//!
//! An ISIN is 12 alphanumeric characters:
//!
//! - a 2-letter **country code** (ISO 3166-1 alpha-2),
//! - a 9-character **NSIN** (national securities identifying number),
//! - a single decimal **check digit** (Luhn over the alphanumeric payload).
//!
//! Raw input is sanitized first: every character that is not an ASCII letter
//! or digit is removed and the rest is upper-cased. Registry lookups (whether
//! a security actually exists) are out of scope.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checksum`] | Luhn check digit over letters and digits |
//! | [`domain`] | [`Isin`] and [`CountryCode`] value types |
//! | [`error`] | Error types |
//! | [`policy`] | Serde-loadable country policy |
//! | [`rules`] | [`Rule`] trait and built-in country rules |
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrotick_isin::{Isin, IsinError};
//!
//! let isin = Isin::parse("us 0378331005")?;
//! assert_eq!(isin.country_code().as_str(), "US");
//! assert_eq!(isin.nsin(), "037833100");
//! assert_eq!(isin.check_digit(), 5);
//! assert_eq!(isin.to_string(), "US0378331005");
//! # Ok::<(), IsinError>(())
//! ```
//!
//! ## Additional Rules
//!
//! Rules run in order after length and check digit verification; the first
//! failure is returned unchanged inside [`IsinError::Rule`].
//!
//! ```rust
//! use ferrotick_isin::{parse, CountryAllowList, CountryCode, PolicyError};
//!
//! let allow = CountryAllowList::new([CountryCode::parse("DE").unwrap()]);
//! let err = parse("GB0002634946", &[&allow]).unwrap_err();
//! assert!(matches!(
//!     err.downcast_rule::<PolicyError>(),
//!     Some(PolicyError::CountryNotAllowed { .. })
//! ));
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use ferrotick_isin::{Isin, IsinError};
//!
//! match Isin::parse("US0378331006") {
//!     Err(IsinError::CheckDigit(err)) if !err.is_format_error() => {
//!         // `computed` is the digit the payload actually checksums to.
//!         assert_eq!(err.computed, 5);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

pub mod checksum;
pub mod domain;
pub mod error;
mod parser;
pub mod policy;
pub mod rules;
mod sanitize;

/// Length of a sanitized ISIN.
pub const ISIN_LEN: usize = 12;

pub use checksum::check_digit;
pub use domain::{CountryCode, Isin};
pub use error::{CheckDigitError, IsinError, PolicyError, RuleError, ValidationError};
pub use parser::parse;
pub use policy::{ConfigError, IsinPolicy};
pub use rules::{CountryAllowList, CountryDenyList, Rule};
pub use sanitize::sanitize;
