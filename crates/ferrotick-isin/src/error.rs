use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::domain::CountryCode;
use crate::ISIN_LEN;

/// Error returned by a caller-supplied [`Rule`](crate::Rule).
pub type RuleError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure of the ISIN parse pipeline.
#[derive(Debug, Error)]
pub enum IsinError {
    /// Sanitized input is not exactly [`ISIN_LEN`] characters long.
    #[error("expected {max} alphanumeric chars, got {0}", max = ISIN_LEN)]
    Length(usize),

    #[error(transparent)]
    CheckDigit(#[from] CheckDigitError),

    /// First failing additional rule. The rule's error is kept untouched.
    #[error(transparent)]
    Rule(RuleError),
}

impl IsinError {
    pub fn rule(error: impl Into<RuleError>) -> Self {
        Self::Rule(error.into())
    }

    /// Observed sanitized length for [`IsinError::Length`].
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Length(len) => Some(*len),
            _ => None,
        }
    }

    pub fn check_digit_error(&self) -> Option<&CheckDigitError> {
        match self {
            Self::CheckDigit(error) => Some(error),
            _ => None,
        }
    }

    pub fn rule_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Rule(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    /// Recover the concrete error a rule returned.
    pub fn downcast_rule<T: StdError + 'static>(&self) -> Option<&T> {
        self.rule_error().and_then(|error| error.downcast_ref::<T>())
    }
}

/// Check digit of the input could not be verified.
///
/// `given == -1` (with `computed == -1`) means the last character was not a
/// decimal digit at all. Absent and wrong check digits deliberately share this
/// shape so callers match a single error kind. Otherwise both fields are
/// digits `0..=9` and differ.
///
/// The format case only carries the sentinel, so its message does not name
/// the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigitError {
    pub given: i8,
    pub computed: i8,
}

impl CheckDigitError {
    pub const NOT_A_DIGIT: i8 = -1;

    pub(crate) fn not_a_digit() -> Self {
        Self {
            given: Self::NOT_A_DIGIT,
            computed: Self::NOT_A_DIGIT,
        }
    }

    pub(crate) fn mismatch(given: u8, computed: u8) -> Self {
        Self {
            given: given as i8,
            computed: computed as i8,
        }
    }

    /// True when the trailing character was not a digit.
    pub fn is_format_error(&self) -> bool {
        !(0..=9).contains(&self.given)
    }
}

impl Display for CheckDigitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_format_error() {
            return f.write_str("expected digit as last char");
        }
        // A mismatch usually comes from a typo inside the NSIN, so the digits
        // themselves are not shown.
        f.write_str("wrong check digit")
    }
}

impl StdError for CheckDigitError {}

/// Invalid standalone value object input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("country code must be 2 ASCII letters: '{value}'")]
    InvalidCountryCode { value: String },
    #[error("country code must be 2 ASCII alphanumeric chars: '{value}'")]
    MalformedCountryCode { value: String },
}

/// Rejections raised by the built-in rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("country '{country}' is not in the allow-list")]
    CountryNotAllowed { country: CountryCode },
    #[error("country '{country}' is denied")]
    CountryDenied { country: CountryCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_error_reports_observed_length() {
        let err = IsinError::Length(3);
        assert_eq!(err.to_string(), "expected 12 alphanumeric chars, got 3");
        assert_eq!(err.length(), Some(3));
        assert!(err.check_digit_error().is_none());
    }

    #[test]
    fn check_digit_error_text_depends_on_sentinel() {
        let format = IsinError::from(CheckDigitError::not_a_digit());
        assert_eq!(format.to_string(), "expected digit as last char");

        let mismatch = CheckDigitError::mismatch(6, 5);
        assert!(!mismatch.is_format_error());
        assert_eq!(mismatch.to_string(), "wrong check digit");
        assert!(!mismatch.to_string().contains('6'));
    }

    #[test]
    fn rule_error_is_recoverable_by_type() {
        let country = CountryCode::parse("US").expect("valid country");
        let err = IsinError::rule(PolicyError::CountryDenied { country });
        assert_eq!(err.to_string(), "country 'US' is denied");
        assert!(matches!(
            err.downcast_rule::<PolicyError>(),
            Some(PolicyError::CountryDenied { .. })
        ));
        assert!(err.downcast_rule::<CheckDigitError>().is_none());
    }

    #[test]
    fn rule_error_is_reported_once_in_the_chain() {
        let err = IsinError::rule("no");
        assert_eq!(err.to_string(), "no");
        assert!(err.source().is_none());
    }
}
