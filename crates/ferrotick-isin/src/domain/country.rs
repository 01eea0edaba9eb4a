use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// ISO 3166-1 alpha-2 prefix of an ISIN (uppercase).
///
/// A prefix read from a parsed ISIN is any two uppercase ASCII alphanumerics,
/// since the parser only verifies length and check digit. [`CountryCode::parse`]
/// is stricter and requires two letters, for building allow/deny lists.
/// `TryFrom` and deserialization accept everything the parser can produce, so
/// a serialized code always reads back. The code is not checked against the
/// list of assigned countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a standalone country code, e.g. for allow-lists.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let is_valid =
            normalized.len() == 2 && normalized.chars().all(|ch| ch.is_ascii_alphabetic());

        if !is_valid {
            return Err(ValidationError::InvalidCountryCode {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    /// Accept any two ASCII alphanumerics, the shape of an ISIN prefix.
    fn from_prefix(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let is_valid =
            normalized.len() == 2 && normalized.chars().all(|ch| ch.is_ascii_alphanumeric());

        if !is_valid {
            return Err(ValidationError::MalformedCountryCode {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    /// Prefix taken from an already sanitized ISIN candidate.
    pub(crate) fn from_sanitized(prefix: &str) -> Self {
        Self(prefix.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_prefix(&value)
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_prefix(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
