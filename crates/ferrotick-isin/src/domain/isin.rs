use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CountryCode, IsinError, Rule};

/// International Securities Identification Number.
///
/// `country_code ++ nsin ++ check_digit` always forms a 12-character string
/// whose last digit matches the Luhn checksum of the first eleven.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isin {
    country_code: CountryCode,
    nsin: String,
    check_digit: u8,
}

impl Isin {
    /// Sanitize, parse and verify `raw` without additional rules.
    pub fn parse(raw: &str) -> Result<Self, IsinError> {
        crate::parse(raw, &[])
    }

    /// Sanitize, parse and verify `raw`, then apply `rules` in order.
    pub fn parse_with(raw: &str, rules: &[&dyn Rule]) -> Result<Self, IsinError> {
        crate::parse(raw, rules)
    }

    pub(crate) fn from_parts(country_code: CountryCode, nsin: String, check_digit: u8) -> Self {
        Self {
            country_code,
            nsin,
            check_digit,
        }
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    /// National Securities Identifying Number (9 characters).
    pub fn nsin(&self) -> &str {
        &self.nsin
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }
}

impl Display for Isin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.country_code, self.nsin, self.check_digit)
    }
}

impl FromStr for Isin {
    type Err = IsinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isin {
    type Error = IsinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Isin {
    type Error = IsinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Isin> for String {
    fn from(value: Isin) -> Self {
        value.to_string()
    }
}
