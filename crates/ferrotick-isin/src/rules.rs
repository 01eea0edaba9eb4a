use std::collections::BTreeSet;

use crate::{CountryCode, Isin, PolicyError, RuleError};

/// Additional check applied to an ISIN that already passed length and check
/// digit verification.
///
/// Closures of the shape `Fn(&Isin) -> Result<(), RuleError>` implement this
/// trait directly.
pub trait Rule {
    fn check(&self, isin: &Isin) -> Result<(), RuleError>;
}

impl<F> Rule for F
where
    F: Fn(&Isin) -> Result<(), RuleError>,
{
    fn check(&self, isin: &Isin) -> Result<(), RuleError> {
        self(isin)
    }
}

/// Accept only ISINs issued under one of the listed countries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryAllowList {
    countries: BTreeSet<CountryCode>,
}

impl CountryAllowList {
    pub fn new(countries: impl IntoIterator<Item = CountryCode>) -> Self {
        Self {
            countries: countries.into_iter().collect(),
        }
    }

    pub fn contains(&self, country: &CountryCode) -> bool {
        self.countries.contains(country)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Rule for CountryAllowList {
    fn check(&self, isin: &Isin) -> Result<(), RuleError> {
        if self.contains(isin.country_code()) {
            return Ok(());
        }
        Err(Box::new(PolicyError::CountryNotAllowed {
            country: isin.country_code().clone(),
        }))
    }
}

/// Reject ISINs issued under any of the listed countries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDenyList {
    countries: BTreeSet<CountryCode>,
}

impl CountryDenyList {
    pub fn new(countries: impl IntoIterator<Item = CountryCode>) -> Self {
        Self {
            countries: countries.into_iter().collect(),
        }
    }

    pub fn contains(&self, country: &CountryCode) -> bool {
        self.countries.contains(country)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Rule for CountryDenyList {
    fn check(&self, isin: &Isin) -> Result<(), RuleError> {
        if !self.contains(isin.country_code()) {
            return Ok(());
        }
        Err(Box::new(PolicyError::CountryDenied {
            country: isin.country_code().clone(),
        }))
    }
}
