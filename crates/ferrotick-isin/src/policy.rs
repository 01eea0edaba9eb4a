use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CountryAllowList, CountryCode, CountryDenyList, Isin, IsinError, Rule};

/// Caller configuration for the built-in country rules.
///
/// ```json
/// { "allowed_countries": ["US", "GB"], "denied_countries": [] }
/// ```
///
/// An empty list disables the corresponding rule, so the default policy only
/// performs structural and check digit validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsinPolicy {
    pub allowed_countries: Vec<CountryCode>,
    pub denied_countries: Vec<CountryCode>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid isin policy: {0}")]
    Json(#[from] serde_json::Error),
}

impl IsinPolicy {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Rules in evaluation order: allow-list, then deny-list.
    pub fn rules(&self) -> Vec<Box<dyn Rule>> {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if !self.allowed_countries.is_empty() {
            rules.push(Box::new(CountryAllowList::new(
                self.allowed_countries.iter().cloned(),
            )));
        }
        if !self.denied_countries.is_empty() {
            rules.push(Box::new(CountryDenyList::new(
                self.denied_countries.iter().cloned(),
            )));
        }
        rules
    }

    pub fn parse(&self, raw: &str) -> Result<Isin, IsinError> {
        let rules = self.rules();
        let rules: Vec<&dyn Rule> = rules.iter().map(|rule| rule.as_ref()).collect();
        crate::parse(raw, &rules)
    }
}
