use tracing::{debug, trace};

use crate::checksum::check_digit;
use crate::sanitize::sanitize;
use crate::{CheckDigitError, CountryCode, Isin, IsinError, Rule, ISIN_LEN};

const COUNTRY_END: usize = 2;
const NSIN_END: usize = ISIN_LEN - 1;

/// Sanitize, parse and verify `raw`, then apply `rules` in order.
///
/// The first failing rule short-circuits; later rules are not invoked.
/// Rules only run once length and check digit are confirmed.
pub fn parse(raw: &str, rules: &[&dyn Rule]) -> Result<Isin, IsinError> {
    let candidate = sanitize(raw);
    trace!(raw, len = candidate.len(), "sanitized isin candidate");

    let (isin, given) = split(&candidate)?;

    let computed = check_digit(isin.country_code().as_str(), isin.nsin());
    if given != computed {
        debug!(given, computed, "isin rejected: check digit mismatch");
        return Err(CheckDigitError::mismatch(given, computed).into());
    }

    for (index, rule) in rules.iter().enumerate() {
        if let Err(error) = rule.check(&isin) {
            debug!(rule = index, %error, "isin rejected by rule");
            return Err(IsinError::Rule(error));
        }
    }

    Ok(isin)
}

/// Structural split of a sanitized candidate. The check digit is parsed but
/// not yet verified against the payload.
fn split(candidate: &str) -> Result<(Isin, u8), IsinError> {
    if candidate.len() != ISIN_LEN {
        debug!(len = candidate.len(), "isin rejected: wrong length");
        return Err(IsinError::Length(candidate.len()));
    }

    let given = match candidate.as_bytes().get(NSIN_END) {
        Some(byte) if byte.is_ascii_digit() => byte - b'0',
        _ => {
            debug!("isin rejected: last char is not a digit");
            return Err(CheckDigitError::not_a_digit().into());
        }
    };

    let isin = Isin::from_parts(
        CountryCode::from_sanitized(&candidate[..COUNTRY_END]),
        candidate[COUNTRY_END..NSIN_END].to_owned(),
        given,
    );
    Ok((isin, given))
}
