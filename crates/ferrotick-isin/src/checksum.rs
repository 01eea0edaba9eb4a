//! Luhn check digit over an alphanumeric ISIN payload.
//!
//! Characters are consumed right to left. Letters expand to their two-digit
//! value (`A = 10` .. `Z = 35`) and are ingested ones digit first, then tens
//! digit. Doubling starts at the rightmost NSIN digit and the alternation
//! carries over into the country code.

/// Compute the expected check digit for `country_code ++ nsin`.
///
/// Both inputs are expected to be sanitized (uppercase ASCII alphanumeric).
/// Any other byte is skipped.
pub fn check_digit(country_code: &str, nsin: &str) -> u8 {
    let mut luhn = Luhn::new();
    luhn.feed(nsin);
    luhn.feed(country_code);
    luhn.digit()
}

#[derive(Debug, Clone, Copy)]
struct Luhn {
    sum: u32,
    double: bool,
}

impl Luhn {
    fn new() -> Self {
        Self {
            sum: 0,
            double: true,
        }
    }

    fn feed(&mut self, segment: &str) {
        for byte in segment.bytes().rev() {
            match byte {
                b'0'..=b'9' => self.ingest(byte - b'0'),
                b'A'..=b'Z' => {
                    let value = byte - b'A' + 10;
                    self.ingest(value % 10);
                    self.ingest(value / 10);
                }
                _ => {}
            }
        }
    }

    fn ingest(&mut self, digit: u8) {
        let mut digit = u32::from(digit);
        if self.double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        self.sum += digit;
        self.double = !self.double;
    }

    fn digit(&self) -> u8 {
        ((10 - self.sum % 10) % 10) as u8
    }
}
