//! Jurisdiction types
//!
//! The age-gate accepts a country code as a forward-compatible extension
//! point: regulatory thresholds legitimately vary by jurisdiction, so the
//! code is validated and normalized here even though every jurisdiction
//! currently shares one threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a country code does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("country code must be exactly two alphabetic characters, got {0:?}")]
pub struct InvalidCountryCode(pub String);

/// ISO 3166-1 alpha-2 country code, normalized to upper-case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse and normalize a two-letter country code.
    ///
    /// Case-insensitive; anything other than exactly two ASCII letters is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(InvalidCountryCode(s.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }

    /// The normalized upper-case code
    pub fn as_str(&self) -> &str {
        // Invariant: both bytes are ASCII uppercase letters
        std::str::from_utf8(&self.0).expect("country code is always ASCII")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_to_upper_case() {
        assert_eq!(CountryCode::parse("us").unwrap().as_str(), "US");
        assert_eq!(CountryCode::parse("De").unwrap().as_str(), "DE");
        assert_eq!(CountryCode::parse("GB").unwrap().as_str(), "GB");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(CountryCode::parse("U").is_err());
        assert!(CountryCode::parse("USA").is_err());
        assert!(CountryCode::parse("").is_err());
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert!(CountryCode::parse("U1").is_err());
        assert!(CountryCode::parse("1A").is_err());
        assert!(CountryCode::parse("@#").is_err());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(CountryCode::parse(" fr ").unwrap().as_str(), "FR");
    }
}
