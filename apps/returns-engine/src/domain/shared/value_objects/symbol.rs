//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A ticker symbol for an index ETF or equity.
///
/// Examples: "SPY", "QQQ", "DIA", "IWM".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Maximum accepted ticker length.
    const MAX_LEN: usize = 10;

    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the symbol before it is used as a store key.
    ///
    /// # Errors
    ///
    /// Returns error if the symbol is empty, too long, or contains
    /// non-alphanumeric characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol cannot be empty".to_string(),
            });
        }

        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol exceeds maximum length".to_string(),
            });
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol contains invalid characters".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("spy");
        assert_eq!(s.as_str(), "SPY");
    }

    #[test]
    fn symbol_new_trims_whitespace() {
        let s = Symbol::new(" qqq ");
        assert_eq!(s.as_str(), "QQQ");
    }

    #[test]
    fn symbol_display() {
        let s = Symbol::new("DIA");
        assert_eq!(format!("{s}"), "DIA");
    }

    #[test]
    fn symbol_validate_empty() {
        assert!(Symbol::new("").validate().is_err());
    }

    #[test]
    fn symbol_validate_too_long() {
        assert!(Symbol::new("A".repeat(11)).validate().is_err());
    }

    #[test]
    fn symbol_validate_invalid_chars() {
        assert!(Symbol::new("SP Y").validate().is_err());
        assert!(Symbol::new("SPY!").validate().is_err());
    }

    #[test]
    fn symbol_validate_valid() {
        assert!(Symbol::new("IWM").validate().is_ok());
    }

    #[test]
    fn symbol_from_conversions() {
        let s1: Symbol = "spy".into();
        assert_eq!(s1.as_str(), "SPY");

        let s2: Symbol = String::from("qqq").into();
        assert_eq!(s2.as_str(), "QQQ");
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("SPY");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"SPY\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn symbol_hash_is_case_insensitive() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Symbol::new("SPY"));
        set.insert(Symbol::new("spy"));
        set.insert(Symbol::new("QQQ"));

        assert_eq!(set.len(), 2);
    }
}
