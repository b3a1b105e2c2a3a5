//! Rich error handling for the returns engine.
//!
//! Every failure in the request pipeline is classified by an [`ErrorCode`]
//! and absorbed at the HTTP boundary: the handler answers 200 with a
//! placeholder body instead of surfacing an error status, so a bad symbol or
//! date range degrades the chart rather than the request.
//!
//! | Code | Meaning |
//! |------|---------|
//! | `SYMBOL_UNAVAILABLE` | Symbol unknown or not loaded at startup |
//! | `INVALID_RANGE` | Bounds missing, unparseable, or start > end |
//! | `EMPTY_RANGE` | Valid bounds but no trading days inside them |
//! | `INVALID_BAR` | A stored bar failed the positive-price policy |
//! | `COMPUTATION_FAILED` | Unexpected failure in the return pipeline |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested symbol is not in the bar store.
    SymbolUnavailable,
    /// Date bounds missing, unparseable, or reversed.
    InvalidRange,
    /// No trading days fall inside the requested range.
    EmptyRange,
    /// A bar violated the positive-price policy.
    InvalidBar,
    /// Unexpected failure in the computation pipeline.
    ComputationFailed,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::SymbolUnavailable => "SYMBOL_UNAVAILABLE",
            Self::InvalidRange => "INVALID_RANGE",
            Self::EmptyRange => "EMPTY_RANGE",
            Self::InvalidBar => "INVALID_BAR",
            Self::ComputationFailed => "COMPUTATION_FAILED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A classified error with context for the request pipeline.
#[derive(Debug, Error)]
pub struct EngineError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message, suitable for the placeholder body.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// Convenience constructors for common errors.
impl EngineError {
    /// Requested symbol not available in the store.
    #[must_use]
    pub fn symbol_unavailable(symbol: &str) -> Self {
        Self::new(
            ErrorCode::SymbolUnavailable,
            "No data available".to_string(),
        )
        .with_context("symbol", symbol)
    }

    /// Missing or malformed date bounds.
    #[must_use]
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRange, message)
    }

    /// Valid bounds but nothing in range.
    #[must_use]
    pub fn empty_range() -> Self {
        Self::new(ErrorCode::EmptyRange, "No data in range")
    }

    /// A bar failed the positive-price policy.
    #[must_use]
    pub fn invalid_bar(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBar, message)
    }

    /// Catch-all for unexpected pipeline failures.
    #[must_use]
    pub fn computation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ComputationFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_reasons_are_stable() {
        assert_eq!(ErrorCode::SymbolUnavailable.reason(), "SYMBOL_UNAVAILABLE");
        assert_eq!(ErrorCode::InvalidRange.reason(), "INVALID_RANGE");
        assert_eq!(ErrorCode::EmptyRange.reason(), "EMPTY_RANGE");
        assert_eq!(ErrorCode::InvalidBar.reason(), "INVALID_BAR");
        assert_eq!(ErrorCode::ComputationFailed.reason(), "COMPUTATION_FAILED");
    }

    #[test]
    fn engine_error_carries_context() {
        let error = EngineError::symbol_unavailable("TLT");

        assert_eq!(error.code(), ErrorCode::SymbolUnavailable);
        assert_eq!(error.context(), &[("symbol".to_string(), "TLT".to_string())]);
    }

    #[test]
    fn engine_error_display() {
        let error = EngineError::invalid_range("start 2024-02-01 is after end 2024-01-01");
        let msg = format!("{error}");
        assert!(msg.starts_with("[INVALID_RANGE]"));
        assert!(msg.contains("2024-02-01"));
    }

    #[test]
    fn empty_range_message_matches_placeholder_copy() {
        assert_eq!(EngineError::empty_range().message(), "No data in range");
    }
}
