//! Error types for the reality check calculator.
//!
//! The valuation core is total over its valid input domain, so the only
//! failures are inputs that fall outside it and lookups into the static
//! preset tables.

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the calculator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════════
    // Input Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Input parameter outside its valid domain
    #[error("Invalid input {name}: {reason}")]
    InvalidInput {
        /// Parameter name
        name: String,
        /// Reason for invalidity
        reason: String,
    },

    /// FDV preset lookup failed
    #[error("Unknown FDV preset: {0}")]
    UnknownPreset(String),

    // ═══════════════════════════════════════════════════════════════════
    // Serialization Errors
    // ═══════════════════════════════════════════════════════════════════

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`]
    pub fn invalid_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the user can fix this error by changing inputs
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InvalidInput { .. } | Error::UnknownPreset(_))
    }

    /// Returns the error code for external systems
    pub fn code(&self) -> u32 {
        match self {
            // Input errors: 1xxx
            Error::InvalidInput { .. } => 1001,
            Error::UnknownPreset(_) => 1002,

            // Serialization errors: 7xxx
            Error::Serialization(_) => 7001,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let codes = vec![
            Error::invalid_input("supply", "").code(),
            Error::UnknownPreset("".into()).code(),
            Error::Serialization("".into()).code(),
        ];

        let mut unique_codes = codes.clone();
        unique_codes.sort();
        unique_codes.dedup();

        assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("supply", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input supply: must be greater than zero"
        );
    }

    #[test]
    fn test_is_recoverable() {
        assert!(Error::invalid_input("points", "negative").is_recoverable());
        assert!(Error::UnknownPreset("$7B".into()).is_recoverable());
        assert!(!Error::Serialization("test".into()).is_recoverable());
    }
}
