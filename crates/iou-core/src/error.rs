//! Error types for IOU contract verification
//!
//! Verification itself returns `Result<(), VerificationFailure>`.
//! Everything around it (decoding, file access) returns `Result<T, Error>`.

use thiserror::Error;

use crate::contract::Rule;

/// Why a transaction was rejected by the contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    /// The transaction lacks the shape needed to evaluate the rules at all
    #[error("Malformed transaction: {0}")]
    Malformed(String),

    /// One of the named business rules does not hold
    #[error("Contract violation: {}", .0.description())]
    RuleViolation(Rule),
}

impl VerificationFailure {
    /// The violated rule, or `None` for a malformed transaction
    pub fn rule(&self) -> Option<Rule> {
        match self {
            VerificationFailure::RuleViolation(rule) => Some(*rule),
            VerificationFailure::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, VerificationFailure::Malformed(_))
    }
}

impl From<Rule> for VerificationFailure {
    fn from(rule: Rule) -> Self {
        VerificationFailure::RuleViolation(rule)
    }
}

/// IOU core error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Transaction or hash text could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transaction source could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// The contract rejected the transaction
    #[error(transparent)]
    Verification(#[from] VerificationFailure),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type alias for IOU core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_display_names_rule() {
        let failure = VerificationFailure::RuleViolation(Rule::NoInputs);
        assert_eq!(
            failure.to_string(),
            "Contract violation: No inputs should be consumed when issuing an IOU."
        );
        assert_eq!(failure.rule(), Some(Rule::NoInputs));
        assert!(!failure.is_malformed());
    }

    #[test]
    fn test_malformed_has_no_rule() {
        let failure = VerificationFailure::Malformed("no outputs".into());
        assert_eq!(failure.rule(), None);
        assert!(failure.is_malformed());
        assert!(failure.to_string().starts_with("Malformed transaction"));
    }

    #[test]
    fn test_error_wraps_failure_transparently() {
        let err: Error = VerificationFailure::from(Rule::SingleOutput).into();
        assert_eq!(
            err.to_string(),
            "Contract violation: Only one output state should be created."
        );
    }

    #[test]
    fn test_io_error_maps_to_io() {
        let missing = std::fs::read_to_string("no/such/transaction.json").unwrap_err();
        let err: Error = missing.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
