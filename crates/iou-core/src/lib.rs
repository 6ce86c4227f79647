//! IOU Core - issuance contract for IOU obligations on a shared ledger
//!
//! Decides whether a proposed transaction may record a new IOU.
//! Consensus, flows, storage and signature checking live elsewhere; they
//! hand a transaction to [`Contract::verify`] before committing it.
//!
//! # Architecture
//!
//! ```text
//! Transaction (inputs, outputs, commands)
//!        ↓
//! IouContract::verify → Ok(()) | VerificationFailure
//!        ↓
//! Ledger commit (external)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: Same transaction always produces the same verdict
//! - **Pure**: No I/O, no clock, no shared state
//! - **Explainable**: Rejections name the violated rule

pub mod api;
pub mod command;
pub mod contract;
pub mod error;
pub mod hash;
pub mod state;
pub mod transaction;

pub use command::{AuthenticatedCommand, Command, CommandKind};
pub use contract::{Contract, IouContract, Rule, LEGAL_CONTRACT_TEMPLATE};
pub use error::{Error, Result, VerificationFailure};
pub use hash::SecureHash;
pub use state::{IouState, Party};
pub use transaction::{Transaction, TransactionBuilder, TransactionData};

/// Version of the contract core, as built
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode a JSON transaction and verify it against the IOU contract
///
/// # Errors
/// `Decode` for unreadable JSON, `Verification` if the contract rejects it.
pub fn verify_json(json: &str) -> Result<()> {
    let tx = TransactionData::from_json(json)?;
    IouContract::new().verify(&tx)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "inputs": [],
        "outputs": [{"value": 100, "lender": "Alice", "borrower": "Bob"}],
        "commands": [{"command": "Create", "signers": ["Alice", "Bob"]}]
    }"#;

    #[test]
    fn test_verify_json_accepts_valid() {
        assert_eq!(verify_json(VALID), Ok(()));
    }

    #[test]
    fn test_verify_json_surfaces_rule() {
        let json = VALID.replace(r#"["Alice", "Bob"]"#, r#"["Alice"]"#);
        assert_eq!(
            verify_json(&json),
            Err(Error::Verification(VerificationFailure::RuleViolation(
                Rule::AllParticipantsSign
            )))
        );
    }

    #[test]
    fn test_verify_json_decode_error() {
        assert!(matches!(verify_json("[]"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_version_is_semver() {
        assert_eq!(VERSION.split('.').count(), 3, "unexpected version {}", VERSION);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = verify_json(VALID);
        for i in 0..100 {
            assert_eq!(first, verify_json(VALID), "Non-determinism at iteration {}", i);
        }
    }
}
