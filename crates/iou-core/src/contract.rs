//! IOU contract — decides whether a transaction may issue a new IOU
//!
//! A valid issuance transaction has:
//! - zero input states,
//! - exactly one output state, the new IOU, with a strictly positive value,
//! - exactly one `Create` command, signed by every participant of the IOU.
//!
//! # Determinism
//!
//! Verification reads only the transaction. No clock, no randomness, no
//! shared state: every node checking the same transaction reaches the same
//! verdict, and the verdict never changes on retry.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::command::{require_single_command, CommandKind};
use crate::error::VerificationFailure;
use crate::hash::SecureHash;
use crate::state::IouState;
use crate::transaction::Transaction;

/// Human-readable legal template the IOU contract refers to
pub const LEGAL_CONTRACT_TEMPLATE: &str = "IOU contract template and params";

// ── Rules ─────────────────────────────────────────────────

/// Business rules of IOU issuance, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// The output value is strictly greater than zero.
    ///
    /// The description says "non-negative" for historical reasons; zero is rejected too.
    PositiveValue,
    NoInputs,
    SingleOutput,
    SingleCreateCommand,
    AllParticipantsSign,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::PositiveValue,
        Rule::NoInputs,
        Rule::SingleOutput,
        Rule::SingleCreateCommand,
        Rule::AllParticipantsSign,
    ];

    /// Message reported to the proposer when this rule fails
    pub fn description(&self) -> &'static str {
        match self {
            Rule::PositiveValue => "The IOU's value must be non-negative.",
            Rule::NoInputs => "No inputs should be consumed when issuing an IOU.",
            Rule::SingleOutput => "Only one output state should be created.",
            Rule::SingleCreateCommand => "Required a single Create command.",
            Rule::AllParticipantsSign => "All of the participants must be signers.",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ── Contract ──────────────────────────────────────────────

/// A contract governs which transactions may touch its states
pub trait Contract {
    /// Accept or reject a transaction.
    ///
    /// # Errors
    /// `Malformed` if the transaction cannot be checked at all,
    /// `RuleViolation` naming the first rule that fails otherwise.
    fn verify(&self, tx: &dyn Transaction) -> Result<(), VerificationFailure>;

    /// Hash of the legal prose backing this contract
    fn legal_contract_reference(&self) -> SecureHash;
}

/// The IOU issuance contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IouContract;

impl IouContract {
    pub fn new() -> Self {
        IouContract
    }

    /// Report every violated rule instead of stopping at the first.
    ///
    /// Intended for tooling; ledger acceptance goes through [`Contract::verify`].
    /// Output-dependent rules look at the first output, as `verify` does, so
    /// the first reported rule is always the one `verify` would return.
    ///
    /// # Errors
    /// `Malformed` when there is no output to inspect.
    pub fn check_rules(&self, tx: &dyn Transaction) -> Result<Vec<Rule>, VerificationFailure> {
        let iou = first_output(tx)?;
        let mut violated = Vec::new();

        if iou.value <= 0 {
            violated.push(Rule::PositiveValue);
        }
        if !tx.inputs().is_empty() {
            violated.push(Rule::NoInputs);
        }
        if tx.outputs().len() != 1 {
            violated.push(Rule::SingleOutput);
        }
        match require_single_command(tx.commands(), CommandKind::Create) {
            Ok(command) => {
                if !command.is_signed_by_all(&iou.participants()) {
                    violated.push(Rule::AllParticipantsSign);
                }
            }
            Err(_) => violated.push(Rule::SingleCreateCommand),
        }

        Ok(violated)
    }
}

impl Contract for IouContract {
    fn verify(&self, tx: &dyn Transaction) -> Result<(), VerificationFailure> {
        let iou = first_output(tx)?;

        require(Rule::PositiveValue, iou.value > 0)?;
        require(Rule::NoInputs, tx.inputs().is_empty())?;
        require(Rule::SingleOutput, tx.outputs().len() == 1)?;

        let command = require_single_command(tx.commands(), CommandKind::Create)
            .inspect_err(|e| debug!("IOU issuance rejected: {}", e))?;

        require(
            Rule::AllParticipantsSign,
            command.is_signed_by_all(&iou.participants()),
        )?;

        trace!(
            "IOU issuance accepted: value {} from {} to {}",
            iou.value,
            iou.lender,
            iou.borrower
        );
        Ok(())
    }

    fn legal_contract_reference(&self) -> SecureHash {
        SecureHash::sha256(LEGAL_CONTRACT_TEMPLATE)
    }
}

// ── Helpers ───────────────────────────────────────────────

fn first_output(tx: &dyn Transaction) -> Result<&IouState, VerificationFailure> {
    tx.outputs().first().ok_or_else(|| {
        debug!("IOU issuance rejected: transaction has no output state");
        VerificationFailure::Malformed("transaction has no output state".into())
    })
}

fn require(rule: Rule, holds: bool) -> Result<(), VerificationFailure> {
    if holds {
        Ok(())
    } else {
        debug!("IOU issuance rejected: {}", rule);
        Err(VerificationFailure::RuleViolation(rule))
    }
}
