//! Commands — typed transaction intent plus the parties who authorised it

use std::collections::BTreeSet;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::contract::Rule;
use crate::error::VerificationFailure;
use crate::state::Party;

/// Commands understood by the IOU contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Issue a brand-new IOU onto the ledger
    Create,
}

/// Discriminant of a [`Command`], used to look commands up by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandKind {
    Create,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Create => CommandKind::Create,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Create => write!(f, "Create"),
        }
    }
}

/// A command together with the set of parties that signed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedCommand {
    pub command: Command,
    #[serde(default)]
    pub signers: BTreeSet<Party>,
}

impl AuthenticatedCommand {
    pub fn new<I, P>(command: Command, signers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Party>,
    {
        AuthenticatedCommand {
            command,
            signers: signers.into_iter().map(Into::into).collect(),
        }
    }

    /// True when every party in `parties` has signed this command
    pub fn is_signed_by_all(&self, parties: &BTreeSet<Party>) -> bool {
        parties.is_subset(&self.signers)
    }
}

/// Return the only command of `kind`.
///
/// Zero matches and several matches are both a [`Rule::SingleCreateCommand`] violation.
pub fn require_single_command(
    commands: &[AuthenticatedCommand],
    kind: CommandKind,
) -> Result<&AuthenticatedCommand, VerificationFailure> {
    let mut matching = commands.iter().filter(|c| c.command.kind() == kind);
    match (matching.next(), matching.next()) {
        (Some(command), None) => Ok(command),
        (found, _) => {
            trace!(
                "expected exactly one {} command, found {}",
                kind,
                if found.is_some() { "several" } else { "none" }
            );
            Err(VerificationFailure::RuleViolation(Rule::SingleCreateCommand))
        }
    }
}
