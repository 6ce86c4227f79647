//! Transactions as seen by a contract
//!
//! A contract only needs the consumed states, the produced states, and the
//! signed commands. [`Transaction`] captures exactly that, so anything that
//! can expose those three views can be verified, whether it came from a
//! ledger runtime or was built by hand in a test.

use serde::{Deserialize, Serialize};

use crate::command::{AuthenticatedCommand, Command};
use crate::state::{IouState, Party};
use crate::Result;

/// The structural view of a proposed ledger transition
pub trait Transaction {
    /// States consumed by the transaction, in order
    fn inputs(&self) -> &[IouState];

    /// States created by the transaction, in order
    fn outputs(&self) -> &[IouState];

    /// Commands attached to the transaction with their signers
    fn commands(&self) -> &[AuthenticatedCommand];
}

/// A plain in-memory transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub inputs: Vec<IouState>,
    #[serde(default)]
    pub outputs: Vec<IouState>,
    #[serde(default)]
    pub commands: Vec<AuthenticatedCommand>,
}

impl TransactionData {
    /// Decode a transaction from its JSON form
    ///
    /// # Errors
    /// Returns `Decode` if the text is not a well-formed transaction.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }
}

impl Transaction for TransactionData {
    fn inputs(&self) -> &[IouState] {
        &self.inputs
    }

    fn outputs(&self) -> &[IouState] {
        &self.outputs
    }

    fn commands(&self) -> &[AuthenticatedCommand] {
        &self.commands
    }
}

/// Fluent construction of a [`TransactionData`]
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    tx: TransactionData,
}

impl TransactionBuilder {
    pub fn input(mut self, state: IouState) -> Self {
        self.tx.inputs.push(state);
        self
    }

    pub fn output(mut self, state: IouState) -> Self {
        self.tx.outputs.push(state);
        self
    }

    pub fn command<I, P>(mut self, command: Command, signers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Party>,
    {
        self.tx
            .commands
            .push(AuthenticatedCommand::new(command, signers));
        self
    }

    pub fn build(self) -> TransactionData {
        self.tx
    }
}
