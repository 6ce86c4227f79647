//! Ledger states — the IOU obligation record and the parties to it

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An identity that can be party to a state and sign commands.
///
/// Ordered so that participant and signer sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Party(String);

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Party(name.into())
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Party {
    fn from(name: &str) -> Self {
        Party::new(name)
    }
}

/// An IOU: the borrower's promise to pay `value` to the lender.
///
/// Immutable once recorded; a new state replaces it on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IouState {
    /// Amount owed. Signed so that negative amounts can be proposed and rejected.
    pub value: i64,
    pub lender: Party,
    pub borrower: Party,
}

impl IouState {
    pub fn new(value: i64, lender: impl Into<Party>, borrower: impl Into<Party>) -> Self {
        IouState {
            value,
            lender: lender.into(),
            borrower: borrower.into(),
        }
    }

    /// Everyone who must sign a transaction creating this state
    pub fn participants(&self) -> BTreeSet<Party> {
        [self.lender.clone(), self.borrower.clone()]
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participants_are_lender_and_borrower() {
        let iou = IouState::new(100, "Alice", "Bob");
        let participants: Vec<_> = iou.participants().into_iter().collect();
        assert_eq!(participants, vec![Party::new("Alice"), Party::new("Bob")]);
    }

    #[test]
    fn test_participants_collapse_same_party() {
        let iou = IouState::new(5, "Alice", "Alice");
        assert_eq!(iou.participants().len(), 1);
    }

    #[test]
    fn test_party_serializes_as_plain_string() {
        let json = serde_json::to_string(&IouState::new(7, "Alice", "Bob")).unwrap();
        assert_eq!(json, r#"{"value":7,"lender":"Alice","borrower":"Bob"}"#);
    }

    #[test]
    fn test_negative_value_deserializes() {
        let iou: IouState =
            serde_json::from_str(r#"{"value": -3, "lender": "A", "borrower": "B"}"#).unwrap();
        assert_eq!(iou.value, -3);
    }
}
