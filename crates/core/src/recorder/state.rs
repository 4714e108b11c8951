//! Recording lifecycle state machine.
//!
//! Every recording moves `Validated -> Persisted -> ReceiptIssued ->
//! Committed`; writes without a receipt (expenses, salary disbursements)
//! skip the receipt step. `Rejected` is the terminal failure state reached
//! only from validation, before anything is written.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// State of a transaction recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    /// Input passed validation; nothing written yet.
    Validated,
    /// The primary record is written inside an open transaction.
    Persisted,
    /// The receipt is written alongside the payment.
    ReceiptIssued,
    /// The transaction committed; the write is visible to readers.
    Committed,
    /// Validation failed; no partial writes exist.
    Rejected,
}

/// Attempted an illegal state transition.
#[derive(Debug, Clone, Copy, Error)]
#[error("Illegal recording transition: {from} -> {to}")]
pub struct InvalidTransition {
    /// State the recording was in.
    pub from: RecordingState,
    /// State that was requested.
    pub to: RecordingState,
}

impl RecordingState {
    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::Rejected)
    }

    /// Returns true if the transition to `next` is legal.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Validated, Self::Persisted)
                | (Self::Validated, Self::Rejected)
                | (Self::Persisted, Self::ReceiptIssued)
                | (Self::Persisted, Self::Committed)
                | (Self::ReceiptIssued, Self::Committed)
        )
    }

    /// Moves to `next`, or fails if the transition is illegal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when `next` is not reachable from the
    /// current state.
    pub fn advance(self, next: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for RecordingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validated => write!(f, "validated"),
            Self::Persisted => write!(f, "persisted"),
            Self::ReceiptIssued => write!(f, "receipt_issued"),
            Self::Committed => write!(f, "committed"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_happy_path() {
        let state = RecordingState::Validated;
        let state = state.advance(RecordingState::Persisted).unwrap();
        let state = state.advance(RecordingState::ReceiptIssued).unwrap();
        let state = state.advance(RecordingState::Committed).unwrap();
        assert!(state.is_terminal());
    }

    #[test]
    fn test_receiptless_path() {
        // Expenses and salary disbursements commit without a receipt.
        let state = RecordingState::Validated;
        let state = state.advance(RecordingState::Persisted).unwrap();
        assert!(state.advance(RecordingState::Committed).is_ok());
    }

    #[test]
    fn test_rejection_only_from_validated() {
        assert!(RecordingState::Validated.can_transition_to(RecordingState::Rejected));
        assert!(!RecordingState::Persisted.can_transition_to(RecordingState::Rejected));
        assert!(!RecordingState::ReceiptIssued.can_transition_to(RecordingState::Rejected));
    }

    #[test]
    fn test_terminal_states_do_not_advance() {
        for terminal in [RecordingState::Committed, RecordingState::Rejected] {
            assert!(terminal.is_terminal());
            for next in [
                RecordingState::Validated,
                RecordingState::Persisted,
                RecordingState::ReceiptIssued,
                RecordingState::Committed,
                RecordingState::Rejected,
            ] {
                assert!(terminal.advance(next).is_err());
            }
        }
    }

    #[test]
    fn test_cannot_skip_persistence() {
        let err = RecordingState::Validated
            .advance(RecordingState::Committed)
            .unwrap_err();
        assert_eq!(err.from, RecordingState::Validated);
        assert_eq!(err.to, RecordingState::Committed);
    }
}
