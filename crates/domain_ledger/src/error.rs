//! Ledger domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the ledger domain
///
/// Every operation that returns one of these leaves the ledger exactly as it
/// was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Participant name is already on the roster
    #[error("Participant already exists: {0}")]
    DuplicateParticipant(String),

    /// Participant is not on the roster
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Participant name is empty or whitespace
    #[error("Invalid participant name: {0:?}")]
    InvalidParticipantName(String),

    /// Amount is negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unequal split does not supply one amount per participant
    #[error("Distribution mismatch: expected {expected} amounts, got {actual}")]
    DistributionMismatch {
        expected: usize,
        actual: usize,
    },

    /// Expense submitted before any participant was added
    #[error("Cannot record an expense before any participant has been added")]
    EmptyRoster,

    /// Money arithmetic failed
    #[error("Calculation error: {0}")]
    Calculation(#[from] MoneyError),

    /// Receipt could not be written or read back
    #[error("Export error: {0}")]
    Export(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Export(err.to_string())
    }
}
