//! Policy violations.

use thiserror::Error;

/// A rule an action broke under an opt-in [`PolicyRules`](super::PolicyRules).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("opening deposit {amount} is below the minimum of {minimum}")]
    BelowMinimumDeposit { minimum: u64, amount: u64 },

    #[error("cannot close with an outstanding loan of {loan}")]
    CloseWithLoan { loan: u64 },

    #[error("cannot close with a non-zero balance of {balance}")]
    CloseWithBalance { balance: i64 },

    #[error("a loan of {loan} is already outstanding")]
    LoanAlreadyOutstanding { loan: u64 },

    #[error("custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
