//! The account snapshot.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// The single account a session operates on.
///
/// `balance` is signed because paying a loan off may overdraw it. `loan`
/// holds at most one outstanding requested amount.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub balance: i64,
    pub loan: u64,
    pub is_active: bool,
}

impl Account {
    /// The zeroed, inactive shape every session starts in and every close
    /// returns to.
    pub const INITIAL: Account = Account {
        balance: 0,
        loan: 0,
        is_active: false,
    };

    /// An active account with the given fields.
    pub fn active(balance: i64, loan: u64) -> Self {
        Self {
            balance,
            loan,
            is_active: true,
        }
    }

    /// True when no loan is outstanding and the balance is zero.
    pub fn is_settled(&self) -> bool {
        self.loan == 0 && self.balance == 0
    }

    pub fn has_loan(&self) -> bool {
        self.loan != 0
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl State for Account {
    fn name(&self) -> &str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
