//! Configuration for the account controls.
//!
//! A display layer issues fixed amounts from its buttons. The stock
//! amounts are 500 to open, 150 to deposit, 50 to withdraw and 5000 per
//! loan request; any of them can be overridden from JSON.

use serde::{Deserialize, Serialize};

/// Amounts the account controls issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlAmounts {
    pub open: u64,
    pub deposit: u64,
    pub withdraw: u64,
    pub loan: u64,
}

impl Default for ControlAmounts {
    fn default() -> Self {
        Self {
            open: 500,
            deposit: 150,
            withdraw: 50,
            loan: 5000,
        }
    }
}

impl ControlAmounts {
    /// Load from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
