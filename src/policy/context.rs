//! Context provided to policy checks.

use crate::account::{transition, Account, Action};

/// The snapshot and action a policy is asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyContext {
    pub state: Account,
    pub action: Action,
}

impl PolicyContext {
    pub fn new(state: Account, action: Action) -> Self {
        Self { state, action }
    }

    /// Snapshot the permissive machine would produce (pure).
    pub fn next(&self) -> Account {
        transition(&self.state, &self.action)
    }
}
