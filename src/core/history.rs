//! State transition history tracking.
//!
//! Keeps an immutable, serializable trail of the transitions a session
//! applied, so a display layer can replay or inspect them.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use teller::account::Account;
/// use teller::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Account::INITIAL,
///     to: Account::active(500, 0),
///     action: "openAccount".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.action, "openAccount");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The snapshot before the action
    pub from: S,
    /// The snapshot after the action
    pub to: S,
    /// Discriminator of the action that produced `to`
    pub action: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use teller::account::Account;
/// use teller::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Account::INITIAL,
///     to: Account::active(500, 0),
///     action: "openAccount".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: Account::active(500, 0),
///     to: Account::active(650, 0),
///     action: "deposit".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &Account::active(650, 0));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of snapshots traversed.
    ///
    /// Returns the first `from` snapshot, then the `to` snapshot of each
    /// transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Action discriminators in the order they were applied.
    pub fn actions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .map(|t| t.action.as_str())
            .collect()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn step(from: Account, to: Account, action: &str) -> StateTransition<Account> {
        StateTransition {
            from,
            to,
            action: action.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Account> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(step(
            Account::INITIAL,
            Account::active(500, 0),
            "openAccount",
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_snapshot_sequence() {
        let history = StateHistory::new()
            .record(step(Account::INITIAL, Account::active(500, 0), "openAccount"))
            .record(step(
                Account::active(500, 0),
                Account::active(5500, 5000),
                "requestLoan",
            ));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &Account::INITIAL);
        assert_eq!(path[1], &Account::active(500, 0));
        assert_eq!(path[2], &Account::active(5500, 5000));
        assert_eq!(history.actions(), vec!["openAccount", "requestLoan"]);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(step(
            Account::INITIAL,
            Account::active(500, 0),
            "openAccount",
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Account> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].to, Account::active(500, 0));
        assert_eq!(deserialized.transitions()[0].action, "openAccount");
    }
}
