//! A session hosting the account machine.
//!
//! The session is the imperative shell around the pure transition
//! function: it owns the one current snapshot, replaces it on every
//! dispatch, and records what happened.

use crate::account::{permits, permits_command, transition, Account, Action, ActionError, Command};
use crate::core::{State, StateHistory, StateTransition};
use crate::policy::{PolicyContext, PolicyRules, PolicyViolation};
use chrono::Utc;

/// Result of applying a single action.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The action produced this new snapshot
    Applied(Account),

    /// The account is not active and the action was not an open
    Ignored,

    /// The session's policy refused the action
    Rejected { violations: Vec<PolicyViolation> },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Owner of the current account snapshot.
///
/// History is kept for the life of the session and is never truncated.
/// Each applied action rebuilds it through [`StateHistory::record`], which
/// copies every earlier entry, so recording costs grow with session length.
///
/// # Example
///
/// ```rust
/// use teller::account::{Account, Action};
/// use teller::session::Session;
///
/// let mut session = Session::new();
/// session.apply(Action::OpenAccount { amount: 500 });
/// session.apply(Action::Deposit { amount: 150 });
///
/// assert_eq!(session.current_state(), &Account::active(650, 0));
/// assert_eq!(session.history().actions(), vec!["openAccount", "deposit"]);
/// ```
pub struct Session {
    current: Account,
    policy: PolicyRules,
    history: StateHistory<Account>,
}

impl Session {
    /// Session over a fresh account with no policy.
    pub fn new() -> Self {
        Self::with_policy(PolicyRules::default())
    }

    /// Session over a fresh account enforcing `policy`.
    pub fn with_policy(policy: PolicyRules) -> Self {
        Self {
            current: Account::INITIAL,
            policy,
            history: StateHistory::new(),
        }
    }

    /// Get current snapshot (pure)
    pub fn current_state(&self) -> &Account {
        &self.current
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<Account> {
        &self.history
    }

    /// Apply a typed action, replacing the current snapshot when it goes
    /// through.
    pub fn apply(&mut self, action: Action) -> Outcome {
        if !permits(&self.current, &action) {
            return Outcome::Ignored;
        }

        if let Err(violations) = self.policy.check(&PolicyContext::new(self.current, action)) {
            return Outcome::Rejected { violations };
        }

        let next = transition(&self.current, &action);
        self.history = self.history.record(StateTransition {
            from: self.current,
            to: next,
            action: action.kind().to_string(),
            timestamp: Utc::now(),
        });
        self.current = next;
        Outcome::Applied(next)
    }

    /// Decode a wire command and apply it.
    ///
    /// The activity guard runs before decoding, so anything but an open is
    /// ignored while the account is inactive. Past the guard, an unknown
    /// command fails without touching the session.
    pub fn dispatch(&mut self, command: &Command) -> Result<Outcome, ActionError> {
        if !permits_command(&self.current, command) {
            return Ok(Outcome::Ignored);
        }
        let action = Action::try_from(command)?;
        Ok(self.apply(action))
    }

    /// Name of the lifecycle phase the account is in.
    pub fn phase(&self) -> &str {
        self.current.name()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
