//! Builder API for creating policy rules.

use crate::account::Account;
use crate::core::Guard;
use crate::policy::context::PolicyContext;
use crate::policy::rules::{PolicyCheck, PolicyRules};
use crate::policy::violations::PolicyViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating policy rules.
///
/// # Example
///
/// ```rust
/// use teller::account::{Account, Action};
/// use teller::policy::{PolicyBuilder, PolicyContext};
///
/// let rules = PolicyBuilder::new()
///     .min_opening_deposit(500)
///     .require_settled_close()
///     .build();
///
/// let ctx = PolicyContext::new(Account::INITIAL, Action::OpenAccount { amount: 100 });
/// assert!(rules.check(&ctx).is_err());
/// ```
pub struct PolicyBuilder {
    min_opening_deposit: Option<u64>,
    settled_close: bool,
    single_loan: bool,
    required_checks: Vec<PolicyCheck>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            min_opening_deposit: None,
            settled_close: false,
            single_loan: false,
            required_checks: Vec::new(),
        }
    }

    /// Refuse to open an account with less than `amount`.
    pub fn min_opening_deposit(mut self, amount: u64) -> Self {
        self.min_opening_deposit = Some(amount);
        self
    }

    /// Only close once the loan is repaid and the balance is zero.
    pub fn require_settled_close(mut self) -> Self {
        self.settled_close = true;
        self
    }

    /// Refuse a loan request while another loan is outstanding.
    pub fn single_loan(mut self) -> Self {
        self.single_loan = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&PolicyContext) -> Validation<(), NonEmptyVec<PolicyViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&PolicyContext) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        let check = move |ctx: &PolicyContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(PolicyViolation::CustomCheckFailed {
                    message: message.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Require the snapshot an action would produce to satisfy `guard`.
    pub fn require_outcome(self, guard: Guard<Account>, message: impl Into<String>) -> Self {
        self.require_pred(move |ctx| guard.check(&ctx.next()), message)
    }

    pub fn build(self) -> PolicyRules {
        PolicyRules {
            min_opening_deposit: self.min_opening_deposit,
            settled_close: self.settled_close,
            single_loan: self.single_loan,
            required_checks: self.required_checks,
        }
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
