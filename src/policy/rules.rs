//! Policy rules for account transitions using Validation.

use crate::account::{permits, transition, Account, Action};
use crate::policy::builder::PolicyBuilder;
use crate::policy::context::PolicyContext;
use crate::policy::violations::PolicyViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The minimum opening deposit of the standard rules.
pub const STANDARD_MIN_OPENING_DEPOSIT: u64 = 500;

/// Type alias for validation check functions
pub type PolicyCheck =
    Box<dyn Fn(&PolicyContext) -> Validation<(), NonEmptyVec<PolicyViolation>> + Send + Sync>;

/// Opt-in rules layered over the permissive transition function.
/// Uses Validation to accumulate ALL violations.
pub struct PolicyRules {
    pub(crate) min_opening_deposit: Option<u64>,
    pub(crate) settled_close: bool,
    pub(crate) single_loan: bool,
    pub(crate) required_checks: Vec<PolicyCheck>,
}

impl PolicyRules {
    /// Minimum deposit of 500, close only when settled, one loan at a time.
    pub fn standard() -> Self {
        PolicyBuilder::new()
            .min_opening_deposit(STANDARD_MIN_OPENING_DEPOSIT)
            .require_settled_close()
            .single_loan()
            .build()
    }

    /// Evaluate every rule, accumulating ALL violations.
    pub fn evaluate(&self, context: &PolicyContext) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PolicyViolation>>> = Vec::new();
        let state = &context.state;

        match context.action {
            Action::OpenAccount { amount } => {
                if let Some(minimum) = self.min_opening_deposit {
                    checks.push(if amount < minimum {
                        Validation::fail(PolicyViolation::BelowMinimumDeposit { minimum, amount })
                    } else {
                        Validation::success(())
                    });
                }
            }
            Action::RequestLoan { .. } if self.single_loan => {
                checks.push(if state.has_loan() {
                    Validation::fail(PolicyViolation::LoanAlreadyOutstanding { loan: state.loan })
                } else {
                    Validation::success(())
                });
            }
            Action::CloseAccount if self.settled_close => {
                checks.push(if state.has_loan() {
                    Validation::fail(PolicyViolation::CloseWithLoan { loan: state.loan })
                } else {
                    Validation::success(())
                });
                checks.push(if state.balance != 0 {
                    Validation::fail(PolicyViolation::CloseWithBalance {
                        balance: state.balance,
                    })
                } else {
                    Validation::success(())
                });
            }
            _ => {}
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Evaluate and flatten the outcome into a `Result`.
    pub fn check(&self, context: &PolicyContext) -> Result<(), Vec<PolicyViolation>> {
        match self.evaluate(context) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
        }
    }
}

impl Default for PolicyRules {
    /// No rules: every action behaves exactly like [`transition`].
    fn default() -> Self {
        PolicyBuilder::new().build()
    }
}

/// Apply `action` under `rules`.
///
/// Actions blocked by the activity guard are the identity and are not
/// evaluated. A refused action leaves the snapshot unchanged and returns
/// every violation found.
///
/// # Example
///
/// ```rust
/// use teller::account::{Account, Action};
/// use teller::policy::{transition_with, PolicyRules, PolicyViolation};
///
/// let rules = PolicyRules::standard();
/// let refused = transition_with(&rules, &Account::active(50, 0), &Action::CloseAccount);
/// assert_eq!(refused, Err(vec![PolicyViolation::CloseWithBalance { balance: 50 }]));
/// ```
pub fn transition_with(
    rules: &PolicyRules,
    state: &Account,
    action: &Action,
) -> Result<Account, Vec<PolicyViolation>> {
    if !permits(state, action) {
        return Ok(*state);
    }
    rules.check(&PolicyContext::new(*state, *action))?;
    Ok(transition(state, action))
}
