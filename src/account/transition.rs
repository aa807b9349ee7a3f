//! The account transition function.
//!
//! `transition` is the whole of the account's behavior: a pure, total
//! function from a snapshot and an action to the next snapshot. It is
//! deliberately permissive; opening with any amount and closing with money
//! or a loan outstanding are both accepted. Stricter rules live in
//! [`crate::policy`] and are opt-in.

use super::action::{Action, Command, OPEN_ACCOUNT};
use super::error::ActionError;
use super::state::Account;

/// Whether `action` gets past the activity guard for `state`.
///
/// Every action except opening requires an active account.
pub fn permits(state: &Account, action: &Action) -> bool {
    state.is_active || action.is_open()
}

/// Compute the snapshot that follows `state` once `action` is applied.
///
/// A blocked action returns `state` unchanged.
///
/// # Example
///
/// ```rust
/// use teller::account::{transition, Account, Action};
///
/// let opened = transition(&Account::INITIAL, &Action::OpenAccount { amount: 500 });
/// assert_eq!(opened, Account::active(500, 0));
///
/// // nothing happens to an account that was never opened
/// let same = transition(&Account::INITIAL, &Action::Withdraw { amount: 50 });
/// assert_eq!(same, Account::INITIAL);
/// ```
pub fn transition(state: &Account, action: &Action) -> Account {
    if !permits(state, action) {
        return *state;
    }

    match *action {
        Action::OpenAccount { amount } => Account {
            balance: to_balance(amount),
            is_active: true,
            ..*state
        },
        Action::Deposit { amount } => Account {
            balance: state.balance.saturating_add_unsigned(amount),
            ..*state
        },
        Action::Withdraw { amount } => Account {
            balance: state.balance.saturating_sub_unsigned(amount),
            ..*state
        },
        Action::RequestLoan { amount } => Account {
            balance: state.balance.saturating_add_unsigned(amount),
            // an outstanding loan is kept; the new amount is still credited
            loan: if state.has_loan() { state.loan } else { amount },
            ..*state
        },
        Action::PayLoan => Account {
            balance: state.balance.saturating_sub_unsigned(state.loan),
            loan: 0,
            ..*state
        },
        Action::CloseAccount => Account::INITIAL,
    }
}

/// Whether a wire command gets past the activity guard for `state`.
///
/// Checked on the raw discriminator, before the command is decoded.
pub fn permits_command(state: &Account, command: &Command) -> bool {
    state.is_active || command.kind == OPEN_ACCOUNT
}

/// Apply a wire command.
///
/// The activity guard runs first: an inactive account returns unchanged
/// for anything but an open, without decoding the command. Past the
/// guard, a discriminator the machine does not know fails with
/// [`ActionError::UnknownAction`].
pub fn dispatch(state: &Account, command: &Command) -> Result<Account, ActionError> {
    if !permits_command(state, command) {
        return Ok(*state);
    }
    let action = Action::try_from(command)?;
    Ok(transition(state, &action))
}

fn to_balance(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
