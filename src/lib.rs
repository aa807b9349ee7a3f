//! Teller: a pure functional bank account state machine
//!
//! Teller follows the "pure core, imperative shell" philosophy. The account
//! lifecycle (open, deposit, withdraw, request loan, pay loan, close) is a
//! single pure function from a snapshot and an action to the next snapshot.
//! A [`Session`](session::Session) owns the current snapshot and records
//! history around it.
//!
//! # Core Concepts
//!
//! - **Account**: the `{balance, loan, is_active}` snapshot
//! - **Action**: a command value, one variant per operation
//! - **Transition**: `transition(&state, &action) -> state`
//! - **Policy**: opt-in rules that refuse actions the bare machine accepts
//!
//! # Example
//!
//! ```rust
//! use teller::account::{transition, Account, Action};
//!
//! let state = Account::INITIAL;
//! let state = transition(&state, &Action::OpenAccount { amount: 500 });
//! let state = transition(&state, &Action::RequestLoan { amount: 5000 });
//! let state = transition(&state, &Action::PayLoan);
//!
//! assert_eq!(state, Account::active(500, 0));
//!
//! let state = transition(&state, &Action::CloseAccount);
//! assert_eq!(state, Account::INITIAL);
//! ```

pub mod account;
pub mod config;
pub mod controls;
pub mod core;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use account::{dispatch, transition, Account, Action, ActionError, Command};
pub use config::ControlAmounts;
pub use controls::Control;
pub use self::core::{Guard, State, StateHistory, StateTransition};
pub use policy::{PolicyBuilder, PolicyRules, PolicyViolation};
pub use session::{Outcome, Session};
