//! Opt-in policy enforcement for account transitions.
//!
//! The bare transition function accepts any opening amount and closes an
//! account whatever it still holds. These rules harden that contract for
//! hosts that want it, using Stillwater's `Validation` so that every
//! broken rule is reported at once instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use teller::account::{Account, Action};
//! use teller::policy::{transition_with, PolicyBuilder};
//!
//! let rules = PolicyBuilder::new().min_opening_deposit(500).build();
//!
//! let opened = transition_with(&rules, &Account::INITIAL, &Action::OpenAccount { amount: 500 });
//! assert_eq!(opened, Ok(Account::active(500, 0)));
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::PolicyBuilder;
pub use context::PolicyContext;
pub use rules::{transition_with, PolicyCheck, PolicyRules, STANDARD_MIN_OPENING_DEPOSIT};
pub use violations::PolicyViolation;
