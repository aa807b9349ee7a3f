//! The account state machine.
//!
//! - [`Account`]: the single snapshot (`balance`, `loan`, `is_active`)
//! - [`Action`]: the six commands, and [`Command`] for their wire form
//! - [`transition`]: the pure function mapping a snapshot and an action to
//!   the next snapshot
//! - [`dispatch`]: activity guard, wire decoding and transition, failing on
//!   unknown actions that get past the guard

mod action;
mod error;
mod state;
mod transition;

pub use action::{
    Action, Command, Payload, CLOSE_ACCOUNT, DEPOSIT, OPEN_ACCOUNT, PAY_LOAN, REQUEST_LOAN,
    WITHDRAW,
};
pub use error::ActionError;
pub use state::Account;
pub use transition::{dispatch, permits, permits_command, transition};
