//! Actions accepted by the account machine and their wire form.
//!
//! `Action` is the typed command a host dispatches directly. `Command` is
//! the loosely-typed `{"type": ..., "payload": {"amount": ...}}` shape a
//! display layer sends; decoding it is the only place an unrecognized
//! action can appear.

use super::error::ActionError;
use serde::{Deserialize, Serialize};

pub const OPEN_ACCOUNT: &str = "openAccount";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const REQUEST_LOAN: &str = "requestLoan";
pub const PAY_LOAN: &str = "payLoan";
pub const CLOSE_ACCOUNT: &str = "closeAccount";

/// An immutable command submitted to the account machine.
///
/// Each variant carries only the payload it needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    OpenAccount { amount: u64 },
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
    RequestLoan { amount: u64 },
    PayLoan,
    CloseAccount,
}

impl Action {
    /// Wire discriminator of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenAccount { .. } => OPEN_ACCOUNT,
            Self::Deposit { .. } => DEPOSIT,
            Self::Withdraw { .. } => WITHDRAW,
            Self::RequestLoan { .. } => REQUEST_LOAN,
            Self::PayLoan => PAY_LOAN,
            Self::CloseAccount => CLOSE_ACCOUNT,
        }
    }

    /// Amount payload, if this action carries one.
    pub fn amount(&self) -> Option<u64> {
        match *self {
            Self::OpenAccount { amount }
            | Self::Deposit { amount }
            | Self::Withdraw { amount }
            | Self::RequestLoan { amount } => Some(amount),
            Self::PayLoan | Self::CloseAccount => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::OpenAccount { .. })
    }
}

/// Amount carried by a wire command.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Payload {
    pub amount: u64,
}

/// Wire form of an action.
///
/// # Example
///
/// ```rust
/// use teller::account::{Action, Command};
///
/// let command = Command::from_json(r#"{"type":"deposit","payload":{"amount":150}}"#).unwrap();
/// assert_eq!(Action::try_from(&command).unwrap(), Action::Deposit { amount: 150 });
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Command {
    /// Command without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Command carrying an amount.
    pub fn with_amount(kind: impl Into<String>, amount: u64) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(Payload { amount }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ActionError> {
        Ok(serde_json::to_string(self)?)
    }

    fn amount(&self) -> Result<u64, ActionError> {
        self.payload
            .map(|p| p.amount)
            .ok_or_else(|| ActionError::MissingPayload {
                kind: self.kind.clone(),
            })
    }
}

impl TryFrom<&Command> for Action {
    type Error = ActionError;

    fn try_from(command: &Command) -> Result<Self, Self::Error> {
        let action = match command.kind.as_str() {
            OPEN_ACCOUNT => Action::OpenAccount {
                amount: command.amount()?,
            },
            DEPOSIT => Action::Deposit {
                amount: command.amount()?,
            },
            WITHDRAW => Action::Withdraw {
                amount: command.amount()?,
            },
            REQUEST_LOAN => Action::RequestLoan {
                amount: command.amount()?,
            },
            PAY_LOAN => Action::PayLoan,
            CLOSE_ACCOUNT => Action::CloseAccount,
            other => {
                return Err(ActionError::UnknownAction {
                    kind: other.to_string(),
                })
            }
        };
        Ok(action)
    }
}

impl TryFrom<Command> for Action {
    type Error = ActionError;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        Action::try_from(&command)
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action.amount() {
            Some(amount) => Command::with_amount(action.kind(), amount),
            None => Command::new(action.kind()),
        }
    }
}
