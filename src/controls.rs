//! The controls a display layer wires to the account.
//!
//! A control knows which action it issues and when it should be enabled;
//! rendering it is the host's business.

use crate::account::{Account, Action};
use crate::config::ControlAmounts;
use crate::core::Guard;

/// One of the six account buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Control {
    OpenAccount,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    CloseAccount,
}

impl Control {
    /// All controls in display order.
    pub const ALL: [Control; 6] = [
        Control::OpenAccount,
        Control::Deposit,
        Control::Withdraw,
        Control::RequestLoan,
        Control::PayLoan,
        Control::CloseAccount,
    ];

    pub fn label(&self, amounts: &ControlAmounts) -> String {
        match self {
            Self::OpenAccount => "Open account".to_string(),
            Self::Deposit => format!("Deposit {}", amounts.deposit),
            Self::Withdraw => format!("Withdraw {}", amounts.withdraw),
            Self::RequestLoan => format!("Request a loan of {}", amounts.loan),
            Self::PayLoan => "Pay loan".to_string(),
            Self::CloseAccount => "Close account".to_string(),
        }
    }

    /// The fixed action this control dispatches.
    pub fn action(&self, amounts: &ControlAmounts) -> Action {
        match self {
            Self::OpenAccount => Action::OpenAccount {
                amount: amounts.open,
            },
            Self::Deposit => Action::Deposit {
                amount: amounts.deposit,
            },
            Self::Withdraw => Action::Withdraw {
                amount: amounts.withdraw,
            },
            Self::RequestLoan => Action::RequestLoan {
                amount: amounts.loan,
            },
            Self::PayLoan => Action::PayLoan,
            Self::CloseAccount => Action::CloseAccount,
        }
    }

    /// Enablement rule: open only while inactive, everything else only
    /// while active.
    pub fn guard(&self) -> Guard<Account> {
        match self {
            Self::OpenAccount => Guard::new(|a: &Account| !a.is_active),
            _ => Guard::new(|a: &Account| a.is_active),
        }
    }

    pub fn is_enabled(&self, account: &Account) -> bool {
        self.guard().check(account)
    }
}

/// Controls enabled for `account`, in display order.
pub fn enabled_controls(account: &Account) -> Vec<Control> {
    Control::ALL
        .into_iter()
        .filter(|c| c.is_enabled(account))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_open_is_enabled_while_inactive() {
        assert_eq!(enabled_controls(&Account::INITIAL), vec![Control::OpenAccount]);
    }

    #[test]
    fn everything_but_open_is_enabled_while_active() {
        let enabled = enabled_controls(&Account::active(500, 0));
        assert_eq!(enabled.len(), 5);
        assert!(!enabled.contains(&Control::OpenAccount));
    }

    #[test]
    fn default_amounts_drive_stock_actions() {
        let amounts = ControlAmounts::default();

        assert_eq!(
            Control::OpenAccount.action(&amounts),
            Action::OpenAccount { amount: 500 }
        );
        assert_eq!(
            Control::Deposit.action(&amounts),
            Action::Deposit { amount: 150 }
        );
        assert_eq!(
            Control::Withdraw.action(&amounts),
            Action::Withdraw { amount: 50 }
        );
        assert_eq!(
            Control::RequestLoan.action(&amounts),
            Action::RequestLoan { amount: 5000 }
        );
        assert_eq!(Control::PayLoan.action(&amounts), Action::PayLoan);
        assert_eq!(Control::CloseAccount.action(&amounts), Action::CloseAccount);
    }

    #[test]
    fn labels_show_configured_amounts() {
        let amounts = ControlAmounts {
            deposit: 200,
            ..ControlAmounts::default()
        };

        assert_eq!(Control::Deposit.label(&amounts), "Deposit 200");
        assert_eq!(Control::RequestLoan.label(&amounts), "Request a loan of 5000");
    }
}
