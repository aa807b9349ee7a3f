//! Bank Session
//!
//! This example drives the account machine the way a display layer would.
//!
//! Key concepts:
//! - Controls issue fixed-amount actions and are enabled from the snapshot
//! - The bare machine is permissive; a standard policy hardens it
//! - Wire commands fail fast on unknown action types
//!
//! Run with: cargo run --example bank_session

use teller::account::{dispatch, Account, Command};
use teller::config::ControlAmounts;
use teller::controls::{enabled_controls, Control};
use teller::core::State;
use teller::policy::PolicyRules;
use teller::session::{Outcome, Session};

fn show(account: &Account) {
    println!(
        "  [{}] balance: {}, loan: {}",
        account.name(),
        account.balance,
        account.loan
    );
}

fn click(session: &mut Session, control: Control, amounts: &ControlAmounts) {
    if !control.is_enabled(session.current_state()) {
        println!("  {} is disabled", control.label(amounts));
        return;
    }

    println!("  > {}", control.label(amounts));
    match session.apply(control.action(amounts)) {
        Outcome::Applied(account) => show(&account),
        Outcome::Ignored => println!("  account is not open"),
        Outcome::Rejected { violations } => {
            for violation in violations {
                println!("  ✗ {}", violation);
            }
        }
    }
}

fn main() {
    println!("=== Bank Session Example ===\n");
    let amounts = ControlAmounts::default();

    println!("Scenario 1: Permissive Session");
    let mut session = Session::new();
    show(session.current_state());
    for control in [
        Control::Deposit,
        Control::OpenAccount,
        Control::Deposit,
        Control::RequestLoan,
        Control::RequestLoan,
        Control::PayLoan,
        Control::CloseAccount,
    ] {
        click(&mut session, control, &amounts);
    }
    println!("  actions applied: {:?}\n", session.history().actions());

    println!("Scenario 2: Standard Policy");
    let mut session = Session::with_policy(PolicyRules::standard());
    for control in [
        Control::OpenAccount,
        Control::RequestLoan,
        Control::CloseAccount,
        Control::PayLoan,
        Control::Withdraw,
    ] {
        click(&mut session, control, &amounts);
    }
    println!(
        "  enabled: {:?}\n",
        enabled_controls(session.current_state())
    );

    println!("Scenario 3: Wire Commands");
    let json = r#"{"type":"transfer","payload":{"amount":10}}"#;
    match Command::from_json(json).and_then(|c| dispatch(&Account::INITIAL, &c)) {
        Ok(account) => show(&account),
        Err(err) => println!("  ✗ {}", err),
    }

    println!("\n=== Example Complete ===");
}
