//! Property-based tests for the account transition function.
//!
//! These tests use proptest to verify the transition table holds across
//! many randomly generated snapshots and actions.

use proptest::prelude::*;
use teller::account::{dispatch, transition, Account, Action, ActionError, Command};
use teller::policy::{transition_with, PolicyRules};

const AMOUNT: u64 = 1_000_000;
const BALANCE: i64 = 10_000_000;

prop_compose! {
    fn active_account()(balance in -BALANCE..BALANCE, loan in prop_oneof![Just(0u64), 1..AMOUNT]) -> Account {
        Account::active(balance, loan)
    }
}

prop_compose! {
    fn any_action()(variant in 0..6u8, amount in 0..AMOUNT) -> Action {
        match variant {
            0 => Action::OpenAccount { amount },
            1 => Action::Deposit { amount },
            2 => Action::Withdraw { amount },
            3 => Action::RequestLoan { amount },
            4 => Action::PayLoan,
            _ => Action::CloseAccount,
        }
    }
}

proptest! {
    #[test]
    fn inactive_account_ignores_non_open_actions(action in any_action()) {
        prop_assume!(!action.is_open());
        prop_assert_eq!(transition(&Account::INITIAL, &action), Account::INITIAL);
    }

    #[test]
    fn open_from_initial_activates_with_amount(amount in 0..AMOUNT) {
        let next = transition(&Account::INITIAL, &Action::OpenAccount { amount });
        prop_assert_eq!(next, Account::active(amount as i64, 0));
    }

    #[test]
    fn deposit_only_adds_amount(state in active_account(), amount in 0..AMOUNT) {
        let next = transition(&state, &Action::Deposit { amount });
        prop_assert_eq!(next, Account { balance: state.balance + amount as i64, ..state });
    }

    #[test]
    fn withdraw_only_subtracts_amount(state in active_account(), amount in 0..AMOUNT) {
        let next = transition(&state, &Action::Withdraw { amount });
        prop_assert_eq!(next, Account { balance: state.balance - amount as i64, ..state });
    }

    #[test]
    fn request_loan_always_credits_and_records_only_first(state in active_account(), amount in 0..AMOUNT) {
        let next = transition(&state, &Action::RequestLoan { amount });

        prop_assert_eq!(next.balance, state.balance + amount as i64);
        prop_assert!(next.is_active);
        if state.loan == 0 {
            prop_assert_eq!(next.loan, amount);
        } else {
            prop_assert_eq!(next.loan, state.loan);
        }
    }

    #[test]
    fn pay_loan_debits_loan_and_clears_it(state in active_account()) {
        let next = transition(&state, &Action::PayLoan);
        prop_assert_eq!(next, Account::active(state.balance - state.loan as i64, 0));
    }

    #[test]
    fn close_always_returns_initial(state in active_account()) {
        prop_assert_eq!(transition(&state, &Action::CloseAccount), Account::INITIAL);
    }

    #[test]
    fn transition_is_deterministic(state in active_account(), action in any_action()) {
        prop_assert_eq!(transition(&state, &action), transition(&state, &action));
    }

    #[test]
    fn inactive_results_are_always_zeroed(
        actions in prop::collection::vec(any_action(), 0..20)
    ) {
        let mut state = Account::INITIAL;
        for action in &actions {
            state = transition(&state, action);
            if !state.is_active {
                prop_assert_eq!(state, Account::INITIAL);
            }
        }
    }

    #[test]
    fn wire_round_trip_matches_typed_transition(state in active_account(), action in any_action()) {
        let via_wire = dispatch(&state, &Command::from(action)).unwrap();
        prop_assert_eq!(via_wire, transition(&state, &action));
    }

    #[test]
    fn unknown_kinds_never_produce_a_state(kind in "[a-z]{1,12}", state in active_account()) {
        prop_assume!(![
            "openAccount", "deposit", "withdraw", "requestLoan", "payLoan", "closeAccount",
        ].contains(&kind.as_str()));

        let result = dispatch(&state, &Command::new(kind.clone()));
        prop_assert!(
            matches!(result, Err(ActionError::UnknownAction { kind: ref named }) if *named == kind),
            "expected UnknownAction for kind {:?}", kind
        );
    }

    #[test]
    fn inactive_account_ignores_unknown_kinds(kind in "[a-z]{1,12}") {
        prop_assume!(kind != "openAccount");
        prop_assert_eq!(dispatch(&Account::INITIAL, &Command::new(kind)).unwrap(), Account::INITIAL);
    }

    #[test]
    fn standard_policy_never_closes_unsettled_account(state in active_account()) {
        let result = transition_with(&PolicyRules::standard(), &state, &Action::CloseAccount);
        if state.is_settled() {
            prop_assert_eq!(result, Ok(Account::INITIAL));
        } else {
            prop_assert!(result.is_err());
        }
    }
}
