//! Property-based tests for WorkflowService.

use proptest::prelude::*;

use crate::actor::{Actor, ActorRole};
use crate::ledger::types::TransactionKind;
use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::{Decision, TransactionStatus, WorkflowAction};

fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Approved),
        Just(TransactionStatus::Rejected),
    ]
}

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![Just(Decision::Approved), Just(Decision::Rejected)]
}

fn arb_actor() -> impl Strategy<Value = Actor> {
    let role = prop_oneof![
        Just(ActorRole::President),
        Just(ActorRole::Secretary),
        Just(ActorRole::Reporter),
        Just(ActorRole::Treasurer),
        Just(ActorRole::Member),
    ];
    (1i64..10_000, role).prop_map(|(id, role)| Actor::new(id, role))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Pending + decision → the decision's target status, with the actor recorded.
    #[test]
    fn prop_pending_decision_succeeds(decision in arb_decision(), actor in arb_actor()) {
        let action = WorkflowService::decide(
            TransactionKind::Expense,
            TransactionStatus::Pending,
            decision,
            actor,
        ).unwrap();

        prop_assert_eq!(action.new_status(), decision.target_status());
        let WorkflowAction::Decide { decided_by, .. } = action;
        prop_assert_eq!(decided_by, actor);
    }

    /// A decision succeeds at most once: applying any second decision to
    /// the outcome of the first always fails.
    #[test]
    fn prop_decide_at_most_once(
        first in arb_decision(),
        second in arb_decision(),
        actor in arb_actor(),
    ) {
        let after_first = WorkflowService::decide(
            TransactionKind::Expense,
            TransactionStatus::Pending,
            first,
            actor,
        ).unwrap().new_status();

        let result = WorkflowService::decide(TransactionKind::Expense, after_first, second, actor);
        prop_assert!(
            matches!(result, Err(WorkflowError::InvalidTransition { .. })),
            "Second decision must fail, got: {:?}",
            result
        );
    }

    /// Every successful transition leaves pending and lands in a terminal state.
    #[test]
    fn prop_success_implies_terminal(
        status in arb_status(),
        decision in arb_decision(),
        actor in arb_actor(),
    ) {
        if let Ok(action) = WorkflowService::decide(TransactionKind::Expense, status, decision, actor) {
            prop_assert_eq!(status, TransactionStatus::Pending);
            prop_assert!(action.new_status().is_terminal());
        }
    }

    /// Income is never decidable, whatever its recorded status.
    #[test]
    fn prop_income_never_decidable(
        status in arb_status(),
        decision in arb_decision(),
        actor in arb_actor(),
    ) {
        let result = WorkflowService::decide(TransactionKind::Income, status, decision, actor);
        prop_assert!(matches!(result, Err(WorkflowError::IncomeNotDecidable)));
    }
}
