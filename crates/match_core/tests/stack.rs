mod common;

use common::job;
use match_core::{Advance, JobId, StackPhase, SwipeDirection, SwipeStack};

#[test]
fn starts_loading_and_activates_on_batch() {
    let mut stack = SwipeStack::new();
    assert_eq!(stack.phase(), StackPhase::Loading);
    assert!(stack.current_job().is_none());

    assert!(!stack.initialize(vec![job("a"), job("b")]));
    assert_eq!(stack.phase(), StackPhase::Active);
    assert_eq!(stack.cursor(), 0);
    assert_eq!(stack.current_job().unwrap().id, JobId::new("a"));
    assert_eq!(stack.next_job().unwrap().id, JobId::new("b"));
    assert_eq!(stack.remaining(), 2);
}

#[test]
fn n_decisions_exhaust_once() {
    let mut stack = SwipeStack::new();
    stack.initialize(vec![job("a"), job("b"), job("c")]);

    let mut exhaustions = 0;
    for direction in [SwipeDirection::Left, SwipeDirection::Right, SwipeDirection::Left] {
        let request = stack.on_decision(direction).expect("decision");
        assert_eq!(request.interested, direction == SwipeDirection::Right);
        if let Advance::Moved { exhausted: true } =
            stack.complete_decision(request.batch, &request.job_id)
        {
            exhaustions += 1;
        }
    }

    assert_eq!(stack.cursor(), 3);
    assert_eq!(exhaustions, 1);
    assert_eq!(stack.phase(), StackPhase::Exhausted);
    assert!(stack.current_job().is_none());
    assert!(stack.on_decision(SwipeDirection::Right).is_none());
}

#[test]
fn double_trigger_submits_once() {
    let mut stack = SwipeStack::new();
    stack.initialize(vec![job("a"), job("b")]);

    let first = stack.on_decision(SwipeDirection::Right);
    let second = stack.on_decision(SwipeDirection::Right);
    assert!(first.is_some());
    assert!(second.is_none());
    assert!(stack.decision_in_flight());
    assert_eq!(stack.cursor(), 0);
}

#[test]
fn stale_settlement_does_not_advance_new_batch() {
    let mut stack = SwipeStack::new();
    stack.initialize(vec![job("a")]);
    let request = stack.on_decision(SwipeDirection::Left).unwrap();

    stack.begin_refresh();
    stack.initialize(vec![job("x"), job("y")]);

    assert_eq!(
        stack.complete_decision(request.batch, &request.job_id),
        Advance::Stale
    );
    assert_eq!(stack.cursor(), 0);
    assert!(!stack.decision_in_flight());
}

#[test]
fn settlement_without_request_is_stale() {
    let mut stack = SwipeStack::new();
    stack.initialize(vec![job("a")]);
    let batch = stack.batch();

    assert_eq!(stack.complete_decision(batch, &JobId::new("a")), Advance::Stale);
    assert_eq!(stack.cursor(), 0);
}

#[test]
fn empty_batch_is_exhausted_immediately() {
    let mut stack = SwipeStack::new();
    assert!(stack.initialize(Vec::new()));
    assert_eq!(stack.phase(), StackPhase::Exhausted);
    assert_eq!(stack.remaining(), 0);
}

#[test]
fn failed_refresh_restores_previous_phase() {
    let mut stack = SwipeStack::new();
    stack.begin_refresh();
    stack.refresh_failed();
    assert_eq!(stack.phase(), StackPhase::Exhausted);

    stack.initialize(vec![job("a")]);
    stack.begin_refresh();
    stack.refresh_failed();
    assert_eq!(stack.phase(), StackPhase::Active);
    assert_eq!(stack.current_job().unwrap().id, JobId::new("a"));
}
