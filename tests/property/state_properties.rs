//! Property-based tests for task list transitions.
//!
//! Uses proptest to verify, over arbitrary operation sequences:
//! 1. Non-empty adds preserve call order.
//! 2. No two tasks ever share an ID, including across delete-then-add.
//! 3. Toggling twice restores the list.
//! 4. Delete shrinks the list by one when present, not at all otherwise.
//! 5. Blank text never changes the list or the pending input.
//! 6. The completion summary stays within bounds.

use std::collections::HashSet;

use proptest::prelude::*;
use tasklist_model::{Task, TaskError, TaskId, TaskListState};

/// One user action against the list. Indices are reduced modulo the
/// current length so every generated sequence is applicable.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
    ToggleMissing,
    DeleteMissing,
    Input(String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-zA-Z0-9 ]{0,16}".prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::ToggleMissing),
        1 => Just(Op::DeleteMissing),
        1 => "[ a-z]{0,8}".prop_map(Op::Input),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..40)
}

fn pick(state: &TaskListState, n: usize) -> Option<TaskId> {
    if state.is_empty() {
        return None;
    }
    Some(state.tasks()[n % state.len()].id().clone())
}

/// Applies `op` the way the controller does: success replaces the
/// state, rejection records the error.
fn apply(state: &TaskListState, op: &Op) -> (TaskListState, Option<TaskId>) {
    match op {
        Op::Add(text) => match state.add(text) {
            Ok((next, id)) => (next, Some(id)),
            Err(e) => (state.with_error(e), None),
        },
        Op::Toggle(n) => match pick(state, *n) {
            Some(id) => (state.toggle(&id).unwrap_or_else(|e| state.with_error(e)), None),
            None => (state.clone(), None),
        },
        Op::Delete(n) => match pick(state, *n) {
            Some(id) => (state.delete(&id).unwrap_or_else(|e| state.with_error(e)), None),
            None => (state.clone(), None),
        },
        Op::ToggleMissing => {
            let e = state.toggle(&TaskId::new()).unwrap_err();
            (state.with_error(e), None)
        }
        Op::DeleteMissing => {
            let e = state.delete(&TaskId::new()).unwrap_err();
            (state.with_error(e), None)
        }
        Op::Input(text) => (state.with_pending_input(text.clone()), None),
    }
}

fn run(ops: &[Op]) -> (TaskListState, Vec<TaskId>) {
    let mut state = TaskListState::new();
    let mut issued = Vec::new();
    for op in ops {
        let (next, id) = apply(&state, op);
        state = next;
        issued.extend(id);
    }
    (state, issued)
}

proptest! {
    #[test]
    fn adds_preserve_call_order(texts in prop::collection::vec("[a-z][a-z ]{0,12}", 0..20)) {
        let mut state = TaskListState::new();
        for text in &texts {
            state = state.add(text).unwrap().0;
        }
        let stored: Vec<&str> = state.tasks().iter().map(Task::text).collect();
        let expected: Vec<&str> = texts.iter().map(|t| t.trim()).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn ids_are_never_shared(ops in arb_ops()) {
        let (state, issued) = run(&ops);
        let mut seen = HashSet::new();
        for id in &issued {
            prop_assert!(seen.insert(id.clone()), "id issued twice: {}", id);
        }
        let live: HashSet<_> = state.tasks().iter().map(|t| t.id().clone()).collect();
        prop_assert_eq!(live.len(), state.len());
    }

    #[test]
    fn toggle_is_an_involution(ops in arb_ops(), n in any::<usize>()) {
        let (state, _) = run(&ops);
        if let Some(id) = pick(&state, n) {
            let twice = state.toggle(&id).unwrap().toggle(&id).unwrap();
            prop_assert_eq!(twice.tasks(), state.tasks());
            prop_assert_eq!(twice.pending_input(), state.pending_input());
        }
    }

    #[test]
    fn delete_reduces_length_by_one(ops in arb_ops(), n in any::<usize>()) {
        let (state, _) = run(&ops);
        if let Some(id) = pick(&state, n) {
            let next = state.delete(&id).unwrap();
            prop_assert_eq!(next.len(), state.len() - 1);
            let expected: Vec<&Task> = state.tasks().iter().filter(|t| t.id() != &id).collect();
            let remaining: Vec<&Task> = next.tasks().iter().collect();
            prop_assert_eq!(remaining, expected);
        }
        let missing = TaskId::new();
        prop_assert_eq!(state.delete(&missing), Err(TaskError::NotFound(missing)));
    }

    #[test]
    fn blank_text_is_rejected(ops in arb_ops(), blank in "[ \t\n]{0,8}") {
        let (state, _) = run(&ops);
        prop_assert_eq!(state.add(&blank), Err(TaskError::EmptyText));
        let (after, _) = apply(&state, &Op::Add(blank));
        prop_assert_eq!(after.tasks(), state.tasks());
        prop_assert_eq!(after.pending_input(), state.pending_input());
    }

    #[test]
    fn summary_within_bounds(ops in arb_ops()) {
        let (state, _) = run(&ops);
        let summary = state.completion_summary();
        prop_assert!(summary.completed <= summary.total);
        prop_assert_eq!(summary.total, state.len());
        let completed = state.tasks().iter().filter(|t| t.is_completed()).count();
        prop_assert_eq!(summary.completed, completed);
    }
}
