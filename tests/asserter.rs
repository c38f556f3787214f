use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use doublecheck::{
    arg, asserter, repeat, ArgumentList, Asserter, CallHistory, CallMatcher, DefaultCallWriter,
    InterceptedCall, MethodId,
};

const ADD: MethodId = MethodId::new("Calculator", "add", &["a", "b"], true);
const CLEAR: MethodId = MethodId::new("Calculator", "clear", &[], false);

fn record_add(history: &CallHistory, a: i32, b: i32) {
    let call = InterceptedCall::new(
        Arc::new(()),
        ADD,
        ArgumentList::new(&["a", "b"], vec![arg(a), arg(b)]),
    );
    history.append(call.freeze());
}

fn record_clear(history: &CallHistory) {
    let call = InterceptedCall::new(Arc::new(()), CLEAR, ArgumentList::new(&[], Vec::new()));
    history.append(call.freeze());
}

fn add_matcher(a: i32) -> impl CallMatcher {
    asserter::closure(
        move |call| call.method().name() == "add" && call.argument::<i32>(0) == Some(&a),
        move |writer| writer.write(&format!("Calculator::add(a: {a}, b: <any>)")),
    )
}

#[test]
fn satisfied_constraint_succeeds_silently() {
    let history = CallHistory::new();
    record_add(&history, 1, 2);
    record_add(&history, 2, 3);

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let result = asserter.assert_was_called(&add_matcher(2), &repeat::exactly(1));
    assert!(result.is_ok());
}

#[test]
fn counting_is_exhaustive_even_when_the_outcome_is_already_decided() {
    let history = CallHistory::new();
    for i in 0..5 {
        record_add(&history, i, i);
    }

    let evaluated = AtomicUsize::new(0);
    let matcher = asserter::closure(
        |call| {
            evaluated.fetch_add(1, Ordering::Relaxed);
            call.method().name() == "add"
        },
        |writer| writer.write("Calculator::add(a: <any>, b: <any>)"),
    );

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    // Violated after the second match already, counted to the end anyway.
    let result = asserter.assert_was_called(&matcher, &repeat::no_more_than(1));
    assert!(result.is_err());
    assert_eq!(5, evaluated.load(Ordering::Relaxed));
    assert!(result
        .unwrap_err()
        .message()
        .contains("but found it #5 times among the calls:"));
}

#[test]
fn empty_history_message() {
    let history = CallHistory::new();

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let err = asserter
        .assert_was_called(&add_matcher(1), &repeat::at_least(1))
        .unwrap_err();

    assert_eq!(
        "\n\
         \n\
         \x20 Assertion failed for the following call:\n\
         \x20   Calculator::add(a: 1, b: <any>)\n\
         \x20 Expected to find it at least once but no calls were made to the fake object.\n\
         \n",
        err.message()
    );
}

#[test]
fn too_many_matches_message_lists_every_call_in_order() {
    let history = CallHistory::new();
    record_add(&history, 1, 2);
    record_add(&history, 1, 2);

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let err = asserter
        .assert_was_called(&add_matcher(1), &repeat::exactly(1))
        .unwrap_err();

    assert_eq!(
        "\n\
         \n\
         \x20 Assertion failed for the following call:\n\
         \x20   Calculator::add(a: 1, b: <any>)\n\
         \x20 Expected to find it exactly once but found it #2 times among the calls:\n\
         \x20   Calculator::add(a: 1, b: 2)\n\
         \x20   Calculator::add(a: 1, b: 2)\n\
         \n",
        err.message()
    );
}

#[test]
fn zero_matches_on_a_non_empty_history_still_lists_the_calls() {
    let history = CallHistory::new();
    record_clear(&history);
    record_add(&history, 7, 7);

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let err = asserter
        .assert_was_called(&add_matcher(1), &repeat::at_least(1))
        .unwrap_err();

    // The "no calls were made" branch depends on the whole history being
    // empty, not on the matched subset.
    assert_eq!(
        "\n\
         \n\
         \x20 Assertion failed for the following call:\n\
         \x20   Calculator::add(a: 1, b: <any>)\n\
         \x20 Expected to find it at least once but found it #0 times among the calls:\n\
         \x20   Calculator::clear()\n\
         \x20   Calculator::add(a: 7, b: 7)\n\
         \n",
        err.message()
    );
}

#[test]
fn never_succeeds_on_an_empty_history() {
    let history = CallHistory::new();

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let result = asserter.assert_was_called(&add_matcher(1), &repeat::never());
    assert!(result.is_ok());
}

#[test]
fn only_the_repeat_constraint_decides_the_outcome() {
    let history = CallHistory::new();
    record_add(&history, 1, 2);

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);
    let matcher = add_matcher(1);

    assert!(asserter
        .assert_was_called(&matcher, &repeat::exactly(1))
        .is_ok());
    assert!(asserter
        .assert_was_called(&matcher, &repeat::exactly(2))
        .is_err());
    assert!(asserter
        .assert_was_called(&matcher, &repeat::closure(|_| true, "any number of times"))
        .is_ok());
    assert!(asserter
        .assert_was_called(&matcher, &repeat::closure(|_| false, "impossibly often"))
        .is_err());
}

#[test]
fn error_display_is_the_rendered_message() {
    let history = CallHistory::new();

    let call_writer = DefaultCallWriter::new();
    let asserter = Asserter::for_history(&history, &call_writer);

    let err = asserter
        .assert_was_called(&add_matcher(1), &repeat::at_least(1))
        .unwrap_err();

    assert_eq!(err.message(), err.to_string());
}
