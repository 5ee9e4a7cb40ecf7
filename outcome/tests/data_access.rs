//! Tests for guarded access to the success payload.
//!
//! Reading the payload of a failed outcome is a contract violation and
//! must surface as a [`DataAccessError`] on every construction path,
//! never as a silent default value.

mod common;

use common::fixtures::Timeout;
use outcome::{DataAccessError, ErrorDetail, Outcome};
use rstest::rstest;

#[rstest]
#[case::message(Outcome::error("An error occurred"))]
#[case::message_and_details(Outcome::error_with(
    "An error occurred",
    [ErrorDetail::with_code("ERR001", "Error 1 details")],
))]
#[case::cause(Outcome::error_caused_by(Timeout { seconds: 5 }))]
#[case::message_and_cause(Outcome::error_with_cause("boom", Timeout { seconds: 5 }))]
#[case::rewrapped(Outcome::error_from(&Outcome::<String>::error("An error occurred")))]
fn data_is_guarded_on_every_failure_path(#[case] outcome: Outcome<i32>) {
    assert_eq!(outcome.data(), Err(DataAccessError));
    assert_eq!(outcome.into_data(), Err(DataAccessError));
}

#[rstest]
fn data_borrows_the_payload_on_success() {
    let outcome = Outcome::ok(42);
    assert_eq!(outcome.data(), Ok(&42));
    assert_eq!(outcome.expect_data(), &42);
    assert_eq!(outcome.into_data(), Ok(42));
}

#[rstest]
fn a_failed_outcome_never_yields_a_default_payload() {
    // The guard must fire rather than handing back `i32::default()`.
    let outcome = Outcome::<i32>::error("bad");
    match outcome.data() {
        Err(violation) => assert_eq!(
            violation.to_string(),
            "cannot access `data` when the outcome represents failure"
        ),
        Ok(data) => panic!("guard should have fired, got {data}"),
    }
}

#[test]
#[should_panic(expected = "cannot access `data` when the outcome represents failure")]
fn expect_data_panics_with_the_guard_message() {
    let outcome = Outcome::<String>::error("An error occurred");
    let _ = outcome.expect_data();
}

#[rstest]
fn the_violation_is_not_a_represented_failure() {
    // Constructing a failure never signals the contract violation, and the
    // two vocabularies stay distinct types.
    let outcome = Outcome::<i32>::error("bad");
    assert!(outcome.is_failure());
    let violation = outcome.data().expect_err("guard should fire");
    assert_eq!(violation, DataAccessError);
    assert_ne!(violation.to_string(), outcome.message());
}
