//! Tests for the domain error payload.

use super::*;
use crate::middleware::trace::TraceId;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::invalid_credentials("nope"), ErrorCode::InvalidCredentials)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::unauthorized("no token"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("Car not found")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "Car not found" })
    );

    let with_trace = Error::invalid_request("bad")
        .with_trace_id("abc")
        .with_details(json!({ "field": "year" }));
    let value = serde_json::to_value(with_trace).expect("serialise");
    assert_eq!(value["traceId"], "abc");
    assert_eq!(value["details"]["field"], "year");
}

#[rstest]
fn without_details_keeps_message_and_trace() {
    let error = Error::internal("database error")
        .with_trace_id("abc")
        .with_details(json!({ "secret": "x" }));
    let stripped = error.without_details();
    assert_eq!(stripped.message(), "database error");
    assert_eq!(stripped.trace_id(), Some("abc"));
    assert!(stripped.details().is_none());
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::conflict("User already exists").to_string(), "User already exists");
}
