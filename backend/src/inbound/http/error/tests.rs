//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_credentials("Invalid email or password"), StatusCode::BAD_REQUEST)]
#[case(Error::conflict("User already exists"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("Car not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn render(error: &Error, expected_status: StatusCode) -> (Error, Option<String>) {
    let response = ResponseError::error_response(error);
    assert_eq!(response.status(), expected_status);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (body, header)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_message_but_drop_details(trace_id: String) {
    let error = Error::internal("car repository error: relation \"cars\" does not exist")
        .with_trace_id(trace_id)
        .with_details(json!({ "secret": "x" }));

    let (body, header) = render(&error, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(body.message(), error.message());
    assert_eq!(body.trace_id(), Some(TRACE_ID));
    assert!(body.details().is_none());
    assert_eq!(header.as_deref(), Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_details(trace_id: String) {
    let error = Error::invalid_request("Missing required car fields")
        .with_trace_id(trace_id)
        .with_details(json!({ "missing": ["model"] }));

    let (body, _) = render(&error, StatusCode::BAD_REQUEST).await;
    assert_eq!(body, error);
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_header() {
    let (body, header) = render(&Error::not_found("Car not found"), StatusCode::NOT_FOUND).await;
    assert!(header.is_none());
    assert_eq!(body.message(), "Car not found");
}
