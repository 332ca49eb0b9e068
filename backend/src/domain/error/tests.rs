//! Tests for the error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case::not_found(Error::not_found("missing"), ErrorCode::NotFound)]
#[case::unavailable(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case::internal(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_the_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let bare = serde_json::to_value(Error::not_found("missing")).expect("serialise");
    assert_eq!(bare, json!({ "code": "not_found", "message": "missing" }));

    let full = serde_json::to_value(
        Error::service_unavailable("room service down")
            .with_trace_id(TRACE_ID)
            .with_details(json!({ "service": "room" })),
    )
    .expect("serialise");
    assert_eq!(
        full,
        json!({
            "code": "service_unavailable",
            "message": "room service down",
            "traceId": TRACE_ID,
            "details": { "service": "room" },
        })
    );
}

#[rstest]
fn display_prints_the_message() {
    assert_eq!(Error::internal("boom").to_string(), "boom");
}
