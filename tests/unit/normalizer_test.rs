//! Tests for result normalization
//!
//! `create_result` combines every extractor into a single record and must be
//! defined for any combination of error and response.

use std::sync::Arc;

use serde_json::json;
use service_result::{
    Flash, Normalizer, NormalizerConfig, Paging, Response, create_result, error_value,
    get_body, get_error_message, get_result, get_status_code,
};

use crate::common::{flash_response, paged_response, plain_response, unprocessable_response};

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn error_is_not_successful() {
    let result = create_result(Some(json!("Boom")), Some(Response::new()));
    assert!(!result.success);
}

#[test]
fn error_is_passed_through() {
    let result = create_result(Some(json!("Boom")), Some(Response::new()));
    assert_eq!(result.error, Some(json!("Boom")));
    assert_eq!(result.error_message, Some(json!("Boom")));
}

#[test]
fn structured_error_exposes_message() {
    let error = json!({"message": "timeout", "code": "ETIMEDOUT"});
    let result = create_result(Some(error.clone()), None);

    assert!(!result.success);
    assert_eq!(result.error, Some(error));
    assert_eq!(result.error_message, Some(json!("timeout")));
    assert_eq!(result.error_text().as_deref(), Some("timeout"));
}

#[test]
fn structured_error_without_message_is_its_own_message() {
    let error = json!({"code": 500});
    assert_eq!(get_error_message(Some(&error)), Some(error.clone()));
}

#[test]
fn empty_message_falls_back_to_error() {
    let error = json!({"message": ""});
    assert_eq!(get_error_message(Some(&error)), Some(error.clone()));
}

#[test]
fn falsy_error_counts_as_success() {
    for error in [json!(null), json!(false), json!(0), json!("")] {
        let result = create_result(Some(error.clone()), None);
        assert!(result.success, "error {error} should not count");
        assert_eq!(result.error_message, None);
        assert_eq!(result.error, Some(error));
    }
}

#[test]
fn rust_errors_convert_to_message_objects() {
    let err = std::io::Error::other("connection reset");
    let result = create_result(Some(error_value(&err)), None);

    assert!(!result.success);
    assert_eq!(result.error_message, Some(json!("connection reset")));
}

// =============================================================================
// Successful responses
// =============================================================================

#[test]
fn no_error_is_successful() {
    let result = create_result(None, Some(plain_response()));
    assert!(result.success);
    assert!(result.is_success());
}

#[test]
fn body_is_exposed() {
    let result = create_result(None, Some(plain_response()));
    assert_eq!(result.body.as_deref(), Some(&json!("body")));
}

#[test]
fn every_key_is_serialized() {
    let result = create_result(None, Some(plain_response()));
    let json = serde_json::to_value(&result).unwrap();
    let object = json.as_object().unwrap();

    for key in [
        "success",
        "flash",
        "validationErrors",
        "body",
        "paging",
        "result",
        "error",
        "errorMessage",
        "response",
        "statusCode",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), 10);
    assert_eq!(json["paging"], json!(null));
    assert_eq!(json["flash"], json!(null));
    assert_eq!(json["validationErrors"], json!({}));
    assert_eq!(json["result"], json!("body"));
}

#[test]
fn response_and_status_code_pass_through() {
    let response = plain_response().with_status_code(201);
    let result = create_result(None, Some(response.clone()));

    assert_eq!(result.status_code, Some(201));
    assert_eq!(result.response, Some(response));
}

#[test]
fn status_code_is_not_derived_from_status() {
    let response = plain_response();
    assert_eq!(get_status_code(Some(&response)), None);
}

#[test]
fn flash_is_extracted() {
    let result = create_result(None, Some(flash_response("success", "Saved")));
    assert_eq!(result.flash, Some(Flash::new("success", "Saved")));
}

// =============================================================================
// Paging and result merge
// =============================================================================

#[test]
fn paging_is_attached_to_result() {
    let result = create_result(None, Some(paged_response()));
    let merged = result.result.unwrap();

    assert_eq!(merged.body().as_ref(), &json!([1, 2, 3]));
    assert_eq!(merged.paging(), Some(&Paging::new(0, 24, 3)));
    assert_eq!(result.paging, Some(Paging::new(0, 24, 3)));
}

#[test]
fn result_shares_the_response_body() {
    let body = Arc::new(json!({"items": [1, 2]}));
    let response = Response::new()
        .with_shared_body(Arc::clone(&body))
        .with_header("x-paging-total", 2);

    let result = create_result(None, Some(response));

    assert!(Arc::ptr_eq(result.body.as_ref().unwrap(), &body));
    assert!(Arc::ptr_eq(result.result.as_ref().unwrap().body(), &body));
    // body itself is left undecorated
    assert_eq!(body.get("paging"), None);
}

#[test]
fn object_result_serializes_with_paging() {
    let response = Response::new()
        .with_body(json!({"items": [1, 2]}))
        .with_header("x-paging-limit", "10")
        .with_header("x-paging-total", "2");

    let merged = get_result(Some(&response)).unwrap();
    let json = serde_json::to_value(&merged).unwrap();

    assert_eq!(
        json,
        json!({"items": [1, 2], "paging": {"start": null, "limit": 10, "total": 2}})
    );
    assert_eq!(merged.to_value(), json);
}

#[test]
fn object_result_without_paging_drops_stale_key() {
    let response = Response::new().with_body(json!({"items": [], "paging": "stale"}));
    let merged = get_result(Some(&response)).unwrap();

    assert_eq!(serde_json::to_value(&merged).unwrap(), json!({"items": []}));
}

#[test]
fn array_result_serializes_as_body() {
    let result = create_result(None, Some(paged_response()));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["result"], json!([1, 2, 3]));
    assert_eq!(json["paging"], json!({"start": 0, "limit": 24, "total": 3}));
}

#[test]
fn falsy_body_gets_no_paging() {
    let response = Response::new().with_body(0).with_header("x-paging-total", 5);
    let merged = get_result(Some(&response)).unwrap();

    assert_eq!(merged.paging(), None);
    assert_eq!(merged.body().as_ref(), &json!(0));
}

#[test]
fn scalar_body_gets_no_paging() {
    let response = plain_response().with_header("x-paging-total", 5);
    let result = create_result(None, Some(response));

    assert_eq!(result.paging, Some(Paging { start: None, limit: None, total: Some(5) }));
    assert_eq!(result.result.as_ref().unwrap().paging(), None);
}

#[test]
fn repeated_calls_are_isolated() {
    let response = paged_response();
    let first = create_result(None, Some(response.clone()));
    let second = create_result(None, Some(response));

    assert_eq!(first, second);
}

// =============================================================================
// Missing inputs
// =============================================================================

#[test]
fn missing_response_yields_defaults() {
    let result = create_result(None, None);

    assert!(result.success);
    assert_eq!(result.body, None);
    assert_eq!(result.paging, None);
    assert_eq!(result.flash, None);
    assert_eq!(result.result, None);
    assert_eq!(result.response, None);
    assert_eq!(result.status_code, None);
    assert_eq!(result.validation_errors.as_ref(), &json!({}));
    assert!(!result.has_validation_errors());
}

#[test]
fn missing_body_yields_no_result() {
    let response = Response::new().with_header("x-paging-total", 3);
    assert_eq!(get_body(Some(&response)), None);
    assert_eq!(get_result(Some(&response)), None);
}

// =============================================================================
// Configured normalizer
// =============================================================================

#[test]
fn configured_validation_status_is_used() {
    let config = NormalizerConfig {
        validation_status: 400,
        ..NormalizerConfig::default()
    };
    let normalizer = Normalizer::new(config);
    let response = Response::new().with_status(400).with_body(json!({"q": ["required"]}));

    let result = normalizer.create_result(None, Some(response));
    assert_eq!(result.validation_error("q"), Some(&json!(["required"])));
}

#[test]
fn unprocessable_result_carries_validation_errors() {
    let result = create_result(Some(json!("Unprocessable Entity")), Some(unprocessable_response()));

    assert!(!result.success);
    assert!(result.has_validation_errors());
    assert_eq!(result.validation_error("email"), Some(&json!(["is invalid"])));
    assert_eq!(result.status_code, Some(422));
}
