use serde_json::json;
use tenant_admin::error::{AppError, LOCAL_FAILURE_STATUS, NOT_FOUND_STATUS, StructuredError};

#[test]
fn test_app_error_display_not_configured() {
    let error = AppError::NotConfigured;
    assert_eq!(error.to_string(), "not configured: credentials are missing");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::not_found("role", "Designer");
    assert_eq!(error.to_string(), "role not found: Designer");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("page size must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: page size must be positive");
}

#[test]
fn test_app_error_display_partial() {
    let error = AppError::AggregationPartial {
        items: vec![json!({"id": "1"}), json!({"id": "2"})],
        error: StructuredError::new(502, "bad gateway"),
    };
    assert_eq!(
        error.to_string(),
        "partial result (2 items collected): status 502: bad gateway"
    );
}

#[test]
fn test_budget_exceeded_surfaces_last_response() {
    let error = AppError::BudgetExceeded(StructuredError::new(401, "{\"error\":\"expired\"}"));
    let structured = error.to_structured();
    assert_eq!(structured.status, 401);
    assert_eq!(structured.text, "{\"error\":\"expired\"}");
}

#[test]
fn test_auth_failed_keeps_upstream_status() {
    let error = AppError::AuthFailed(StructuredError::new(403, "bad credentials"));
    assert_eq!(error.status(), Some(403));
    assert!(!error.is_internal());
}

#[test]
fn test_not_found_maps_to_404() {
    let structured = AppError::not_found("user", "alice").to_structured();
    assert_eq!(structured.status, NOT_FOUND_STATUS);
    assert!(structured.text.contains("alice"));
}

#[test]
fn test_local_failures_map_to_status_zero() {
    for error in [
        AppError::NotConfigured,
        AppError::Cancelled,
        AppError::Timeout,
        AppError::InvalidResponse("missing id".to_string()),
    ] {
        assert_eq!(error.status(), None);
        assert_eq!(error.to_structured().status, LOCAL_FAILURE_STATUS);
    }
}

#[test]
fn test_json_error_is_internal() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: AppError = parse.unwrap_err().into();
    assert!(error.is_internal());
    assert!(error.to_string().starts_with("json error"));
}

#[test]
fn test_structured_error_serializes_as_status_and_text() {
    let structured = StructuredError::new(500, "boom");
    let value = serde_json::to_value(&structured).unwrap();
    assert_eq!(value, json!({"status": 500, "text": "boom"}));
}

#[test]
fn test_partial_report_keeps_collected_items() {
    let error = AppError::AggregationPartial {
        items: vec![json!({"id": "1"}), json!({"id": "2"})],
        error: StructuredError::new(502, "bad gateway"),
    };
    assert_eq!(
        error.report(),
        json!({
            "items": [{"id": "1"}, {"id": "2"}],
            "error": {"status": 502, "text": "bad gateway"}
        })
    );
}

#[test]
fn test_report_is_status_and_text_for_other_failures() {
    let error = AppError::not_found("user", "alice");
    assert_eq!(
        error.report(),
        json!({"status": NOT_FOUND_STATUS, "text": "user not found: alice"})
    );
    assert_eq!(
        AppError::Cancelled.report()["status"],
        json!(LOCAL_FAILURE_STATUS)
    );
}
