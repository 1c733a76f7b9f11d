use reqwest::StatusCode;
use serde_json::json;
use tenant_admin::error::AppError;
use tenant_admin::model::http::{RawResponse, classify};
use tenant_admin::model::responses::{LoginResponse, LookupRequest, acknowledgement, entity_id};

#[test]
fn test_login_response_deserialization() {
    let body = r#"{"products": [], "userInfo": {"sessionId": "abc123", "orgId": "org-7", "name": "admin"}}"#;
    let parsed: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.user_info.session_id, "abc123");
    assert_eq!(parsed.user_info.org_id.as_deref(), Some("org-7"));
}

#[test]
fn test_lookup_request_serialization() {
    let body = serde_json::to_value(LookupRequest::single("Default/Sales", "FOLDER")).unwrap();
    assert_eq!(
        body,
        json!({"objects": [{"path": "Default/Sales", "type": "FOLDER"}]})
    );
}

#[test]
fn test_acknowledgement_default_message() {
    assert_eq!(acknowledgement(None), json!({"message": "Success"}));
    assert_eq!(
        acknowledgement(Some("Role deleted")),
        json!({"message": "Role deleted"})
    );
}

#[test]
fn test_entity_id_accepts_numbers() {
    assert_eq!(entity_id(&json!({"id": 42})), Some("42".to_string()));
    assert_eq!(entity_id(&json!({"id": "0100"})), Some("0100".to_string()));
    assert_eq!(entity_id(&json!({"name": "x"})), None);
}

#[test]
fn test_classify_malformed_success_is_internal() {
    let response = RawResponse::new(StatusCode::OK, "not json");
    let error = classify(&response, None).unwrap_err();
    assert!(matches!(error, AppError::Json(_)));
}
