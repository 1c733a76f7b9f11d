use crate::common::{self, FRESH_TOKEN, LOGIN_PATH, SESSION_HEADER, STALE_TOKEN};
use mockito::{Matcher, Server};
use serde_json::json;
use tenant_admin::prelude::*;

const ROLES_PATH: &str = "/public/core/v3/roles";

#[tokio::test]
async fn test_expired_session_is_renewed_and_resent() {
    let mut server = Server::new_async().await;
    let store = common::seeded_store(&server, Some(STALE_TOKEN), 5, 200);
    let login = common::mock_login(&mut server, FRESH_TOKEN, 1).await;
    let rejected = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, STALE_TOKEN)
        .with_status(401)
        .with_body(r#"{"error":{"code":"AUTH_01","message":"Session expired"}}"#)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, FRESH_TOKEN)
        .with_status(200)
        .with_body(r#"[{"id": "r1", "roleName": "Admin"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::client_for(store.clone());
    let payload = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap();

    assert_eq!(payload, json!([{"id": "r1", "roleName": "Admin"}]));
    login.assert_async().await;
    rejected.assert_async().await;
    accepted.assert_async().await;
    assert_eq!(store.get("session_token").as_deref(), Some(FRESH_TOKEN));
}

#[tokio::test]
async fn test_zero_budget_never_logs_in() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, FRESH_TOKEN, 0).await;
    let rejected = server
        .mock("GET", ROLES_PATH)
        .with_status(401)
        .with_body("expired")
        .expect(1)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 0, 200);
    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BudgetExceeded(_)));
    let structured = err.to_structured();
    assert_eq!(structured.status, 401);
    assert_eq!(structured.text, "expired");
    login.assert_async().await;
    rejected.assert_async().await;
}

#[tokio::test]
async fn test_persistent_401_makes_budget_plus_one_requests() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, FRESH_TOKEN, 2).await;
    let rejected = server
        .mock("GET", ROLES_PATH)
        .with_status(401)
        .with_body("still expired")
        .expect(3)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 2, 200);
    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    login.assert_async().await;
    rejected.assert_async().await;
}

#[tokio::test]
async fn test_other_failures_are_not_retried() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, FRESH_TOKEN, 0).await;
    let failing = server
        .mock("GET", ROLES_PATH)
        .with_status(500)
        .with_body(r#"{"error":"internal"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    match err {
        AppError::Upstream(e) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.text, r#"{"error":"internal"}"#);
        }
        other => panic!("unexpected error {other:?}"),
    }
    login.assert_async().await;
    failing.assert_async().await;
}

#[tokio::test]
async fn test_missing_token_triggers_one_initial_login() {
    let mut server = Server::new_async().await;
    let store = common::seeded_store(&server, None, 3, 200);
    let login = common::mock_login(&mut server, FRESH_TOKEN, 1).await;
    let accepted = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, FRESH_TOKEN)
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = common::client_for(store);
    client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap();
    client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap();

    login.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_zero_budget_without_token_logs_in_once_up_front() {
    let mut server = Server::new_async().await;
    let store = common::seeded_store(&server, None, 0, 200);
    let login = common::mock_login(&mut server, FRESH_TOKEN, 1).await;
    let rejected = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, FRESH_TOKEN)
        .with_status(401)
        .with_body("expired")
        .expect(1)
        .create_async()
        .await;

    let client = common::client_for(store);
    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BudgetExceeded(_)));
    login.assert_async().await;
    rejected.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_is_auth_failed() {
    let mut server = Server::new_async().await;
    let store = common::seeded_store(&server, None, 3, 200);
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(403)
        .with_body(r#"{"error":"invalid credentials"}"#)
        .expect(1)
        .create_async()
        .await;
    let resource = server
        .mock("GET", ROLES_PATH)
        .expect(0)
        .create_async()
        .await;

    let client = common::client_for(store);
    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    match err {
        AppError::AuthFailed(e) => assert_eq!(e.status, 403),
        other => panic!("unexpected error {other:?}"),
    }
    login.assert_async().await;
    resource.assert_async().await;
}

#[tokio::test]
async fn test_not_configured_makes_no_network_call() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, FRESH_TOKEN, 0).await;
    let listing = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::client_for(std::sync::Arc::new(MemoryStore::new()));
    let err = client.list_users(None).await.unwrap_err();

    assert!(matches!(err, AppError::NotConfigured));
    assert_eq!(err.to_structured().status, 0);
    login.assert_async().await;
    listing.assert_async().await;
}

#[tokio::test]
async fn test_legacy_endpoints_use_legacy_header() {
    let mut server = Server::new_async().await;
    let agents = server
        .mock("GET", "/api/v2/agent")
        .match_header("icSessionId", STALE_TOKEN)
        .with_status(200)
        .with_body(r#"[{"id": "a1", "name": "agent-east"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let listed = client.list_agents().await.unwrap();

    assert_eq!(listed.len(), 1);
    agents.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_operations_share_one_renewal() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server, FRESH_TOKEN, 1).await;
    let rejected = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, STALE_TOKEN)
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", ROLES_PATH)
        .match_header(SESSION_HEADER, FRESH_TOKEN)
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let spec = RequestSpec::get(endpoints::ROLES);
    let (first, second) = tokio::join!(client.execute(&spec), client.execute(&spec));

    assert!(first.is_ok());
    assert!(second.is_ok());
    login.assert_async().await;
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_cancelled_operation_returns_cancelled() {
    let server = Server::new_async().await;
    let client = common::logged_in_client(&server, 3, 200);
    client.cancellation_token().cancel();

    let err = client
        .execute(&RequestSpec::get(endpoints::ROLES))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Cancelled));
}
