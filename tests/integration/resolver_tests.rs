use crate::common;
use mockito::{Matcher, Server};
use serde_json::json;
use tenant_admin::prelude::*;

fn name_query(field: &str, value: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), format!("{field}==\"{value}\"")),
        Matcher::UrlEncoded("limit".into(), "1".into()),
    ])
}

#[tokio::test]
async fn test_unknown_name_is_not_found_and_nothing_is_deleted() {
    let mut server = Server::new_async().await;
    let lookup = server
        .mock("GET", "/public/core/v3/users")
        .match_query(name_query("userName", "alice"))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", Matcher::Regex("^/public/core/v3/users/".into()))
        .expect(0)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let err = client
        .delete_user(&EntityKey::named(EntityKind::User, "alice"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { ref key, .. } if key == "alice"));
    assert!(err.to_structured().text.contains("alice"));
    lookup.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_first_match_wins() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/public/core/v3/roles")
        .match_query(name_query("roleName", "Admin"))
        .with_status(200)
        .with_body(r#"[{"id": "r1", "roleName": "Admin"}, {"id": "r2", "roleName": "Admin"}]"#)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let id = client
        .resolve(&EntityKey::named(EntityKind::Role, "Admin"))
        .await
        .unwrap();

    assert_eq!(id, "r1");
}

#[tokio::test]
async fn test_malformed_name_query_reply_is_internal() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/public/core/v3/users")
        .match_query(name_query("userName", "alice"))
        .with_status(200)
        .with_body(r#"{"unexpected": "shape"}"#)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let err = client
        .resolve(&EntityKey::named(EntityKind::User, "alice"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidResponse(_)));
    assert!(err.is_internal());
}

#[tokio::test]
async fn test_malformed_lookup_reply_is_internal() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/public/core/v3/lookup")
        .with_status(200)
        .with_body(r#"{"unexpected": "shape"}"#)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let err = client
        .resolve(&EntityKey::path(EntityKind::Project, "Default"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidResponse(_)));
    assert!(err.is_internal());
}

#[tokio::test]
async fn test_ids_pass_through_without_a_call() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let id = client.resolve(&EntityKey::id("0001")).await.unwrap();

    assert_eq!(id, "0001");
    any.assert_async().await;
}

#[tokio::test]
async fn test_legacy_kinds_are_matched_client_side() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/agent")
        .with_status(200)
        .with_body(
            json!([
                {"id": "a1", "name": "agent-west"},
                {"id": "a2", "name": "agent-east"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let id = client
        .resolve(&EntityKey::named(EntityKind::Agent, "agent-east"))
        .await
        .unwrap();

    assert_eq!(id, "a2");
}

#[tokio::test]
async fn test_projects_resolve_through_lookup() {
    let mut server = Server::new_async().await;
    let lookup = server
        .mock("POST", "/public/core/v3/lookup")
        .match_body(Matcher::Json(
            json!({"objects": [{"path": "Default", "type": "PROJECT"}]}),
        ))
        .with_status(200)
        .with_body(r#"{"objects": [{"id": "p1", "path": "Default", "type": "Project"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let id = client
        .resolve(&EntityKey::path(EntityKind::Project, "Default"))
        .await
        .unwrap();

    assert_eq!(id, "p1");
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_typed_objects_fall_back_to_lookup() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/public/core/v3/lookup")
        .match_body(Matcher::PartialJson(
            json!({"objects": [{"path": "Default/load", "type": "MTT"}]}),
        ))
        .with_status(200)
        .with_body(r#"{"objects": [{"id": "t1"}]}"#)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let id = client
        .resolver()
        .resolve(&EntityKind::Object("MTT".to_string()), "Default/load")
        .await
        .unwrap();

    assert_eq!(id, "t1");
}

#[tokio::test]
async fn test_registry_accepts_new_strategies() {
    let server = Server::new_async().await;
    let mut client = common::logged_in_client(&server, 3, 200);
    let resolver = client.resolver_mut();
    resolver.register(
        EntityKind::Connection,
        ResolveStrategy::NameScan {
            endpoint: endpoints::CONNECTIONS,
            field: "name",
        },
    );
    assert!(resolver.strategy(&EntityKind::Connection).is_some());
    assert!(resolver.strategy(&EntityKind::Project).is_some());
}

#[tokio::test]
async fn test_batch_resolution_aborts_on_first_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/public/core/v3/roles")
        .match_query(name_query("roleName", "Designer"))
        .with_status(200)
        .with_body(r#"[{"id": "r9"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/public/core/v3/roles")
        .match_query(name_query("roleName", "Ghost"))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let create = server
        .mock("POST", "/public/core/v3/users")
        .expect(0)
        .create_async()
        .await;

    let client = common::logged_in_client(&server, 3, 200);
    let user = NewUser {
        name: "bob".to_string(),
        first_name: "Bob".to_string(),
        last_name: "Builder".to_string(),
        email: "bob@example.com".to_string(),
        roles: vec!["Designer".to_string(), "Ghost".to_string()],
        ..NewUser::default()
    };
    let err = client.create_user(&user).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { ref key, .. } if key == "Ghost"));
    create.assert_async().await;
}
