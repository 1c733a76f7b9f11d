use tenant_admin::model::entity::{EntityKey, EntityKind};

#[test]
fn test_entity_kind_display() {
    assert_eq!(EntityKind::User.to_string(), "user");
    assert_eq!(EntityKind::RuntimeEnvironment.to_string(), "runtime environment");
}

#[test]
fn test_path_addressed_kinds() {
    assert!(EntityKind::Project.is_path_addressed());
    assert!(EntityKind::Folder.is_path_addressed());
    assert!(EntityKind::Object("MTT".to_string()).is_path_addressed());
    assert!(!EntityKind::Role.is_path_addressed());
}

#[test]
fn test_object_types() {
    assert_eq!(EntityKind::Project.object_type(), Some("PROJECT"));
    assert_eq!(EntityKind::Folder.object_type(), Some("FOLDER"));
    assert_eq!(
        EntityKind::Object("DTEMPLATE".to_string()).object_type(),
        Some("DTEMPLATE")
    );
    assert_eq!(EntityKind::Agent.object_type(), None);
}

#[test]
fn test_path_key_takes_type_from_kind() {
    let key = EntityKey::path(EntityKind::Project, "Default");
    match key {
        EntityKey::Path {
            kind,
            path,
            object_type,
        } => {
            assert_eq!(kind, EntityKind::Project);
            assert_eq!(path, "Default");
            assert_eq!(object_type, "PROJECT");
        }
        other => panic!("unexpected key {other:?}"),
    }
}

#[test]
fn test_typed_path_key() {
    let key = EntityKey::typed_path("Default/Sales/load_accounts", "MTT");
    assert_eq!(key.search_key(), "Default/Sales/load_accounts");
    assert!(matches!(
        key,
        EntityKey::Path { ref object_type, .. } if object_type == "MTT"
    ));
}

#[test]
fn test_from_id_or_name() {
    let by_name = EntityKey::from_id_or_name(EntityKind::Group, None, Some("ops".to_string()));
    assert_eq!(by_name, Some(EntityKey::named(EntityKind::Group, "ops")));
    assert_eq!(EntityKey::from_id_or_name(EntityKind::Group, None, None), None);
}
