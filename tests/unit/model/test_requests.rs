use chrono::{TimeZone, Utc};
use reqwest::Method;
use serde_json::json;
use tenant_admin::model::endpoints;
use tenant_admin::model::requests::{ApiGeneration, Filter, PageCursor, Pagination, RequestSpec};

#[test]
fn test_generation_headers_and_prefixes() {
    assert_eq!(ApiGeneration::Legacy.session_header(), "icSessionId");
    assert_eq!(ApiGeneration::Current.session_header(), "INFA-SESSION-ID");
    assert_eq!(ApiGeneration::Legacy.path_prefix(), "/api/v2");
    assert_eq!(ApiGeneration::Current.path_prefix(), "/public/core/v3");
}

#[test]
fn test_endpoint_full_paths() {
    assert_eq!(endpoints::USERS.full_path(), "/public/core/v3/users");
    assert_eq!(endpoints::AGENTS.full_path(), "/api/v2/agent");
    assert_eq!(
        endpoints::ACTIVITY_LOG.full_path(),
        "/api/v2/activity/activityLog"
    );
}

#[test]
fn test_filter_with_time_range() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap();
    let filter = Filter::new()
        .eq("type", "DTEMPLATE")
        .since("updateTime", from)
        .until("updateTime", to);
    assert_eq!(
        filter.to_string(),
        r#"type=="DTEMPLATE" and updateTime>="2024-01-01T00:00:00.000Z" and updateTime<="2024-02-01T12:30:00.000Z""#
    );
}

#[test]
fn test_filter_skips_absent_values() {
    let filter = Filter::new().eq_opt("location", None).eq_opt("tag", Some("nightly"));
    assert_eq!(filter.to_string(), r#"tag=="nightly""#);
}

#[test]
fn test_filter_escapes_quotes_and_backslashes() {
    let filter = Filter::new().eq("userName", r#"o"brien"#);
    assert_eq!(filter.to_string(), r#"userName=="o\"brien""#);

    let filter = Filter::new().eq("location", r"Default\Sales");
    assert_eq!(filter.to_string(), r#"location=="Default\\Sales""#);
}

#[test]
fn test_empty_filter_adds_no_query() {
    let spec = RequestSpec::get(endpoints::USERS).filter(&Filter::new());
    assert!(spec.query.is_empty());
}

#[test]
fn test_offset_cursor_progression() {
    let cursor = PageCursor::start(Pagination::Offset, 200).unwrap();
    assert_eq!(
        cursor.query_pairs(),
        vec![
            ("limit".to_string(), "200".to_string()),
            ("skip".to_string(), "0".to_string())
        ]
    );
    let next = cursor.advance().advance();
    assert_eq!(next, PageCursor::Offset { skip: 400, limit: 200 });
}

#[test]
fn test_ordinal_cursor_starts_at_page_one() {
    let cursor = PageCursor::start(Pagination::Ordinal, 50).unwrap();
    assert_eq!(cursor, PageCursor::Ordinal { page: 1, per_page: 50 });
    assert_eq!(
        cursor.advance().query_pairs(),
        vec![
            ("perPage".to_string(), "50".to_string()),
            ("page".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn test_unpaginated_endpoint_has_no_cursor() {
    assert!(PageCursor::start(Pagination::None, 200).is_none());
}

#[test]
fn test_with_cursor_keeps_template_untouched() {
    let template = RequestSpec::get(endpoints::ROLES).query("expand", "privileges");
    let cursor = PageCursor::start(Pagination::Offset, 10).unwrap();
    let page = template.with_cursor(&cursor);
    assert_eq!(template.query.len(), 1);
    assert_eq!(page.query.len(), 3);
}

#[test]
fn test_request_spec_path_and_ack() {
    let spec = RequestSpec::delete(endpoints::USERS)
        .at("0001")
        .ack("User deleted");
    assert_eq!(spec.method, Method::DELETE);
    assert_eq!(spec.path(), "/public/core/v3/users/0001");
    assert_eq!(spec.ack.as_deref(), Some("User deleted"));
}

#[test]
fn test_enveloped_items() {
    let payload = json!({"count": 2, "objects": [{"id": "a"}, {"id": "b"}]});
    let items = endpoints::OBJECTS.items(&payload).unwrap();
    assert_eq!(items.len(), 2);
    assert!(endpoints::OBJECTS.items(&json!([{"id": "a"}])).is_none());
    assert_eq!(endpoints::USERS.items(&json!([])).unwrap().len(), 0);
}
