use tenant_admin::model::retry::RetryBudget;

#[test]
fn test_budget_allows_exactly_max_attempts_retries() {
    let budget = RetryBudget::new(3);
    assert!(budget.allows_retry(0));
    assert!(budget.allows_retry(2));
    assert!(!budget.allows_retry(3));
    assert_eq!(budget.total_requests(), 4);
}

#[test]
fn test_zero_budget_makes_one_request() {
    let budget = RetryBudget::none();
    assert!(!budget.allows_retry(0));
    assert_eq!(budget.total_requests(), 1);
}

#[test]
fn test_budget_serialization() {
    let json = serde_json::to_string(&RetryBudget::new(5)).unwrap();
    assert_eq!(json, r#"{"max_attempts":5}"#);
}
