use live_user_search::core::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_GITHUB_BASE_URL};
use live_user_search::core::query_filter::BlankQueryPolicy;
use live_user_search::{CoreError, PipelineConfigPayload};
use std::time::Duration;

#[test]
fn empty_json_yields_defaults() {
    let config = PipelineConfigPayload::from_json("{}").unwrap();

    assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.debounce(), Duration::from_secs(1));
    assert_eq!(config.blank_query_policy, BlankQueryPolicy::Trimmed);
    assert_eq!(config.github.base_url, DEFAULT_GITHUB_BASE_URL);
    assert!(config.github.auth_token.is_none());
    assert!(config.github.user_agent.starts_with("live-user-search/"));
    assert_eq!(config.card.link_label, "Open GitHub");
    config.validate().unwrap();
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = PipelineConfigPayload::from_json(
        r#"{"debounce_ms": 250, "blank_query_policy": "untrimmed", "github": {"timeout_ms": 500}}"#,
    )
    .unwrap();

    assert_eq!(config.debounce(), Duration::from_millis(250));
    assert_eq!(config.blank_query_policy, BlankQueryPolicy::Untrimmed);
    assert_eq!(config.github.timeout_ms, 500);
    assert_eq!(config.github.base_url, DEFAULT_GITHUB_BASE_URL);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let result = PipelineConfigPayload::from_json(r#"{"blank_query_policy": "sometimes"}"#);

    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[test]
fn validate_rejects_zero_timeout() {
    let config = PipelineConfigPayload::from_json(r#"{"github": {"timeout_ms": 0}}"#).unwrap();

    assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
}
