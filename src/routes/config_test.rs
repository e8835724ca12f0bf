use super::*;

#[tokio::test]
async fn console_config_returns_configured_values() {
    let config = ConsoleConfig {
        admin_email: "alexander.ramirez@konectame.com".to_owned(),
        identity_api_key: "web-key".to_owned(),
        auth_timeout_ms: 2_500,
        ..ConsoleConfig::default()
    };
    let Json(body) = console_config(State(Arc::new(config.clone()))).await;
    assert_eq!(body, config);
}

#[tokio::test]
async fn console_config_serializes_wire_field_names() {
    let Json(body) = console_config(State(Arc::new(ConsoleConfig::default()))).await;
    let value = serde_json::to_value(body).unwrap();
    for field in ["admin_email", "identity_api_key", "identity_base_url", "auth_timeout_ms", "request_timeout_ms"] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
}
