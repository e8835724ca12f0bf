use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn router_error_names_leptos_configuration() {
    let err = RouterError::LeptosConfig("no [package.metadata.leptos]".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: no [package.metadata.leptos]");
}

