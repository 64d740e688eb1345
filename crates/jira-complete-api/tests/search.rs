use httpmock::prelude::*;
use jira_complete_api::JiraClient;
use jira_complete_core::models::Credentials;

fn password_credentials() -> Credentials {
    Credentials::Password {
        username: "bob".to_string(),
        password: "pw".to_string(),
    }
}

#[tokio::test]
async fn test_search_maps_issues_in_server_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/api/2/search")
                .query_param("fields", "summary,updated")
                .header("Authorization", "Basic Ym9iOnB3");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"issues":[
                        {"key":"AB-1","fields":{"summary":"Fix bug"}},
                        {"key":"AB-3","fields":{"summary":"Write docs"}},
                        {"key":"AB-2","fields":{"summary":"Add tests"}}
                    ]}"#,
                );
        })
        .await;

    let client = JiraClient::new(server.base_url(), &password_credentials());
    let issues = client.search_unresolved().await.unwrap();

    mock.assert_async().await;
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0].key, "AB-1");
    assert_eq!(issues[0].title, "Fix bug");
    assert_eq!(issues[1].key, "AB-3");
    assert_eq!(issues[2].key, "AB-2");
}

#[tokio::test]
async fn test_empty_result_set_is_ok() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/api/2/search");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"issues":[]}"#);
        })
        .await;

    let client = JiraClient::new(server.base_url(), &password_credentials());
    let issues = client.search_unresolved().await.unwrap();

    assert!(issues.is_empty());
}

#[tokio::test]
async fn test_token_credentials_send_escaped_identity() {
    use base64::Engine;
    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("bob\\u0040example.com:key123")
    );

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/api/2/search")
                .header("Authorization", expected.as_str());
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"issues":[]}"#);
        })
        .await;

    let credentials = Credentials::ApiToken {
        email: "bob@example.com".to_string(),
        api_key: "key123".to_string(),
    };
    let client = JiraClient::new(server.base_url(), &credentials);
    client.search_unresolved().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_2xx_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/api/2/search");
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"errorMessages":["Unauthorized"]}"#);
        })
        .await;

    let client = JiraClient::new(server.base_url(), &password_credentials());
    let result = client.search_unresolved().await;

    assert!(matches!(result, Err(jira_complete_api::Error::Http(_))));
}

#[tokio::test]
async fn test_unexpected_body_shape_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/api/2/search");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>maintenance</html>");
        })
        .await;

    let client = JiraClient::new(server.base_url(), &password_credentials());
    let result = client.search_unresolved().await;

    assert!(matches!(result, Err(jira_complete_api::Error::Json(_))));
}

#[tokio::test]
async fn test_connection_failure_is_an_error() {
    let credentials = password_credentials();
    // Port 1 is never listening.
    let client = JiraClient::new("http://127.0.0.1:1", &credentials);
    let result = client.search_unresolved().await;

    assert!(matches!(result, Err(jira_complete_api::Error::Http(_))));
}
