use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use live_user_search::core::config::GithubHttpConfigPayload;
use live_user_search::core::github_http::parse_search_response;
use live_user_search::{CoreError, GithubSearchClient, UserSearchApi};

use crate::support::user;

fn client_for(base_url: &str) -> GithubSearchClient {
    GithubSearchClient::new(GithubHttpConfigPayload {
        base_url: base_url.to_string(),
        ..GithubHttpConfigPayload::default()
    })
    .expect("client should build")
}

/// 요청 하나를 받아 고정된 응답을 돌려주는 로컬 HTTP 서버를 띄운다.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buffer = [0u8; 1024];
        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            received.extend_from_slice(&buffer[..read]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{}", address)
}

#[rstest]
#[case("octocat", "q=octocat")]
#[case("john doe", "q=john+doe")]
#[case("a&b#c", "q=a%26b%23c")]
#[case("  ", "q=++")]
fn build_request_percent_encodes_query(#[case] query: &str, #[case] expected: &str) {
    let client = client_for("https://api.github.com");

    let request = client.build_request(query).unwrap();

    assert_eq!(request.method(), reqwest::Method::GET);
    assert_eq!(request.url().host_str(), Some("api.github.com"));
    assert_eq!(request.url().path(), "/search/users");
    assert_eq!(request.url().query(), Some(expected));
}

#[test]
fn build_request_tolerates_trailing_slash_in_base_url() {
    let client = client_for("http://localhost:8080/");

    let request = client.build_request("octo").unwrap();

    assert_eq!(
        request.url().as_str(),
        "http://localhost:8080/search/users?q=octo"
    );
}

#[test]
fn build_request_sends_no_auth_header_by_default() {
    let client = client_for("https://api.github.com");

    let request = client.build_request("octo").unwrap();

    assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
}

#[test]
fn build_request_uses_bearer_token_when_configured() {
    let client = GithubSearchClient::new(GithubHttpConfigPayload {
        auth_token: Some("secret".to_string()),
        ..GithubHttpConfigPayload::default()
    })
    .unwrap();

    let request = client.build_request("octo").unwrap();

    assert_eq!(
        request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
        "Bearer secret"
    );
}

#[test]
fn build_request_rejects_empty_query() {
    let client = client_for("https://api.github.com");

    assert!(matches!(
        client.build_request(""),
        Err(CoreError::InvalidInput(_))
    ));
}

#[rstest]
#[case(GithubHttpConfigPayload { base_url: " ".to_string(), ..GithubHttpConfigPayload::default() })]
#[case(GithubHttpConfigPayload { timeout_ms: 0, ..GithubHttpConfigPayload::default() })]
#[case(GithubHttpConfigPayload { user_agent: String::new(), ..GithubHttpConfigPayload::default() })]
fn new_rejects_invalid_config(#[case] config: GithubHttpConfigPayload) {
    assert!(matches!(
        GithubSearchClient::new(config),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn parse_keeps_item_order_and_ignores_unknown_fields() {
    let body = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {"login": "u1", "id": 1, "avatar_url": "https://avatars.example.com/u1.png", "html_url": "https://github.com/u1", "score": 1.0},
            {"login": "u2", "id": 2, "avatar_url": "https://avatars.example.com/u2.png", "html_url": "https://github.com/u2", "type": "User"}
        ]
    }"#;

    let response = parse_search_response(body).unwrap();

    assert_eq!(response.items, vec![user("u1"), user("u2")]);
}

#[test]
fn parse_treats_missing_items_as_empty() {
    let response = parse_search_response(r#"{"message": "nothing here"}"#).unwrap();

    assert!(response.items.is_empty());
}

#[rstest]
#[case("")]
#[case("not json")]
#[case(r#"{"items": "nope"}"#)]
fn parse_rejects_malformed_body(#[case] body: &str) {
    assert!(matches!(
        parse_search_response(body),
        Err(CoreError::Serialization(_))
    ));
}

#[tokio::test]
async fn search_users_parses_successful_response() {
    let base_url = serve_once(
        "200 OK",
        r#"{"items":[{"login":"octocat","avatar_url":"https://avatars.example.com/octocat.png","html_url":"https://github.com/octocat"}]}"#,
    )
    .await;
    let client = client_for(&base_url);

    let response = client.search_users("octocat").await.unwrap();

    assert_eq!(response.items, vec![user("octocat")]);
}

#[tokio::test]
async fn search_users_maps_error_status_to_http_error() {
    let base_url = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;
    let client = client_for(&base_url);

    let result = client.search_users("octocat").await;

    assert!(matches!(result, Err(CoreError::Http(_))));
}

#[tokio::test]
async fn search_users_maps_invalid_body_to_serialization_error() {
    let base_url = serve_once("200 OK", "<html>rate limited</html>").await;
    let client = client_for(&base_url);

    let result = client.search_users("octocat").await;

    assert!(matches!(result, Err(CoreError::Serialization(_))));
}
