//! End-to-end tests of the reqwest transport against a mock server.

use rustfm::{ApiClient, Credentials, LastfmError, Params, Scrobble, ScrobbleBatch, Session};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/2.0/";

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder(Credentials::new("api-key", "secret").unwrap())
        .api_url(format!("{}{}", server.uri(), API_PATH))
        .build()
        .unwrap()
}

fn session() -> Session {
    Session::new("rj", "session-key", 0)
}

#[tokio::test]
async fn get_sends_query_string_with_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("method", "artist.getInfo"))
        .and(query_param("artist", "Cher"))
        .and(query_param("api_key", "api-key"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artist": {"name": "Cher", "stats": {"listeners": "10", "playcount": "20"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let artist = client_for(&server).artist().get_info("Cher").await.unwrap();
    assert_eq!(artist.name, "Cher");
    assert_eq!(artist.playcount, 20);
}

#[tokio::test]
async fn post_sends_signed_form_body() {
    let server = MockServer::start().await;
    let expected_sig = rustfm::crypto::md5_hex(
        "api_keyapi-keyartistChermethodtrack.lovesksession-keytrackBelievesecret",
    );

    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains("method=track.love"))
        .and(body_string_contains("sk=session-key"))
        .and(body_string_contains("format=json"))
        .and(body_string_contains(format!("api_sig={}", expected_sig)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .track()
        .love("Cher", "Believe", &session())
        .await
        .unwrap();
}

#[tokio::test]
async fn scrobble_batch_uses_indexed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_string_contains("artist%5B0%5D=Cher"))
        .and(body_string_contains("timestamp%5B1%5D=1300000300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scrobbles": {"@attr": {"accepted": 1, "ignored": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let batch = ScrobbleBatch::from_scrobbles(vec![
        Scrobble::new("Cher", "Believe", 1_300_000_000),
        Scrobble::new("Cher", "Strong Enough", 1_300_000_300),
    ])
    .unwrap();

    let result = client_for(&server)
        .track()
        .scrobble(&batch, &session())
        .await
        .unwrap();
    assert_eq!(result.accepted, 1);
    assert_eq!(result.ignored, 1);
}

#[tokio::test]
async fn api_error_with_client_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": 6,
            "message": "The artist you supplied could not be found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .artist()
        .get_info("nobody at all")
        .await
        .unwrap_err();
    assert!(matches!(err, LastfmError::NotFound { .. }));
    assert_eq!(err.code(), Some(6));
}

#[tokio::test]
async fn html_error_page_is_technical_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .call("chart.getTopArtists", Params::new())
        .await
        .unwrap_err();
    assert!(matches!(err, LastfmError::Technical { .. }));
    assert_eq!(err.code(), Some(500));
}

#[tokio::test]
async fn unreachable_host_is_technical_failure() {
    let client = ApiClient::builder(Credentials::new("api-key", "secret").unwrap())
        .api_url("http://127.0.0.1:1/2.0/")
        .build()
        .unwrap();

    let err = client.call("chart.getTopArtists", Params::new()).await.unwrap_err();
    assert_eq!(err.code(), Some(500));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn page_body_missing_page_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/music/Cher/+events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>events</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/music/Nobody/+events"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let found = client
        .get_page_body(
            &format!("{}/music/Cher/+events", server.uri()),
            Params::new(),
            rustfm::HttpMethod::Get,
        )
        .await
        .unwrap();
    assert_eq!(found.as_deref(), Some("<html>events</html>"));

    let missing = client
        .get_page_body(
            &format!("{}/music/Nobody/+events", server.uri()),
            Params::new(),
            rustfm::HttpMethod::Get,
        )
        .await
        .unwrap();
    assert_eq!(missing, None);
}
