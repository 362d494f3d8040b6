#![allow(clippy::unwrap_used)]
// Integration tests for `VlcClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vlcwatch_api::{Credentials, Dispatch, Error, Params, Request, Scope, VlcClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, VlcClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = VlcClient::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials::new("", SecretString::from("secret".to_string())),
    );
    (server, client)
}

fn status_body() -> serde_json::Value {
    json!({
        "state": "playing",
        "volume": 256,
        "rate": 1.0,
        "time": 42,
        "length": 180,
        "position": 0.23,
        "loop": false,
        "repeat": false,
        "random": true,
        "fullscreen": false,
        "aspectratio": "16:9",
        "stats": { "inputbitrate": 0.5, "decodedaudio": 1200 },
        "information": {
            "category": { "meta": { "title": "Song", "artist": "Band" } }
        }
    })
}

// ── Status ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_sends_basic_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(header("authorization", "Basic OnNlY3JldA=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
        .expect(1)
        .mount(&server)
        .await;

    let status = client.status().await.unwrap();

    assert_eq!(status.state, "playing");
    assert_eq!(status.time, 42);
    assert!(status.random);
    assert_eq!(status.aspectratio.as_deref(), Some("16:9"));
    assert_eq!(status.stats.unwrap().decodedaudio, 1200);
}

#[tokio::test]
async fn test_dispatch_builds_command_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(query_param("command", "pl_sort"))
        .and(query_param("id", "5"))
        .and(query_param("val", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::command(
        Scope::Status,
        "pl_sort",
        Params::new().with("id", 5).with("val", 1),
    );
    let body = client.dispatch(&request).await.unwrap();

    assert_eq!(body["state"], "playing");
}

#[tokio::test]
async fn test_browse_passes_dir() {
    let (server, client) = setup().await;

    let body = json!({
        "element": [
            { "type": "dir", "name": "..", "path": "/home", "uri": "file:///home",
              "size": 4096, "modification_time": 1_700_000_000 },
            { "type": "file", "name": "a b.mp3", "path": "/home/me/a b.mp3",
              "uri": "file:///home/me/a%20b.mp3", "size": 1024 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/requests/browse.json"))
        .and(query_param("dir", "/home/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let listing = client.browse("/home/me").await.unwrap();

    assert_eq!(listing.element.len(), 2);
    assert_eq!(listing.element[0].kind, "dir");
    assert_eq!(listing.element[1].name, "a b.mp3");
    assert_eq!(listing.element[1].size, 1024);
}

#[test]
fn test_request_url_layout() {
    let client = VlcClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:8080/").unwrap(),
        Credentials::new("", SecretString::from(String::new())),
    );

    let url = client.request_url(&Request::fetch(Scope::Playlist)).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/requests/playlist.json");

    let url = client
        .request_url(&Request::command(
            Scope::Status,
            "volume",
            Params::new().with("val", "+10"),
        ))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/requests/status.json?command=volume&val=%2B10"
    );
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.status().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_maps_to_http_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/requests/playlist.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.playlist().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert!(err.is_transient());
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let request = Request::fetch(Scope::Status);
    let err = client.dispatch(&request).await.unwrap_err();

    match err {
        Error::Decode { body, .. } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = VlcClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:1/").unwrap(),
        Credentials::new("", SecretString::from(String::new())),
    );

    let err = client.status().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert!(err.is_transport());
}
