// Discovery ordering tests - candidate order, probe acceptance, exhaustion
//
// Runs the resolver against a scripted network and checks which requests
// were made, in which order, and what was resolved.

#[path = "../common/mod.rs"]
mod common;

use common::{FakeNetwork, Reply, get_version, post_login, version_body};
use zmportal_core::{DiscoveryError, DiscoveryOptions, DiscoveryResult, ErrorCode};

async fn discover(network: &FakeNetwork, input: &str) -> Result<DiscoveryResult, DiscoveryError> {
    network
        .resolver()
        .discover(input, None, &DiscoveryOptions::default())
        .await
}

#[tokio::test]
async fn first_candidate_success_yields_default_urls() {
    let network = FakeNetwork::new().route(
        "GET",
        "http://zm.example.com/zm/api/host/getVersion.json",
        Reply::Json(version_body()),
    );

    let result = discover(&network, "http://zm.example.com").await.unwrap();

    assert_eq!(
        result,
        DiscoveryResult {
            portal_url: "http://zm.example.com/zm".to_string(),
            api_url: "http://zm.example.com/zm/api".to_string(),
            cgi_url: "http://zm.example.com/zm/cgi-bin/nph-zms".to_string(),
        }
    );
    assert_eq!(
        network.requests(),
        vec![get_version("http://zm.example.com/zm/api")]
    );
}

#[tokio::test]
async fn schemeless_input_probes_https_before_http() {
    let network = FakeNetwork::new();

    let err = discover(&network, "zm.example.com").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ApiNotFound);
    assert_eq!(
        network.requests(),
        vec![
            get_version("https://zm.example.com/zm/api"),
            post_login("https://zm.example.com/zm/api"),
            get_version("https://zm.example.com/api"),
            post_login("https://zm.example.com/api"),
            get_version("http://zm.example.com/zm/api"),
            post_login("http://zm.example.com/zm/api"),
            get_version("http://zm.example.com/api"),
            post_login("http://zm.example.com/api"),
        ]
    );
}

#[tokio::test]
async fn explicit_scheme_never_falls_back_to_other_scheme() {
    let network = FakeNetwork::new().route(
        "GET",
        "http://zm.example.com/api/host/getVersion.json",
        Reply::Json(version_body()),
    );

    let err = discover(&network, "https://zm.example.com").await.unwrap_err();

    assert_eq!(
        err,
        DiscoveryError::ApiNotFound {
            input: "https://zm.example.com".to_string(),
            attempts: 2,
        }
    );
    assert!(network.requests().iter().all(|r| r.contains("https://")));
}

#[tokio::test]
async fn http_zm_candidate_wins_when_https_fails() {
    let network = FakeNetwork::new()
        .route(
            "GET",
            "https://zm.example.com/zm/api/host/getVersion.json",
            Reply::Status(503),
        )
        .route(
            "GET",
            "http://zm.example.com/zm/api/host/getVersion.json",
            Reply::Json(version_body()),
        )
        .route(
            "GET",
            "http://zm.example.com/api/host/getVersion.json",
            Reply::Json(version_body()),
        );

    let result = discover(&network, "zm.example.com").await.unwrap();

    assert!(result.portal_url.starts_with("http://"));
    assert_eq!(result.portal_url, "http://zm.example.com/zm");
    assert_eq!(network.requests().len(), 5);
}

#[tokio::test]
async fn unauthorized_version_probe_is_a_success() {
    let network = FakeNetwork::new().route(
        "GET",
        "https://nvr.local/zm/api/host/getVersion.json",
        Reply::Status(401),
    );

    let result = discover(&network, "nvr.local").await.unwrap();

    assert_eq!(result.api_url, "https://nvr.local/zm/api");
    assert_eq!(network.requests(), vec![get_version("https://nvr.local/zm/api")]);
}

#[tokio::test]
async fn other_error_statuses_are_probe_failures() {
    for status in [400, 403, 404, 500] {
        let network = FakeNetwork::new().route(
            "GET",
            "http://nvr.local/zm/api/host/getVersion.json",
            Reply::Status(status),
        );

        let err = discover(&network, "http://nvr.local").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ApiNotFound, "status {status}");
    }
}

#[tokio::test]
async fn login_fallback_accepts_candidate() {
    let network = FakeNetwork::new()
        .route(
            "GET",
            "http://nvr.local/zm/api/host/getVersion.json",
            Reply::Status(404),
        )
        .route("POST", "http://nvr.local/zm/api/host/login.json", Reply::Empty);

    let result = discover(&network, "http://nvr.local").await.unwrap();

    assert_eq!(result.portal_url, "http://nvr.local/zm");
    assert_eq!(
        network.requests(),
        vec![
            get_version("http://nvr.local/zm/api"),
            post_login("http://nvr.local/zm/api"),
        ]
    );
}

#[tokio::test]
async fn prefix_is_tried_before_bare_host() {
    let network = FakeNetwork::new()
        .route(
            "GET",
            "http://nvr.local/zm/api/host/getVersion.json",
            Reply::Json(version_body()),
        )
        .route(
            "GET",
            "http://nvr.local/api/host/getVersion.json",
            Reply::Json(version_body()),
        );

    let result = discover(&network, "http://nvr.local").await.unwrap();
    assert_eq!(result.portal_url, "http://nvr.local/zm");

    let network = FakeNetwork::new().route(
        "GET",
        "http://nvr.local/api/host/getVersion.json",
        Reply::Json(version_body()),
    );
    let result = discover(&network, "http://nvr.local").await.unwrap();
    assert_eq!(result.portal_url, "http://nvr.local");
    assert_eq!(result.cgi_url, "http://nvr.local/cgi-bin/nph-zms");
}

#[tokio::test]
async fn trailing_slashes_never_produce_double_slashes() {
    for input in ["http://nvr.local/", "http://nvr.local///", "nvr.local/", " https://nvr.local/ "] {
        let network = FakeNetwork::new()
            .route(
                "GET",
                "http://nvr.local/api/host/getVersion.json",
                Reply::Json(version_body()),
            )
            .route(
                "GET",
                "https://nvr.local/api/host/getVersion.json",
                Reply::Json(version_body()),
            );

        let result = discover(&network, input).await.unwrap();
        for url in [&result.portal_url, &result.api_url, &result.cgi_url] {
            let (_, rest) = url.split_once("://").unwrap();
            assert!(!rest.contains("//"), "{url} from {input:?}");
            assert!(url.starts_with(&result.portal_url));
        }
    }
}

#[tokio::test]
async fn unsupported_scheme_is_not_found_without_requests() {
    let network = FakeNetwork::new();

    let err = discover(&network, "rtsp://nvr.local").await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ApiNotFound);
    assert!(network.requests().is_empty());
}
