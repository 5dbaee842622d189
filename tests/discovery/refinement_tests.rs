// Discovery refinement tests - authenticated ZM_PATH_ZMS lookup
//
// Refinement may only ever change cgi_url; every failure keeps the default.

#[path = "../common/mod.rs"]
mod common;

use common::{FakeNetwork, Reply, version_body};
use serde_json::json;
use zmportal_core::{Credentials, DiscoveryOptions, DiscoveryResult};

const API: &str = "http://zm.example.com/zm/api";

fn reachable() -> FakeNetwork {
    FakeNetwork::new().route(
        "GET",
        &format!("{API}/host/getVersion.json"),
        Reply::Json(version_body()),
    )
}

fn with_token_login(network: FakeNetwork) -> FakeNetwork {
    network.route(
        "POST",
        &format!("{API}/host/login.json"),
        Reply::Json(json!({"access_token": "jwt", "access_token_expires": 3600})),
    )
}

fn zms_config_route(query: &str) -> String {
    format!("{API}/configs/viewByName/ZM_PATH_ZMS.json?{query}")
}

async fn discover_as_admin(network: &FakeNetwork) -> DiscoveryResult {
    network
        .resolver()
        .discover(
            "http://zm.example.com",
            Some(&Credentials::new("admin", "hunter2")),
            &DiscoveryOptions::default(),
        )
        .await
        .expect("discovery should succeed")
}

#[tokio::test]
async fn reported_zms_path_overrides_cgi_url() {
    let network = with_token_login(reachable()).route(
        "GET",
        &zms_config_route("token=jwt"),
        Reply::Json(json!({"config": {"Name": "ZM_PATH_ZMS", "Value": "/custom/path/nph-zms"}})),
    );

    let result = discover_as_admin(&network).await;

    assert_eq!(result.portal_url, "http://zm.example.com/zm");
    assert_eq!(result.api_url, "http://zm.example.com/zm/api");
    assert_eq!(result.cgi_url, "http://zm.example.com/custom/path/nph-zms");
}

#[tokio::test]
async fn credentials_are_posted_to_login() {
    let network = with_token_login(reachable());

    discover_as_admin(&network).await;

    assert_eq!(
        network.forms(),
        vec![vec![
            ("user".to_string(), "admin".to_string()),
            ("pass".to_string(), "hunter2".to_string()),
        ]]
    );
}

#[tokio::test]
async fn failed_login_keeps_default_cgi_url() {
    let network = reachable().route("POST", &format!("{API}/host/login.json"), Reply::Status(401));

    let result = discover_as_admin(&network).await;

    assert_eq!(result.cgi_url, "http://zm.example.com/zm/cgi-bin/nph-zms");
    assert!(
        !network
            .requests()
            .iter()
            .any(|r| r.contains("configs/viewByName"))
    );
}

#[tokio::test]
async fn failed_or_empty_lookup_keeps_default_cgi_url() {
    let replies = [
        Reply::Status(500),
        Reply::Refused,
        Reply::Empty,
        Reply::Json(json!({"config": {"Value": ""}})),
        Reply::Json(json!({"config": {"Value": null}})),
        Reply::Json(json!({"unexpected": true})),
    ];

    for reply in replies {
        let network =
            with_token_login(reachable()).route("GET", &zms_config_route("token=jwt"), reply.clone());

        let result = discover_as_admin(&network).await;
        assert_eq!(
            result.cgi_url, "http://zm.example.com/zm/cgi-bin/nph-zms",
            "reply {reply:?}"
        );
    }
}

#[tokio::test]
async fn legacy_auth_session_is_used_for_lookup() {
    let network = reachable()
        .route(
            "POST",
            &format!("{API}/host/login.json"),
            Reply::Json(json!({"credentials": "auth=5f4dcc3b", "append_password": 0})),
        )
        .route(
            "GET",
            &zms_config_route("auth=5f4dcc3b"),
            Reply::Json(json!({"config": {"Value": "/zm/cgi-bin/nph-zms"}})),
        );

    let result = discover_as_admin(&network).await;

    assert_eq!(result.cgi_url, "http://zm.example.com/zm/cgi-bin/nph-zms");
    assert!(
        network
            .requests()
            .contains(&format!("GET {}", zms_config_route("auth=5f4dcc3b")))
    );
}

#[tokio::test]
async fn absolute_reported_url_is_used_verbatim() {
    let network = with_token_login(reachable()).route(
        "GET",
        &zms_config_route("token=jwt"),
        Reply::Json(json!({"config": {"Value": "https://streams.example.com/cgi-bin/nph-zms"}})),
    );

    let result = discover_as_admin(&network).await;

    assert_eq!(result.cgi_url, "https://streams.example.com/cgi-bin/nph-zms");
    assert_eq!(result.portal_url, "http://zm.example.com/zm");
}

#[tokio::test]
async fn no_credentials_means_no_login() {
    let network = with_token_login(reachable());

    let result = network
        .resolver()
        .discover("http://zm.example.com", None, &DiscoveryOptions::default())
        .await
        .unwrap();

    assert_eq!(result.cgi_url, "http://zm.example.com/zm/cgi-bin/nph-zms");
    assert_eq!(network.requests().len(), 1);
}
