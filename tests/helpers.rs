// Shared test helpers for spinning up the API server against mock upstreams.

use std::sync::Arc;
use std::time::Duration;

use page_digest::docstore::{FeishuClient, FeishuSettings};
use page_digest::server::{serve, AppState};
use page_digest::ExtractOptions;
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WIKI_ID: &str = "wiki_test";

/// Feishu settings pointing at a mock server, with fast readiness polling.
#[allow(dead_code)] // Not every test file talks to the document store
pub fn feishu_settings(base_url: &str) -> FeishuSettings {
    FeishuSettings {
        app_id: "cli_app".to_string(),
        app_secret: "cli_secret".to_string(),
        wiki_id: WIKI_ID.to_string(),
        base_url: base_url.to_string(),
        ready_attempts: 2,
        ready_interval: Duration::from_millis(10),
    }
}

/// Settings with no credentials.
#[allow(dead_code)]
pub fn unconfigured_settings() -> FeishuSettings {
    FeishuSettings {
        app_id: String::new(),
        app_secret: String::new(),
        wiki_id: String::new(),
        base_url: "http://127.0.0.1:9".to_string(),
        ready_attempts: 1,
        ready_interval: Duration::from_millis(1),
    }
}

/// Starts the API server on an ephemeral port and returns its base URL and state.
#[allow(dead_code)]
pub async fn spawn_server(settings: FeishuSettings) -> (String, AppState) {
    let store = FeishuClient::new(reqwest::Client::new(), settings);
    let state = AppState::new(
        Arc::new(reqwest::Client::new()),
        Arc::new(store),
        ExtractOptions::default(),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let server_state = state.clone();
    tokio::spawn(async move {
        let _ = serve(listener, server_state).await;
    });

    (format!("http://{addr}"), state)
}

/// Mounts a tenant token endpoint answering with `t-test`.
#[allow(dead_code)]
pub async fn mount_feishu_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/open-apis/auth/v3/tenant_access_token/internal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok", "tenant_access_token": "t-test", "expire": 7200
        })))
        .mount(server)
        .await;
}
