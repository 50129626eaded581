//! Integration tests for the HTTP API.
//!
//! The server runs on an ephemeral port; target pages and the Feishu API are
//! served by wiremock, so no real network access is needed.

mod helpers;

use page_digest::error_handling::WarningType;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{feishu_settings, mount_feishu_token, spawn_server, unconfigured_settings, WIKI_ID};

const PAGE: &str = r#"<html><head><title>Hi</title><meta name="description" content="Desc"></head><body><script>evil()</script><p>This is a long enough paragraph to survive filtering.</p></body></html>"#;

#[tokio::test]
async fn test_health() {
    let (base, _) = spawn_server(unconfigured_settings()).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok", "service": "page_digest"}));
}

#[tokio::test]
async fn test_preflight_request() {
    let (base, _) = spawn_server(unconfigured_settings()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/parse"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
}

#[tokio::test]
async fn test_parse_returns_digest() {
    let target = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&target)
        .await;
    let (base, _) = spawn_server(unconfigured_settings()).await;
    let page_url = format!("{}/article", target.uri());

    let response = reqwest::Client::new()
        .post(format!("{base}/api/parse"))
        .json(&json!({"url": page_url}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["title"], "Hi");
    assert_eq!(body["url"], page_url.as_str());
    let content = body["content"].as_str().unwrap();
    assert!(content.starts_with("标题：Hi\n\n描述：Desc\n\n来源链接："));
    assert!(content.contains("【Hi】\nDesc"));
    assert!(!content.contains("evil()"));
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_parse_upstream_failure_is_500() {
    let target = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&target)
        .await;
    let (base, state) = spawn_server(unconfigured_settings()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/parse"))
        .json(&json!({"url": target.uri()}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["content"], "");
    assert!(body["message"].as_str().unwrap().contains("503"));
    assert_eq!(state.stats.total_errors(), 1);
}

#[tokio::test]
async fn test_parse_bad_json_is_400() {
    let (base, _) = spawn_server(unconfigured_settings()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/parse"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_api_routes_reject_get() {
    let (base, _) = spawn_server(unconfigured_settings()).await;

    for route in ["/api/parse", "/api/write"] {
        let response = reqwest::get(format!("{base}{route}")).await.unwrap();
        assert_eq!(response.status(), 405, "{route}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_write_without_credentials_is_500() {
    let (base, _) = spawn_server(unconfigured_settings()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/write"))
        .json(&json!({"title": "T", "content": "C"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["documentID"], "");
    assert!(body["message"].as_str().unwrap().contains("FEISHU_APP_ID"));
}

#[tokio::test]
async fn test_write_files_document_under_direction() {
    let feishu = MockServer::start().await;
    mount_feishu_token(&feishu).await;
    let nodes = format!("/open-apis/wiki/v2/spaces/{WIKI_ID}/nodes");

    Mock::given(method("GET"))
        .and(path(nodes.as_str()))
        .and(header("authorization", "Bearer t-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"items": [{"node_token": "dir_node", "obj_token": "dir_obj", "title": "Rust"}], "has_more": false}
        })))
        .expect(1)
        .mount(&feishu)
        .await;
    Mock::given(method("POST"))
        .and(path(nodes.as_str()))
        .and(body_partial_json(json!({"title": "My digest", "parent_node_token": "dir_node"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"node": {"node_token": "doc_node", "obj_token": "doc_obj", "title": "My digest"}}
        })))
        .expect(1)
        .mount(&feishu)
        .await;
    Mock::given(method("GET"))
        .and(path("/open-apis/docx/v1/documents/doc_obj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(&feishu)
        .await;
    Mock::given(method("GET"))
        .and(path("/open-apis/docx/v1/documents/doc_obj/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "data": {"items": [{"block_id": "doc_obj"}]}
        })))
        .mount(&feishu)
        .await;
    Mock::given(method("POST"))
        .and(path("/open-apis/docx/v1/documents/doc_obj/blocks/doc_obj/children"))
        .and(body_partial_json(json!({
            "children": [{"block_type": 2, "text": {"elements": [{"text_run": {"content": "digest body"}}]}}],
            "index": -1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "success"})))
        .expect(1)
        .mount(&feishu)
        .await;

    let (base, state) = spawn_server(feishu_settings(&feishu.uri())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/write"))
        .json(&json!({"title": "My digest", "content": "digest body", "direction": "Rust"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["documentID"], "doc_obj");
    assert_eq!(body["documentName"], "Rust");
    assert_eq!(state.requests.snapshot().write_total, 1);
    assert_eq!(state.stats.get_warning_count(WarningType::DocumentNotReady), 0);
}

#[tokio::test]
async fn test_write_counts_document_not_ready() {
    let feishu = MockServer::start().await;
    mount_feishu_token(&feishu).await;
    let nodes = format!("/open-apis/wiki/v2/spaces/{WIKI_ID}/nodes");

    Mock::given(method("GET"))
        .and(path(nodes.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"items": [{"node_token": "dir_node", "obj_token": "dir_obj", "title": "自动总结"}], "has_more": false}
        })))
        .mount(&feishu)
        .await;
    Mock::given(method("POST"))
        .and(path(nodes.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"node": {"node_token": "slow_node", "obj_token": "slow_doc", "title": "Slow"}}
        })))
        .mount(&feishu)
        .await;
    Mock::given(method("GET"))
        .and(path("/open-apis/docx/v1/documents/slow_doc"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&feishu)
        .await;
    Mock::given(method("GET"))
        .and(path("/open-apis/docx/v1/documents/slow_doc/blocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "data": {"items": [{"block_id": "slow_doc"}]}
        })))
        .mount(&feishu)
        .await;
    Mock::given(method("POST"))
        .and(path("/open-apis/docx/v1/documents/slow_doc/blocks/slow_doc/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "success"})))
        .expect(1)
        .mount(&feishu)
        .await;

    let (base, state) = spawn_server(feishu_settings(&feishu.uri())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/write"))
        .json(&json!({"title": "Slow", "content": "written anyway"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["documentID"], "slow_doc");
    assert_eq!(state.stats.get_warning_count(WarningType::DocumentNotReady), 1);

    let status: Value = client
        .get(format!("{base}/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        status["warnings"]["by_type"]["Document not ready before content write"],
        1
    );
}

#[tokio::test]
async fn test_status_reports_counters() {
    let (base, _) = spawn_server(unconfigured_settings()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/api/parse"))
        .json(&json!({"url": "ftp://example.com"}))
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{base}/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["store_configured"], false);
    assert_eq!(body["requests"]["parse_total"], 1);
    assert_eq!(body["requests"]["parse_failed"], 1);
    assert_eq!(body["errors"]["total"], 1);
    assert_eq!(body["errors"]["by_type"]["Invalid URL"], 1);

    let metrics = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(metrics.contains("page_digest_requests_total{endpoint=\"parse\"} 1"));
    assert!(metrics.contains("page_digest_errors_total{type=\"Invalid URL\"} 1"));
}
