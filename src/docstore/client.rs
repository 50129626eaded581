//! Feishu wiki client.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;

use super::cache::DirectionCache;
use super::types::{
    AppendChildrenRequest, ApiEnvelope, BlockPage, CreateNodeRequest, CreatedDocument, CreatedNode,
    Direction,
    NodePage, TokenRequest, TokenResponse, WikiNode, WrittenDocument,
};
use crate::config::{
    Config, DEFAULT_DIRECTION, DOCUMENT_READY_ATTEMPTS, DOCUMENT_READY_INTERVAL,
    TOKEN_EXPIRY_MARGIN_SECS, WIKI_NODE_PAGE_SIZE,
};
use crate::error_handling::{DocStoreError, WarningType};

/// Connection settings of a [`FeishuClient`].
#[derive(Debug, Clone)]
pub struct FeishuSettings {
    pub app_id: String,
    pub app_secret: String,
    pub wiki_id: String,
    /// Open platform endpoint without trailing slash.
    pub base_url: String,
    /// Readiness checks made after creating a document.
    pub ready_attempts: usize,
    pub ready_interval: Duration,
}

impl FeishuSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_id: config.feishu_app_id.clone(),
            app_secret: config.feishu_app_secret.clone(),
            wiki_id: config.feishu_wiki_id.clone(),
            base_url: config.feishu_base_url.trim_end_matches('/').to_string(),
            ready_attempts: DOCUMENT_READY_ATTEMPTS,
            ready_interval: DOCUMENT_READY_INTERVAL,
        }
    }
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Files digests as documents in a Feishu wiki space.
///
/// Digests are grouped under root nodes called directions. The tenant token
/// and the direction tokens are cached per client.
#[derive(Debug)]
pub struct FeishuClient {
    http: reqwest::Client,
    settings: FeishuSettings,
    token: Mutex<Option<CachedToken>>,
    directions: DirectionCache,
}

impl FeishuClient {
    pub fn new(http: reqwest::Client, settings: FeishuSettings) -> Self {
        Self::with_cache(http, settings, DirectionCache::new())
    }

    /// Creates a client that records direction tokens in `directions`.
    pub fn with_cache(
        http: reqwest::Client,
        settings: FeishuSettings,
        directions: DirectionCache,
    ) -> Self {
        Self {
            http,
            settings,
            token: Mutex::new(None),
            directions,
        }
    }

    /// True when credentials and the wiki space id are all set.
    pub fn is_configured(&self) -> bool {
        self.ensure_configured().is_ok()
    }

    fn ensure_configured(&self) -> Result<(), DocStoreError> {
        if self.settings.app_id.is_empty() {
            return Err(DocStoreError::NotConfigured("FEISHU_APP_ID"));
        }
        if self.settings.app_secret.is_empty() {
            return Err(DocStoreError::NotConfigured("FEISHU_APP_SECRET"));
        }
        if self.settings.wiki_id.is_empty() {
            return Err(DocStoreError::NotConfigured("FEISHU_WIKI_ID"));
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.settings.base_url)
    }

    fn nodes_url(&self) -> String {
        self.url(&format!(
            "/open-apis/wiki/v2/spaces/{}/nodes",
            self.settings.wiki_id
        ))
    }

    /// Returns a tenant access token, requesting a new one when the cached
    /// token is missing or about to expire.
    ///
    /// # Errors
    ///
    /// `DocStoreError::NotConfigured` when credentials are missing, otherwise
    /// transport, decode or API errors of the token endpoint.
    pub async fn tenant_access_token(&self) -> Result<String, DocStoreError> {
        self.ensure_configured()?;

        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        debug!("Requesting tenant access token");
        let response = self
            .http
            .post(self.url("/open-apis/auth/v3/tenant_access_token/internal"))
            .json(&TokenRequest {
                app_id: &self.settings.app_id,
                app_secret: &self.settings.app_secret,
            })
            .send()
            .await?;
        let body = read_body(response, "get tenant access token").await?;
        let parsed: TokenResponse = serde_json::from_str(&body)?;
        if parsed.code != 0 {
            return Err(DocStoreError::Api {
                operation: "get tenant access token",
                code: parsed.code,
                msg: parsed.msg,
            });
        }

        let lifetime = parsed.expire.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            value: parsed.tenant_access_token.clone(),
            refresh_at: Instant::now() + Duration::from_secs(lifetime),
        });
        Ok(parsed.tenant_access_token)
    }

    /// Sends an authorized request and unwraps the `{code, msg, data}` envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<Option<T>, DocStoreError> {
        let token = self.tenant_access_token().await?;
        let response = request.bearer_auth(token).send().await?;
        let body = read_body(response, operation).await?;

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)?;
        if envelope.code != 0 {
            return Err(DocStoreError::Api {
                operation,
                code: envelope.code,
                msg: envelope.msg,
            });
        }
        Ok(envelope.data)
    }

    async fn call_for_data<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<T, DocStoreError> {
        self.call(request, operation)
            .await?
            .ok_or_else(|| DocStoreError::Api {
                operation,
                code: 0,
                msg: "response has no data".to_string(),
            })
    }

    /// Resolves a direction name to its root node, creating the node when absent.
    ///
    /// An empty name means [`DEFAULT_DIRECTION`].
    ///
    /// # Errors
    ///
    /// Any failure of the listing or creation calls.
    pub async fn find_or_create_direction(
        &self,
        direction: &str,
    ) -> Result<Direction, DocStoreError> {
        self.ensure_configured()?;

        let name = if direction.trim().is_empty() {
            info!("No direction given, using {DEFAULT_DIRECTION}");
            DEFAULT_DIRECTION
        } else {
            direction
        };

        if let Some(token) = self.directions.get(name) {
            debug!("Direction {name} resolved from cache: {token}");
            return Ok(Direction {
                token,
                name: name.to_string(),
            });
        }

        let token = match self.find_root_node(name).await? {
            Some(node) => {
                info!("Found direction {name}: {}", node.node_token);
                node.node_token
            }
            None => {
                info!("Direction {name} not found, creating it");
                self.create_node(name, None).await?.node_token
            }
        };

        self.directions.insert(name, &token);
        Ok(Direction {
            token,
            name: name.to_string(),
        })
    }

    /// Walks the root node listing page by page looking for an exact title match.
    async fn find_root_node(&self, title: &str) -> Result<Option<WikiNode>, DocStoreError> {
        let page_size = WIKI_NODE_PAGE_SIZE.to_string();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("page_size", page_size.as_str())];
            if let Some(token) = page_token.as_deref() {
                query.push(("page_token", token));
            }
            let request = self.http.get(self.nodes_url()).query(&query);
            let page: NodePage = self.call_for_data(request, "list wiki nodes").await?;
            debug!("Listed {} wiki nodes", page.items.len());

            if let Some(node) = page.items.into_iter().find(|node| node.title == title) {
                return Ok(Some(node));
            }

            match page.page_token {
                Some(next) if page.has_more && !next.is_empty() => page_token = Some(next),
                _ => return Ok(None),
            }
        }
    }

    async fn create_node(
        &self,
        title: &str,
        parent: Option<&str>,
    ) -> Result<WikiNode, DocStoreError> {
        let request = self.http.post(self.nodes_url()).json(&CreateNodeRequest {
            title,
            parent_node_token: parent,
            obj_type: "docx",
            node_type: "origin",
        });
        let created: CreatedNode = self.call_for_data(request, "create wiki node").await?;
        Ok(created.node)
    }

    /// Creates a document under `parent_token` and writes `content` into it.
    ///
    /// Returns the document object token and whether it reported ready.
    /// Empty content leaves the document blank.
    ///
    /// # Errors
    ///
    /// Failures creating the node or writing its content. A document that
    /// never reports ready is not an error; the write is still attempted.
    pub async fn create_document(
        &self,
        parent_token: &str,
        title: &str,
        content: &str,
    ) -> Result<CreatedDocument, DocStoreError> {
        let node = self.create_node(title, Some(parent_token)).await?;
        info!(
            "Created wiki node {} (document {})",
            node.node_token, node.obj_token
        );

        let ready = self.wait_until_ready(&node.obj_token).await;
        if !ready {
            warn!(
                "{}: document {} after {} checks, writing anyway",
                WarningType::DocumentNotReady,
                node.obj_token,
                self.settings.ready_attempts
            );
        }

        self.write_content(&node.obj_token, content).await?;
        Ok(CreatedDocument {
            document_id: node.obj_token,
            ready,
        })
    }

    /// Polls the document until it answers 200.
    async fn wait_until_ready(&self, document_id: &str) -> bool {
        let strategy = FixedInterval::new(self.settings.ready_interval)
            .take(self.settings.ready_attempts.saturating_sub(1));
        let url = self.url(&format!("/open-apis/docx/v1/documents/{document_id}"));
        let url = url.as_str();

        Retry::spawn(strategy, move || async move {
            let token = self.tenant_access_token().await.map_err(|_| ())?;
            match self.http.get(url).bearer_auth(token).send().await {
                Ok(response) if response.status() == StatusCode::OK => Ok(()),
                Ok(response) => {
                    debug!("Document {document_id} not ready: {}", response.status());
                    Err(())
                }
                Err(e) => {
                    debug!("Document {document_id} readiness check failed: {e}");
                    Err(())
                }
            }
        })
        .await
        .is_ok()
    }

    async fn write_content(&self, document_id: &str, content: &str) -> Result<(), DocStoreError> {
        if content.is_empty() {
            warn!("Content for document {document_id} is empty, skipping write");
            return Ok(());
        }

        let blocks_url = self.url(&format!("/open-apis/docx/v1/documents/{document_id}/blocks"));
        let blocks: BlockPage = self
            .call_for_data(self.http.get(blocks_url), "list document blocks")
            .await?;
        let root = blocks
            .items
            .into_iter()
            .next()
            .ok_or_else(|| DocStoreError::MissingRootBlock(document_id.to_string()))?;

        let children_url = self.url(&format!(
            "/open-apis/docx/v1/documents/{document_id}/blocks/{}/children",
            root.block_id
        ));
        let request = self
            .http
            .post(children_url)
            .json(&AppendChildrenRequest::single_text(content));
        self.call::<serde_json::Value>(request, "write document content")
            .await?;

        info!(
            "Wrote {} chars to document {document_id}",
            content.chars().count()
        );
        Ok(())
    }

    /// Files `content` as a new document titled `title` under `direction`.
    ///
    /// # Errors
    ///
    /// Any failure resolving the direction or creating the document.
    pub async fn write_digest(
        &self,
        title: &str,
        content: &str,
        direction: &str,
    ) -> Result<WrittenDocument, DocStoreError> {
        let direction = self.find_or_create_direction(direction).await?;
        let created = self.create_document(&direction.token, title, content).await?;
        Ok(WrittenDocument {
            document_id: created.document_id,
            direction_name: direction.name,
            ready: created.ready,
        })
    }
}

/// Reads the response body, failing on a non-2xx status.
async fn read_body(
    response: reqwest::Response,
    operation: &'static str,
) -> Result<String, DocStoreError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(DocStoreError::HttpStatus {
            operation,
            status,
            body,
        });
    }
    Ok(body)
}
