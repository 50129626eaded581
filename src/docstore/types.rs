//! Request and response bodies of the Feishu open platform API.

use serde::{Deserialize, Serialize};

/// Common `{code, msg, data}` envelope of Feishu API responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub app_id: &'a str,
    pub app_secret: &'a str,
}

/// The token endpoint answers without a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub tenant_access_token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expire: u64,
}

/// A node of a wiki space.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WikiNode {
    pub node_token: String,
    #[serde(default)]
    pub obj_token: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NodePage {
    #[serde(default)]
    pub items: Vec<WikiNode>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub page_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateNodeRequest<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_node_token: Option<&'a str>,
    pub obj_type: &'static str,
    pub node_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedNode {
    pub node: WikiNode,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Block {
    pub block_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlockPage {
    #[serde(default)]
    pub items: Vec<Block>,
}

/// Block type code of a plain text block.
pub(crate) const TEXT_BLOCK_TYPE: u8 = 2;

#[derive(Debug, Serialize)]
pub(crate) struct AppendChildrenRequest<'a> {
    pub children: Vec<TextBlock<'a>>,
    /// `-1` appends after the last existing child.
    pub index: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextBlock<'a> {
    pub block_type: u8,
    pub text: TextBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextBody<'a> {
    pub elements: Vec<TextElement<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextElement<'a> {
    pub text_run: TextRun<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextRun<'a> {
    pub content: &'a str,
    pub style: serde_json::Map<String, serde_json::Value>,
}

impl<'a> AppendChildrenRequest<'a> {
    /// One text block holding `content`, appended at the end of the parent.
    pub fn single_text(content: &'a str) -> Self {
        Self {
            children: vec![TextBlock {
                block_type: TEXT_BLOCK_TYPE,
                text: TextBody {
                    elements: vec![TextElement {
                        text_run: TextRun {
                            content,
                            style: serde_json::Map::new(),
                        },
                    }],
                },
            }],
            index: -1,
        }
    }
}

/// A destination category: a root node of the wiki space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    /// Node token of the category document.
    pub token: String,
    /// Category title.
    pub name: String,
}

/// A document created in the wiki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedDocument {
    /// Object token of the document.
    pub document_id: String,
    /// False when the document never reported ready before the content write.
    pub ready: bool,
}

/// Outcome of filing a digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenDocument {
    /// Object token of the created document.
    pub document_id: String,
    /// Title of the category it was filed under.
    pub direction_name: String,
    /// False when the document never reported ready before the content write.
    pub ready: bool,
}
