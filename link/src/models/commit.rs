//! Commit request and response payloads.
//!
//! A write with a server-timestamp sentinel becomes a commit batch of two
//! entries: the full-document update and a transform listing the
//! server-filled field paths. The store applies both atomically.

use super::document::Document;
use serde::{Deserialize, Serialize};

/// `POST .../documents:commit` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

/// A single write in a commit batch.
///
/// Exactly one of `update`, `delete`, or `transform` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    /// Full-document overwrite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Document>,

    /// Document path to delete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,

    /// Server-side field transforms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<DocumentTransform>,
}

/// Server-side transforms applied to one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTransform {
    /// Full resource path of the target document
    pub document: String,

    pub field_transforms: Vec<FieldTransform>,
}

/// A single field transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: String,

    pub set_to_server_value: ServerValue,
}

/// Server-supplied sentinel values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerValue {
    /// Time at which the server processed the request
    RequestTime,
}

/// `documents:commit` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    /// One result per write in the request, in order
    #[serde(default)]
    pub write_results: Vec<WriteResult>,

    /// Time the commit was applied (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_time: Option<String>,
}

/// Result of a single write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    /// Update time of the document after this write (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}
